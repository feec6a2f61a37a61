// src/plot_functions/plot_position_error_power.rs

use log::info;
use ndarray::Array1;

use crate::config::{FigureStyle, RenderConfig};
use crate::constants::{HALL_THETA_COLUMN, MOTOR_THETA_COLUMN, TIME_COLUMN};
use crate::data_analysis::position_error::{compute_error, PositionError};
use crate::data_analysis::time_axis::{normalize_time, TimeUnit};
use crate::data_input::column_select::{
    clean_channel_name, select_by_substring, select_power_channels, ColumnSet,
};
use crate::data_input::log_data::TimeSeriesTable;
use crate::error::PlotError;
use crate::plot_framework::{
    data_range, dedup_labels, render_svg, series_y_range, write_figure, LinePattern, PanelConfig,
    PlotSeries, StackedFigure,
};

/// Generates the position error / position / power figure and writes it to
/// `config.output_path`, overwriting any existing file.
///
/// Returns the position error that was plotted.
pub fn plot_position_error_power(
    table: &TimeSeriesTable,
    config: &RenderConfig,
    style: &FigureStyle,
) -> Result<PositionError, PlotError> {
    info!("--- Generating Position Error / Power Figure ---");
    let (figure, position_error) = build_figure(table, config, style)?;
    write_figure(&config.output_path, &figure, style)?;
    Ok(position_error)
}

/// Headless variant: the same figure as an SVG document, nothing written to disk.
pub fn render_svg_string(
    table: &TimeSeriesTable,
    config: &RenderConfig,
    style: &FigureStyle,
) -> Result<String, PlotError> {
    let (figure, _) = build_figure(table, config, style)?;
    render_svg(&figure, style)
}

/// Lays out the three panels: error strip, position traces, power traces.
pub fn build_figure(
    table: &TimeSeriesTable,
    config: &RenderConfig,
    style: &FigureStyle,
) -> Result<(StackedFigure, PositionError), PlotError> {
    let time_set = select_by_substring(table, TIME_COLUMN)?;
    let hall_set = select_by_substring(table, HALL_THETA_COLUMN)?;
    let motor_set = select_by_substring(table, MOTOR_THETA_COLUMN)?;
    let power_set = select_power_channels(table, &config.excluded_power_substring)?;
    let position_error = compute_error(table)?;

    if table.is_empty() {
        return Err(PlotError::EmptyData);
    }
    info!(
        "  Mean position error: {:.2} %, max: {:.2} %",
        position_error.mean_error, position_error.max_error
    );

    let time_columns = time_set.columns(table)?;
    let raw_time = time_columns[0];
    if !raw_time[0].is_finite() {
        return Err(PlotError::MalformedData {
            column: time_set.headers[0].clone(),
            row: 1,
            value: raw_time[0].to_string(),
        });
    }

    let unit = TimeUnit::from_hours_flag(config.use_hours);
    let time = normalize_time(raw_time, unit);
    let x_range = data_range(time.iter().copied()).ok_or(PlotError::EmptyData)?;
    let stroke = style.stroke_px(config.line_width);

    let error_panel = error_strip_panel(&time, &position_error, stroke, style);
    let position_panel = position_panel(table, &time, &hall_set, &motor_set, stroke, style)?;
    let power_panel = power_panel(table, &time, &power_set, stroke, style, unit)?;

    let figure = StackedFigure {
        title: config.subject_label.clone(),
        x_range,
        panels: vec![error_panel, position_panel, power_panel],
    };
    Ok((figure, position_error))
}

fn error_strip_panel(
    time: &Array1<f64>,
    position_error: &PositionError,
    stroke: u32,
    style: &FigureStyle,
) -> PanelConfig {
    let mut series: Vec<PlotSeries> = (0..position_error.channel_count())
        .map(|channel| PlotSeries {
            data: zip_series(time, position_error.channel(channel).iter().copied()),
            label: "Position error".to_string(),
            color: if channel == 0 {
                style.error_color
            } else {
                style.color(channel)
            },
            stroke_width: stroke,
            pattern: LinePattern::Solid,
        })
        .collect();

    let t_first = time[0];
    let t_last = time[time.len() - 1];
    series.push(PlotSeries {
        data: vec![
            (t_first, position_error.mean_error),
            (t_last, position_error.mean_error),
        ],
        label: format!("Mean: {:.2} %", position_error.mean_error),
        color: style.mean_color,
        stroke_width: style.stroke_px(style.mean_line_width_pt),
        pattern: LinePattern::Dashed,
    });
    dedup_labels(&mut series);

    PanelConfig {
        y_range: series_y_range(&series).unwrap_or(-0.5..0.5),
        series,
        y_label: "Error [%]".to_string(),
        x_label: None,
        fixed_height_in: Some(style.error_strip_height_in),
    }
}

fn position_panel(
    table: &TimeSeriesTable,
    time: &Array1<f64>,
    hall_set: &ColumnSet,
    motor_set: &ColumnSet,
    stroke: u32,
    style: &FigureStyle,
) -> Result<PanelConfig, PlotError> {
    let mut series = Vec::new();
    let traces = [
        (hall_set, "Actual position", style.actual_position_color, LinePattern::Solid),
        (motor_set, "Commanded position", style.commanded_position_color, LinePattern::Dashed),
    ];
    for (role_index, (set, label, color, pattern)) in traces.into_iter().enumerate() {
        for (channel, (header, column)) in set.headers.iter().zip(set.columns(table)?).enumerate() {
            let label = if set.len() > 1 {
                format!("{label} ({header})")
            } else {
                label.to_string()
            };
            series.push(PlotSeries {
                data: zip_series(time, column.iter().copied()),
                label,
                color: if channel == 0 {
                    color
                } else {
                    style.color(channel * 2 + role_index)
                },
                stroke_width: stroke,
                pattern,
            });
        }
    }

    Ok(PanelConfig {
        y_range: series_y_range(&series).unwrap_or(-0.5..0.5),
        series,
        y_label: "Motor position []".to_string(),
        x_label: None,
        fixed_height_in: None,
    })
}

fn power_panel(
    table: &TimeSeriesTable,
    time: &Array1<f64>,
    power_set: &ColumnSet,
    stroke: u32,
    style: &FigureStyle,
    unit: TimeUnit,
) -> Result<PanelConfig, PlotError> {
    let mut series: Vec<PlotSeries> = power_set
        .headers
        .iter()
        .zip(power_set.columns(table)?)
        .enumerate()
        .map(|(channel, (header, column))| PlotSeries {
            data: zip_series(time, column.iter().copied()),
            label: clean_channel_name(header),
            color: style.color(channel),
            stroke_width: stroke,
            pattern: LinePattern::Solid,
        })
        .collect();
    dedup_labels(&mut series);

    Ok(PanelConfig {
        y_range: series_y_range(&series).unwrap_or(-0.5..0.5),
        series,
        y_label: "Power [W]".to_string(),
        x_label: Some(unit.axis_label().to_string()),
        fixed_height_in: None,
    })
}

fn zip_series(time: &Array1<f64>, values: impl Iterator<Item = f64>) -> Vec<(f64, f64)> {
    time.iter().copied().zip(values).collect()
}


// src/plot_functions/plot_position_error_power.rs
