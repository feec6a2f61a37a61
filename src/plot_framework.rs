// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use log::{debug, info};
use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::config::FigureStyle;
use crate::constants::{DASH_LENGTH_PX, DASH_SPACING_PX, LEGEND_SAMPLE_LENGTH_PX};
use crate::error::{render_error, PlotError};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Unpadded range covering `values`, widened if all values are equal.
/// `None` if no value is finite.
pub fn data_range(values: impl IntoIterator<Item = f64>) -> Option<Range<f64>> {
    let (min, max) = finite_bounds(values)?;
    if max - min < 1e-12 {
        Some(min - 0.5..max + 0.5)
    } else {
        Some(min..max)
    }
}

/// Padded y range covering every finite point of every series.
pub fn series_y_range(series: &[PlotSeries]) -> Option<Range<f64>> {
    let (min, max) = finite_bounds(series.iter().flat_map(|s| s.data.iter().map(|&(_, y)| y)))?;
    let (lo, hi) = calculate_range(min, max);
    Some(lo..hi)
}

fn finite_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Tick label text. Large values use "k"/"M" notation, everything else gets
/// `decimals` fractional digits.
pub fn format_tick_label(value: f64, decimals: usize) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 10_000.0 {
        format!("{:.0}k", value / 1000.0)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Fractional digits needed to tell roughly ten ticks across `range` apart.
pub fn tick_decimals(range: &Range<f64>) -> usize {
    let step = (range.end - range.start).abs() / 10.0;
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (-step.log10()).ceil().clamp(0.0, 6.0) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePattern {
    #[default]
    Solid,
    Dashed,
}

#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub pattern: LinePattern,
}

/// Blanks every label that already appeared earlier so each legend entry shows once.
pub fn dedup_labels(series: &mut [PlotSeries]) {
    let mut seen: Vec<String> = Vec::new();
    for s in series.iter_mut() {
        if s.label.is_empty() {
            continue;
        }
        if seen.contains(&s.label) {
            s.label.clear();
        } else {
            seen.push(s.label.clone());
        }
    }
}

/// One panel of a stacked figure. The x range is owned by the figure.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub y_label: String,
    /// Only the bottom panel carries the x axis label and tick labels.
    pub x_label: Option<String>,
    /// Fixed height; panels without one share the remaining height evenly.
    pub fixed_height_in: Option<f64>,
}

/// Vertically stacked panels sharing one x range.
#[derive(Debug, Clone)]
pub struct StackedFigure {
    pub title: String,
    pub x_range: Range<f64>,
    pub panels: Vec<PanelConfig>,
}

/// Image formats the figure can be written as, picked from the output extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, PlotError> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(PlotError::UnsupportedFormat { extension }),
        }
    }
}

/// Draws a single panel: mesh, series and legend.
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    x_range: &Range<f64>,
    panel: &PanelConfig,
    style: &FigureStyle,
) -> Result<(), PlotError> {
    let tick_font = style.tick_label_font.tuple(style.dpi);
    let axis_font = style.axis_label_font.tuple(style.dpi);
    let legend_font = style.legend_font.tuple(style.dpi);

    // Same y label area on every panel keeps the shared x axis aligned.
    let y_label_area = (axis_font.1 * 1.5 + tick_font.1 * 4.0) as u32;
    let x_label_area = if panel.x_label.is_some() {
        (axis_font.1 * 1.5 + tick_font.1 * 1.5) as u32
    } else {
        0
    };
    let margin = (tick_font.1 * 0.5) as u32;

    let mut chart = ChartBuilder::on(area)
        .margin(margin)
        .x_label_area_size(x_label_area)
        .y_label_area_size(y_label_area)
        .build_cartesian_2d(x_range.clone(), panel.y_range.clone())
        .map_err(render_error)?;

    let show_x_ticks = panel.x_label.is_some();
    let x_decimals = tick_decimals(x_range);
    let y_decimals = tick_decimals(&panel.y_range);
    let x_formatter = |x: &f64| {
        if show_x_ticks {
            format_tick_label(*x, x_decimals)
        } else {
            String::new()
        }
    };
    let y_formatter = |y: &f64| format_tick_label(*y, y_decimals);

    chart
        .configure_mesh()
        .x_desc(panel.x_label.clone().unwrap_or_default())
        .y_desc(panel.y_label.as_str())
        .x_labels(10)
        .y_labels(if panel.fixed_height_in.is_some() { 3 } else { 6 })
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .light_line_style(WHITE.mix(0.7))
        .label_style(tick_font)
        .axis_desc_style(axis_font)
        .draw()
        .map_err(render_error)?;

    let mut legend_series_count = 0;
    for s in &panel.series {
        let points: Vec<(f64, f64)> = s
            .data
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        if points.is_empty() {
            continue;
        }

        let line_style = s.color.stroke_width(s.stroke_width);
        let series = match s.pattern {
            LinePattern::Solid => chart.draw_series(LineSeries::new(points, line_style)),
            LinePattern::Dashed => chart.draw_series(DashedLineSeries::new(
                points,
                DASH_LENGTH_PX,
                DASH_SPACING_PX,
                line_style,
            )),
        }
        .map_err(render_error)?;

        if !s.label.is_empty() {
            series.label(s.label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + LEGEND_SAMPLE_LENGTH_PX, y)], line_style)
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(style.legend_background_alpha))
            .border_style(BLACK)
            .label_font(legend_font)
            .draw()
            .map_err(render_error)?;
    }
    Ok(())
}

/// Draws the caption and all panels of `figure` onto `root_area`.
pub fn draw_stacked_figure<DB: DrawingBackend>(
    root_area: &DrawingArea<DB, Shift>,
    figure: &StackedFigure,
    style: &FigureStyle,
) -> Result<(), PlotError> {
    root_area.fill(&WHITE).map_err(render_error)?;

    let caption_font = style.caption_font.tuple(style.dpi);
    let caption_px = caption_font.1 as i32;
    root_area
        .draw(&Text::new(
            figure.title.as_str(),
            (caption_px / 2, caption_px / 2),
            caption_font.into_font().color(&BLACK),
        ))
        .map_err(render_error)?;
    let body = root_area.margin(caption_px * 2, 5, 5, 5);

    if figure.panels.is_empty() {
        return Ok(());
    }

    let body_height = body.dim_in_pixel().1 as i32;
    let fixed_total: i32 = figure
        .panels
        .iter()
        .filter_map(|p| p.fixed_height_in)
        .map(|h| style.inches_to_px(h) as i32)
        .sum();
    let flexible_count = figure
        .panels
        .iter()
        .filter(|p| p.fixed_height_in.is_none())
        .count()
        .max(1) as i32;
    let flexible_height = ((body_height - fixed_total) / flexible_count).max(1);

    let mut remaining = body;
    let last = figure.panels.len() - 1;
    for (panel_index, panel) in figure.panels.iter().enumerate() {
        if panel_index == last {
            draw_panel(&remaining, &figure.x_range, panel, style)?;
            break;
        }
        let height = panel
            .fixed_height_in
            .map_or(flexible_height, |h| style.inches_to_px(h) as i32);
        let (top, rest) = remaining.split_vertically(height);
        draw_panel(&top, &figure.x_range, panel, style)?;
        remaining = rest;
    }
    Ok(())
}

/// Renders the figure into an in-memory SVG document.
pub fn render_svg(figure: &StackedFigure, style: &FigureStyle) -> Result<String, PlotError> {
    let mut svg = String::new();
    {
        let root_area = SVGBackend::with_string(&mut svg, style.pixel_size()).into_drawing_area();
        draw_stacked_figure(&root_area, figure, style)?;
        root_area.present().map_err(render_error)?;
    }
    debug!("Rendered SVG document ({} bytes)", svg.len());
    Ok(svg)
}

/// Renders the figure as a PNG bitmap at `output_path`.
pub fn render_png(
    output_path: &Path,
    figure: &StackedFigure,
    style: &FigureStyle,
) -> Result<(), PlotError> {
    let root_area = BitMapBackend::new(output_path, style.pixel_size()).into_drawing_area();
    draw_stacked_figure(&root_area, figure, style)?;
    root_area.present().map_err(render_error)?;
    Ok(())
}

/// Writes the figure to `output_path`, replacing any existing file. The format
/// follows the extension.
pub fn write_figure(
    output_path: &Path,
    figure: &StackedFigure,
    style: &FigureStyle,
) -> Result<(), PlotError> {
    match OutputFormat::from_path(output_path)? {
        OutputFormat::Svg => fs::write(output_path, render_svg(figure, style)?)?,
        OutputFormat::Png => render_png(output_path, figure, style)?,
    }
    info!("  Figure saved as '{}'.", output_path.display());
    Ok(())
}


// src/plot_framework.rs
