// tests/end_to_end_test.rs

use std::fs;
use std::path::Path;

use motor_test_plot::config::{FigureStyle, RenderConfig};
use motor_test_plot::data_input::column_select::filter_power_columns;
use motor_test_plot::data_input::log_parser::parse_log_file;
use motor_test_plot::error::PlotError;
use motor_test_plot::plot_functions::plot_position_error_power::render_svg_string;

const THREE_ROW_LOG: &str = "\
Time since start [s],hall_theta_1,motor_theta_1,Power [W] Ch1
0,10,10,1.0
1,20,19,1.1
2,30,33,1.2
";

fn write_log(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn init_logs() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_row_log_error_values() {
        init_logs();
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", THREE_ROW_LOG);
        let output = dir.path().join("run.svg");

        let config = RenderConfig::new(&input, &output, "EM1");
        let result = motor_test_plot::run(&config, &FigureStyle::default()).unwrap();

        let expected = [0.0, 0.00107, 0.00321];
        for (value, expected) in result.channel(0).iter().zip(expected) {
            assert!(
                (value - expected).abs() < 5e-6,
                "error {} differs from {}",
                value,
                expected
            );
        }
        // Both statistics are far below the 2-decimal rounding step.
        assert_eq!(result.mean_error, 0.0);
        assert_eq!(result.max_error, 0.0);
        assert!(output.exists());
    }

    #[test]
    fn test_svg_contains_all_panels() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", THREE_ROW_LOG);
        let table = parse_log_file(&input).unwrap();

        let config = RenderConfig::new(&input, dir.path().join("unused.svg"), "EM1 endurance");
        let svg = render_svg_string(&table, &config, &FigureStyle::default()).unwrap();

        for expected in [
            "EM1 endurance",
            "Position error",
            "Mean: 0.00 %",
            "Actual position",
            "Commanded position",
            "Ch1",
            "Error [%]",
            "Power [W]",
            "Test time [s]",
        ] {
            assert!(svg.contains(expected), "SVG is missing '{}'", expected);
        }
        assert!(!dir.path().join("unused.svg").exists());
    }

    #[test]
    fn test_hours_axis_label() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", THREE_ROW_LOG);
        let table = parse_log_file(&input).unwrap();

        let config = RenderConfig::new(&input, "unused.svg", "EM1").with_hours(true);
        let svg = render_svg_string(&table, &config, &FigureStyle::default()).unwrap();
        assert!(svg.contains("Test time [hrs]"));
        assert!(!svg.contains("Test time [s]"));
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", THREE_ROW_LOG);
        let output = write_log(dir.path(), "figure.svg", "stale content");

        let config = RenderConfig::new(&input, &output, "EM1");
        motor_test_plot::run(&config, &FigureStyle::default()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("<svg"));
        assert!(!written.contains("stale content"));
    }

    #[test]
    fn test_png_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", THREE_ROW_LOG);
        let output = dir.path().join("figure.png");

        let config = RenderConfig::new(&input, &output, "EM1");
        let style = FigureStyle::default().with_dpi(100.0);
        motor_test_plot::run(&config, &style).unwrap();

        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_unsupported_output_format() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", THREE_ROW_LOG);
        let config = RenderConfig::new(&input, dir.path().join("figure.pdf"), "EM1");
        assert!(matches!(
            motor_test_plot::run(&config, &FigureStyle::default()),
            Err(PlotError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_power_filtering() {
        let headers = ["Power [W] Total", "Power [W] Motor1", "Power [W] Motor2"];
        assert_eq!(
            filter_power_columns(&headers, ""),
            ["Power [W] Motor1", "Power [W] Motor2"]
        );
        assert_eq!(filter_power_columns(&headers, "Motor2"), ["Power [W] Motor1"]);
    }

    #[test]
    fn test_excluded_power_channel_not_drawn() {
        let log = "\
Time since start [s],hall_theta_1,motor_theta_1,Power [W] Total,Power [W] Heater,Power [W] Pump
0,0,0,5,1,4
1,0,0,5,1,4
";
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", log);
        let table = parse_log_file(&input).unwrap();

        let config = RenderConfig::new(&input, "unused.svg", "EM1").with_excluded_power("Pump");
        let svg = render_svg_string(&table, &config, &FigureStyle::default()).unwrap();
        assert!(svg.contains("Heater"));
        assert!(!svg.contains("Pump"));
        assert!(!svg.contains("Total"));
    }

    #[test]
    fn test_text_column_outside_plot_roles_renders() {
        let log = "\
Timestamp,Time since start [s],hall_theta_1,motor_theta_1,Power [W] Ch1
2021-05-01 10:00:00,0,10,10,1.0
2021-05-01 10:00:01,1,20,19,1.1
";
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", log);
        let output = dir.path().join("figure.svg");

        let config = RenderConfig::new(&input, &output, "EM1");
        let result = motor_test_plot::run(&config, &FigureStyle::default()).unwrap();
        assert_eq!(result.len(), 2);
        assert!(fs::read_to_string(&output).unwrap().contains("Ch1"));
    }

    #[test]
    fn test_excluded_power_channel_with_text_renders() {
        let log = "\
Time since start [s],hall_theta_1,motor_theta_1,Power [W] Heater,Power [W] Faulty
0,0,0,1.0,ERR
1,0,0,1.1,ERR
";
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", log);
        let output = dir.path().join("figure.svg");

        let config = RenderConfig::new(&input, &output, "EM1").with_excluded_power("Faulty");
        motor_test_plot::run(&config, &FigureStyle::default()).unwrap();
        let svg = fs::read_to_string(&output).unwrap();
        assert!(svg.contains("Heater"));
        assert!(!svg.contains("Faulty"));

        // Without the exclusion the text cells belong to a plotted column.
        let config = RenderConfig::new(&input, &output, "EM1");
        match motor_test_plot::run(&config, &FigureStyle::default()) {
            Err(PlotError::MalformedData { column, row, value }) => {
                assert_eq!(column, "Power [W] Faulty");
                assert_eq!(row, 1);
                assert_eq!(value, "ERR");
            }
            other => panic!("expected MalformedData, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_motor_column_fails_run() {
        let log = "Time since start [s],hall_theta_1,Power [W] Ch1\n0,1,1\n";
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", log);
        let config = RenderConfig::new(&input, dir.path().join("figure.svg"), "EM1");

        match motor_test_plot::run(&config, &FigureStyle::default()) {
            Err(PlotError::MissingColumn { substring }) => assert_eq!(substring, "motor_theta"),
            other => panic!("expected MissingColumn, got {:?}", other.map(|_| ())),
        }
        assert!(!dir.path().join("figure.svg").exists());
    }

    #[test]
    fn test_missing_time_column_fails_run() {
        let log = "hall_theta_1,motor_theta_1,Power [W] Ch1\n0,1,1\n";
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", log);
        let config = RenderConfig::new(&input, dir.path().join("figure.svg"), "EM1");
        assert!(matches!(
            motor_test_plot::run(&config, &FigureStyle::default()),
            Err(PlotError::MissingColumn { substring }) if substring == "Time since start"
        ));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig::new(dir.path().join("absent.csv"), "out.svg", "EM1");
        assert!(matches!(
            motor_test_plot::run(&config, &FigureStyle::default()),
            Err(PlotError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_malformed_cell_names_column() {
        let log = "Time since start [s],hall_theta_1,motor_theta_1,Power [W] Ch1\n0,1,1,oops\n";
        let dir = tempfile::tempdir().unwrap();
        let input = write_log(dir.path(), "run.csv", log);
        let config = RenderConfig::new(&input, dir.path().join("figure.svg"), "EM1");
        match motor_test_plot::run(&config, &FigureStyle::default()) {
            Err(PlotError::MalformedData { column, .. }) => assert_eq!(column, "Power [W] Ch1"),
            other => panic!("expected MalformedData, got {:?}", other.map(|_| ())),
        }
    }
}
