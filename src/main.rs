// src/main.rs

use clap::Parser;
use log::{error, info, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

use motor_test_plot::config::{FigureStyle, RenderConfig};
use motor_test_plot::constants::DEFAULT_LINE_WIDTH_PT;

/// Renders the position error / position / power figure for one motor test log.
#[derive(Parser, Debug)]
#[command(name = "motor_test_plot")]
#[command(version)]
#[command(about = "Plot motor position tracking error and power draw from a CSV test log")]
struct Cli {
    /// CSV test log with a header row.
    input: PathBuf,

    /// Output image (.svg or .png). Defaults to `<input stem>_position_error_power.svg`.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Caption drawn above the figure, e.g. the motor name.
    #[arg(short, long, default_value = "")]
    subject: String,

    /// Trace line width in points.
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH_PT)]
    line_width: f64,

    /// Plot the time axis in hours.
    #[arg(long)]
    hours: bool,

    /// Leave out power columns whose header contains this text.
    #[arg(long, value_name = "SUBSTRING", default_value = "")]
    exclude_power: String,

    /// Figure width as a fraction of the document text width.
    #[arg(long, default_value_t = 1.0)]
    fraction: f64,

    /// Figure height as a ratio of its width (golden ratio if omitted).
    #[arg(long)]
    height_ratio: Option<f64>,

    /// Output resolution used to convert points to pixels.
    #[arg(long)]
    dpi: Option<f64>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| RenderConfig::default_output_for(&cli.input));
    let config = RenderConfig::new(&cli.input, output, cli.subject.as_str())
        .with_line_width(cli.line_width)
        .with_hours(cli.hours)
        .with_excluded_power(cli.exclude_power.as_str());

    let mut style = FigureStyle::default().with_figure_size(cli.fraction, cli.height_ratio);
    if let Some(dpi) = cli.dpi {
        style = style.with_dpi(dpi);
    }

    match motor_test_plot::run(&config, &style) {
        Ok(position_error) => {
            info!(
                "Done. Mean error {:.2} %, max error {:.2} %.",
                position_error.mean_error, position_error.max_error
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

// src/main.rs
