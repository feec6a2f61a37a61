// src/lib.rs - Library interface for the figure renderer

pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;

use config::{FigureStyle, RenderConfig};
use data_analysis::position_error::PositionError;
use error::PlotError;

/// Loads `config.input_path`, computes the position error and writes the figure
/// to `config.output_path`.
pub fn run(config: &RenderConfig, style: &FigureStyle) -> Result<PositionError, PlotError> {
    let table = data_input::log_parser::parse_log_file(&config.input_path)?;
    plot_functions::plot_position_error_power::plot_position_error_power(&table, config, style)
}
