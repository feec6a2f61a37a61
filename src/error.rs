// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Every failure the loader, the error metric and the figure renderer can report.
///
/// All variants are fatal for the run. The only recovered condition in the crate
/// (non-finite position error samples) never reaches this type.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Input CSV does not exist.
    #[error("Input file not found: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// Reading the input or writing the figure failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself is structurally broken (ragged rows, invalid UTF-8, ...).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No header contains the expected substring.
    #[error("Missing column: no header contains '{substring}'")]
    MissingColumn { substring: String },

    /// A cell in a numeric column could not be parsed.
    #[error("Malformed data in column '{column}', row {row}: '{value}' is not numeric")]
    MalformedData {
        column: String,
        row: usize,
        value: String,
    },

    /// A column does not have as many rows as the others.
    #[error("Column '{column}' has {rows} rows, expected {expected}")]
    RowCountMismatch {
        column: String,
        rows: usize,
        expected: usize,
    },

    /// hall_theta and motor_theta channel counts cannot be paired.
    #[error("Cannot pair {hall} hall_theta column(s) with {motor} motor_theta column(s)")]
    ChannelMismatch { hall: usize, motor: usize },

    /// Table has no data rows to plot.
    #[error("No data rows available to plot")]
    EmptyData,

    /// Output extension has no matching plotting backend.
    #[error("Unsupported output format '{extension}' (expected .svg or .png)")]
    UnsupportedFormat { extension: String },

    /// The plotting backend reported an error.
    #[error("Rendering failed: {0}")]
    Render(String),
}

/// Maps a plotters drawing error into [`PlotError::Render`].
pub fn render_error<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

// src/error.rs
