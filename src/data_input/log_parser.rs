// src/data_input/log_parser.rs

use csv::ReaderBuilder;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::data_input::log_data::{TableColumn, TimeSeriesTable};
use crate::error::PlotError;

/// Parses a CSV test log from disk into a [`TimeSeriesTable`].
///
/// Fails with [`PlotError::FileNotFound`] if the path does not exist. Non-numeric
/// cells do not fail the load; see [`parse_log_reader`].
pub fn parse_log_file(input_file_path: &Path) -> Result<TimeSeriesTable, PlotError> {
    if !input_file_path.exists() {
        return Err(PlotError::FileNotFound {
            path: input_file_path.to_path_buf(),
        });
    }
    info!("Reading '{}'", input_file_path.display());
    let file = File::open(input_file_path)?;
    parse_log_reader(BufReader::new(file))
}

/// Parses CSV content with a header row.
///
/// Every column is read as `f64`. A column holding text (e.g. a wall-clock
/// timestamp) is still loaded, with its first unparseable cell recorded so that
/// only plotting that column fails.
pub fn parse_log_reader<R: Read>(reader: R) -> Result<TimeSeriesTable, PlotError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    debug!("Headers found in CSV: {:?}", headers);

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    let mut rejected: Vec<Option<(usize, String)>> = vec![None; headers.len()];
    for (row_index, result) in reader.records().enumerate() {
        let record = result?;
        for (col_idx, raw) in record.iter().enumerate().take(headers.len()) {
            let value = parse_cell(raw).unwrap_or_else(|| {
                if rejected[col_idx].is_none() {
                    rejected[col_idx] = Some((row_index + 1, raw.to_string()));
                }
                f64::NAN
            });
            values[col_idx].push(value);
        }
    }

    let columns = headers
        .into_iter()
        .zip(values)
        .zip(rejected)
        .map(|((header, values), rejected)| {
            let column = TableColumn::new(header, values);
            match rejected {
                Some((row, value)) => {
                    debug!(
                        "Column '{}' is not numeric (row {}: '{}')",
                        column.header, row, value
                    );
                    column.with_rejected(row, value)
                }
                None => column,
            }
        })
        .collect();

    let table = TimeSeriesTable::new(columns)?;
    info!(
        "Finished reading {} data rows ({} columns).",
        table.row_count(),
        table.headers().len()
    );
    Ok(table)
}

/// Empty cells become `NaN` (missing sample); anything else must parse as a float.
fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(f64::NAN);
    }
    trimmed.parse::<f64>().ok()
}


// src/data_input/log_parser.rs
