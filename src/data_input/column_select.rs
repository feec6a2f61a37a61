// src/data_input/column_select.rs

use log::debug;
use ndarray::Array1;

use crate::constants::{POWER_COLUMN, POWER_LABEL_BOILERPLATE, POWER_TOTAL_MARKER};
use crate::data_input::log_data::TimeSeriesTable;
use crate::error::PlotError;

/// Columns picked out of a table by one predicate, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    /// What was matched, e.g. the substring. Used in error messages.
    pub role: String,
    pub headers: Vec<String>,
    /// Table positions of `headers`.
    pub indices: Vec<usize>,
}

impl ColumnSet {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolves the set back into the table's columns. Fails with
    /// [`PlotError::MalformedData`] if a selected column holds a non-numeric cell.
    pub fn columns<'t>(&self, table: &'t TimeSeriesTable) -> Result<Vec<&'t Array1<f64>>, PlotError> {
        self.indices
            .iter()
            .map(|&idx| {
                table
                    .column_at(idx)
                    .ok_or_else(|| PlotError::MissingColumn {
                        substring: self.role.clone(),
                    })?
                    .numeric_values()
            })
            .collect()
    }
}

/// Every column whose header satisfies `predicate`. May be empty.
pub fn select_columns<P>(table: &TimeSeriesTable, role: &str, predicate: P) -> ColumnSet
where
    P: Fn(&str) -> bool,
{
    let (indices, headers): (Vec<usize>, Vec<String>) = table
        .headers()
        .iter()
        .enumerate()
        .filter(|(_, h)| predicate(h.as_str()))
        .map(|(idx, h)| (idx, h.clone()))
        .unzip();
    debug!("Columns for '{}': {:?}", role, headers);
    ColumnSet {
        role: role.to_string(),
        headers,
        indices,
    }
}

/// Headers containing `substring`. Fails with [`PlotError::MissingColumn`] if none do.
pub fn select_by_substring(table: &TimeSeriesTable, substring: &str) -> Result<ColumnSet, PlotError> {
    let set = select_columns(table, substring, |h| h.contains(substring));
    require_non_empty(set)
}

/// Power channel columns of the table: see [`filter_power_columns`].
pub fn select_power_channels(
    table: &TimeSeriesTable,
    excluded_substring: &str,
) -> Result<ColumnSet, PlotError> {
    let set = select_columns(table, POWER_COLUMN, |h| is_power_channel(h, excluded_substring));
    require_non_empty(set)
}

/// Headers containing `Power` but not `total` (any case). A non-empty
/// `excluded_substring` drops matching headers as well.
pub fn filter_power_columns<S: AsRef<str>>(headers: &[S], excluded_substring: &str) -> Vec<String> {
    headers
        .iter()
        .map(|h| h.as_ref())
        .filter(|h| is_power_channel(h, excluded_substring))
        .map(str::to_string)
        .collect()
}

fn is_power_channel(header: &str, excluded_substring: &str) -> bool {
    header.contains(POWER_COLUMN)
        && !header.to_lowercase().contains(POWER_TOTAL_MARKER)
        && (excluded_substring.is_empty() || !header.contains(excluded_substring))
}

/// Legend label for a power column: unit and instrument boilerplate removed,
/// surrounding whitespace and dashes trimmed. Falls back to the raw header if
/// nothing is left.
pub fn clean_channel_name(raw: &str) -> String {
    let mut name = raw.to_string();
    for boilerplate in POWER_LABEL_BOILERPLATE {
        name = name.replace(boilerplate, "");
    }
    let cleaned = name.trim_matches(|c: char| c.is_whitespace() || c == '-');
    if cleaned.is_empty() {
        raw.trim().to_string()
    } else {
        cleaned.to_string()
    }
}

fn require_non_empty(set: ColumnSet) -> Result<ColumnSet, PlotError> {
    if set.is_empty() {
        Err(PlotError::MissingColumn { substring: set.role })
    } else {
        Ok(set)
    }
}


// src/data_input/column_select.rs
