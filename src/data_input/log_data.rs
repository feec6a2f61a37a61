// src/data_input/log_data.rs

use ndarray::Array1;

use crate::error::PlotError;

/// First cell of a column that did not parse as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCell {
    /// 1-based data row.
    pub row: usize,
    pub value: String,
}

/// One CSV column. Missing and unparseable cells are stored as `NaN`; the first
/// unparseable one is kept so the column can be refused once it is actually plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub header: String,
    pub values: Array1<f64>,
    pub rejected: Option<RejectedCell>,
}

impl TableColumn {
    pub fn new<S: Into<String>>(header: S, values: Vec<f64>) -> Self {
        Self {
            header: header.into(),
            values: Array1::from(values),
            rejected: None,
        }
    }

    pub fn with_rejected(mut self, row: usize, value: impl Into<String>) -> Self {
        self.rejected = Some(RejectedCell {
            row,
            value: value.into(),
        });
        self
    }

    pub fn is_numeric(&self) -> bool {
        self.rejected.is_none()
    }

    /// The values, or [`PlotError::MalformedData`] naming the first bad cell.
    pub fn numeric_values(&self) -> Result<&Array1<f64>, PlotError> {
        match &self.rejected {
            None => Ok(&self.values),
            Some(cell) => Err(PlotError::MalformedData {
                column: self.header.clone(),
                row: cell.row,
                value: cell.value.clone(),
            }),
        }
    }
}

/// A fully materialized CSV test log, all columns row-aligned.
///
/// Columns are addressed by position, so duplicate headers stay distinct.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesTable {
    headers: Vec<String>,
    columns: Vec<TableColumn>,
}

impl TimeSeriesTable {
    /// Builds a table, failing with [`PlotError::RowCountMismatch`] if a column's
    /// length differs from the first column's.
    pub fn new(columns: Vec<TableColumn>) -> Result<Self, PlotError> {
        if let Some(expected) = columns.first().map(|c| c.values.len()) {
            for column in &columns {
                let len = column.values.len();
                if len != expected {
                    return Err(PlotError::RowCountMismatch {
                        column: column.header.clone(),
                        rows: len,
                        expected,
                    });
                }
            }
        }
        let headers = columns.iter().map(|c| c.header.clone()).collect();
        Ok(Self { headers, columns })
    }

    /// Convenience constructor from `(header, values)` pairs.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> Result<Self, PlotError> {
        Self::new(
            columns
                .into_iter()
                .map(|(header, values)| TableColumn::new(header, values))
                .collect(),
        )
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    pub fn column_at(&self, index: usize) -> Option<&TableColumn> {
        self.columns.get(index)
    }

    /// Values of the first column with exactly this header, numeric or not.
    pub fn column(&self, header: &str) -> Option<&Array1<f64>> {
        self.columns
            .iter()
            .find(|c| c.header == header)
            .map(|c| &c.values)
    }
}


// src/data_input/log_data.rs
