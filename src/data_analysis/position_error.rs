// src/data_analysis/position_error.rs

use log::{debug, warn};
use ndarray::{Array1, Array2, ArrayView1, Zip};
use ndarray_stats::QuantileExt;

use crate::constants::{HALL_THETA_COLUMN, MAX_MOTOR_INCREMENTS, MOTOR_THETA_COLUMN};
use crate::data_input::column_select::select_by_substring;
use crate::data_input::log_data::TimeSeriesTable;
use crate::error::PlotError;

/// Position tracking error between measured (hall) and commanded (motor) angle.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionError {
    /// Mean of `error_series`, rounded to 2 decimals.
    pub mean_error: f64,
    /// Error in percent of encoder full scale. One row per table row, one column
    /// per hall/motor channel pair.
    pub error_series: Array2<f64>,
    /// Max of `error_series`, rounded to 2 decimals.
    pub max_error: f64,
    /// Entries forced to zero because an input sample was missing or non-finite.
    pub missing_samples: usize,
}

impl PositionError {
    /// Row count of the error series (equals the table row count).
    pub fn len(&self) -> usize {
        self.error_series.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn channel_count(&self) -> usize {
        self.error_series.ncols()
    }

    pub fn channel(&self, index: usize) -> ArrayView1<'_, f64> {
        self.error_series.column(index)
    }

    /// `(mean_error, error_series, max_error)`.
    pub fn into_tuple(self) -> (f64, Array2<f64>, f64) {
        (self.mean_error, self.error_series, self.max_error)
    }
}

/// Computes the position error for every `hall_theta` / `motor_theta` column pair
/// of the table.
///
/// Columns are matched by substring. Equal channel counts pair positionally; a single
/// column on one side is compared against every column on the other side.
pub fn compute_error(table: &TimeSeriesTable) -> Result<PositionError, PlotError> {
    let hall = select_by_substring(table, HALL_THETA_COLUMN)?;
    let motor = select_by_substring(table, MOTOR_THETA_COLUMN)?;
    compute_error_from_columns(&hall.columns(table)?, &motor.columns(table)?)
}

/// Same as [`compute_error`] on columns already selected.
pub fn compute_error_from_columns(
    hall: &[&Array1<f64>],
    motor: &[&Array1<f64>],
) -> Result<PositionError, PlotError> {
    let pairs = pair_channels(hall, motor)?;
    let rows = pairs.first().map_or(0, |(h, _)| h.len());

    let mut error_series = Array2::<f64>::zeros((rows, pairs.len()));
    let mut missing_samples = 0usize;
    for (pair_idx, (h, m)) in pairs.iter().enumerate() {
        for (role, column) in [(HALL_THETA_COLUMN, h), (MOTOR_THETA_COLUMN, m)] {
            if column.len() != rows {
                return Err(PlotError::RowCountMismatch {
                    column: format!("{} channel {}", role, pair_idx + 1),
                    rows: column.len(),
                    expected: rows,
                });
            }
        }
        Zip::from(error_series.column_mut(pair_idx))
            .and(*h)
            .and(*m)
            .for_each(|err, &hall_theta, &motor_theta| {
                let diff = (hall_theta - motor_theta).abs() / MAX_MOTOR_INCREMENTS * 100.0;
                if diff.is_finite() {
                    *err = diff;
                } else {
                    // Missing input reads as zero error.
                    *err = 0.0;
                    missing_samples += 1;
                }
            });
    }

    let mean_error = round_to(error_series.mean().unwrap_or(0.0), 2);
    let max_error = round_to(error_series.max().copied().unwrap_or(0.0), 2);

    debug!(
        "Position error: mean {:.2} %, max {:.2} % over {} rows x {} channel(s)",
        mean_error,
        max_error,
        rows,
        pairs.len()
    );
    if missing_samples > 0 {
        warn!(
            "{} position error sample(s) had missing or non-finite input and were set to 0",
            missing_samples
        );
    }

    Ok(PositionError {
        mean_error,
        error_series,
        max_error,
        missing_samples,
    })
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn pair_channels<'a>(
    hall: &[&'a Array1<f64>],
    motor: &[&'a Array1<f64>],
) -> Result<Vec<(&'a Array1<f64>, &'a Array1<f64>)>, PlotError> {
    if hall.is_empty() {
        return Err(PlotError::MissingColumn {
            substring: HALL_THETA_COLUMN.to_string(),
        });
    }
    if motor.is_empty() {
        return Err(PlotError::MissingColumn {
            substring: MOTOR_THETA_COLUMN.to_string(),
        });
    }
    match (hall.len(), motor.len()) {
        (h, m) if h == m => Ok(hall.iter().copied().zip(motor.iter().copied()).collect()),
        (1, _) => Ok(motor.iter().map(|&m| (hall[0], m)).collect()),
        (_, 1) => Ok(hall.iter().map(|&h| (h, motor[0])).collect()),
        (h, m) => Err(PlotError::ChannelMismatch { hall: h, motor: m }),
    }
}


// src/data_analysis/position_error.rs
