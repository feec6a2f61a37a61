// src/data_analysis/time_axis.rs

use ndarray::Array1;

use crate::constants::SECONDS_PER_HOUR;

/// Unit of the plotted time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Hours,
}

impl TimeUnit {
    pub fn from_hours_flag(use_hours: bool) -> Self {
        if use_hours {
            TimeUnit::Hours
        } else {
            TimeUnit::Seconds
        }
    }

    pub fn seconds_per_unit(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Hours => SECONDS_PER_HOUR,
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "Test time [s]",
            TimeUnit::Hours => "Test time [hrs]",
        }
    }
}

/// Shifts timestamps so the first sample is at zero, then converts to `unit`.
pub fn normalize_time(times: &Array1<f64>, unit: TimeUnit) -> Array1<f64> {
    let Some(&t0) = times.first() else {
        return Array1::zeros(0);
    };
    let scale = unit.seconds_per_unit();
    times.mapv(|t| (t - t0) / scale)
}


// src/data_analysis/time_axis.rs
