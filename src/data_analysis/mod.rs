// src/data_analysis/mod.rs

pub mod position_error;
pub mod time_axis;

// src/data_analysis/mod.rs
