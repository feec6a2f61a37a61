// src/data_input/mod.rs

pub mod column_select;
pub mod log_data;
pub mod log_parser;

// src/data_input/mod.rs
