// src/plot_functions/mod.rs

pub mod plot_position_error_power;

// src/plot_functions/mod.rs
