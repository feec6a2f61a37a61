// src/constants.rs

use plotters::style::RGBColor;

// Full-scale increment count of the motor position encoder.
pub const MAX_MOTOR_INCREMENTS: f64 = 93450.0;

// Column header substrings. Columns are matched by substring, never by position.
pub const TIME_COLUMN: &str = "Time since start";
pub const HALL_THETA_COLUMN: &str = "hall_theta";
pub const MOTOR_THETA_COLUMN: &str = "motor_theta";
pub const POWER_COLUMN: &str = "Power";
pub const POWER_TOTAL_MARKER: &str = "total"; // compared case-insensitively

// Boilerplate removed from power column headers before they become legend labels.
pub const POWER_LABEL_BOILERPLATE: [&str; 2] = ["Power [W]", "HMC8041"];

pub const SECONDS_PER_HOUR: f64 = 3600.0;

// --- LaTeX figure sizing ---
// Text width of the thesis document in points.
pub const DOCUMENT_WIDTH_PT: f64 = 448.1309;
pub const INCHES_PER_PT: f64 = 1.0 / 72.27;
pub const DEFAULT_DPI: f64 = 300.0;
// Height of the error strip above the position panel.
pub const ERROR_STRIP_HEIGHT_IN: f64 = 0.5;

// --- Plot Color Assignments ---
// Palette names are historical and do not describe the colors.
pub const CB91_BLUE: RGBColor = RGBColor(0x23, 0x5B, 0x59);
pub const CB91_PINK: RGBColor = RGBColor(0x93, 0xCA, 0x97);
pub const CB91_GREEN: RGBColor = RGBColor(0x14, 0x9B, 0x80);
pub const CB91_PURPLE: RGBColor = RGBColor(0xFD, 0xCE, 0x78);
pub const CB91_VIOLET: RGBColor = RGBColor(0xEC, 0x37, 0x30);
pub const PALETTE: [RGBColor; 5] = [CB91_BLUE, CB91_PINK, CB91_GREEN, CB91_PURPLE, CB91_VIOLET];

pub const COLOR_ACTUAL_POSITION: RGBColor = CB91_BLUE;
pub const COLOR_COMMANDED_POSITION: RGBColor = CB91_GREEN;
pub const COLOR_POSITION_ERROR: RGBColor = CB91_BLUE;
pub const COLOR_MEAN_ERROR: RGBColor = CB91_VIOLET;

// Line widths in points.
pub const DEFAULT_LINE_WIDTH_PT: f64 = 0.8;
pub const MEAN_LINE_WIDTH_PT: f64 = 0.5;
pub const LEGEND_SAMPLE_LENGTH_PX: i32 = 20;

// Dash pattern (pixels) for commanded position and mean lines.
pub const DASH_LENGTH_PX: u32 = 12;
pub const DASH_SPACING_PX: u32 = 6;

// Legend frame opacity.
pub const LEGEND_BACKGROUND_ALPHA: f64 = 0.95;

// src/constants.rs
