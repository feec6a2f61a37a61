// src/config.rs

use std::path::{Path, PathBuf};

use plotters::style::RGBColor;

use crate::constants::{
    COLOR_ACTUAL_POSITION, COLOR_COMMANDED_POSITION, COLOR_MEAN_ERROR, COLOR_POSITION_ERROR,
    DEFAULT_DPI, DEFAULT_LINE_WIDTH_PT, DOCUMENT_WIDTH_PT, ERROR_STRIP_HEIGHT_IN, INCHES_PER_PT,
    LEGEND_BACKGROUND_ALPHA, MEAN_LINE_WIDTH_PT, PALETTE,
};
use crate::font_config::{FontStyle, FONT_AXIS_LABEL, FONT_CAPTION, FONT_LEGEND, FONT_TICK_LABEL};

/// Everything one render run needs: where to read, where to write, and what to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Caption drawn above the figure (e.g. the motor under test).
    pub subject_label: String,
    /// Trace line width in points.
    pub line_width: f64,
    /// Plot the time axis in hours instead of seconds.
    pub use_hours: bool,
    /// Power columns containing this substring are left out. Empty disables the filter.
    pub excluded_power_substring: String,
}

impl RenderConfig {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        subject_label: impl Into<String>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            subject_label: subject_label.into(),
            line_width: DEFAULT_LINE_WIDTH_PT,
            use_hours: false,
            excluded_power_substring: String::new(),
        }
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_hours(mut self, use_hours: bool) -> Self {
        self.use_hours = use_hours;
        self
    }

    pub fn with_excluded_power(mut self, substring: impl Into<String>) -> Self {
        self.excluded_power_substring = substring.into();
        self
    }

    /// Default output path next to the input: `<stem>_position_error_power.svg`.
    pub fn default_output_for(input_path: &Path) -> PathBuf {
        let root_name = input_path.file_stem().unwrap_or_default().to_string_lossy();
        input_path.with_file_name(format!("{root_name}_position_error_power.svg"))
    }
}

/// Visual styling for a figure. Passed explicitly into rendering so several
/// figures with different styles can be produced in one process.
#[derive(Debug, Clone)]
pub struct FigureStyle {
    /// Color cycle for power channels and extra position channels.
    pub palette: Vec<RGBColor>,
    pub actual_position_color: RGBColor,
    pub commanded_position_color: RGBColor,
    pub error_color: RGBColor,
    pub mean_color: RGBColor,
    pub caption_font: FontStyle,
    pub axis_label_font: FontStyle,
    pub tick_label_font: FontStyle,
    pub legend_font: FontStyle,
    pub dpi: f64,
    pub width_in: f64,
    pub height_in: f64,
    pub error_strip_height_in: f64,
    pub mean_line_width_pt: f64,
    pub legend_background_alpha: f64,
}

impl Default for FigureStyle {
    fn default() -> Self {
        let (width_in, height_in) = figure_size(1.0, None);
        Self {
            palette: PALETTE.to_vec(),
            actual_position_color: COLOR_ACTUAL_POSITION,
            commanded_position_color: COLOR_COMMANDED_POSITION,
            error_color: COLOR_POSITION_ERROR,
            mean_color: COLOR_MEAN_ERROR,
            caption_font: FONT_CAPTION,
            axis_label_font: FONT_AXIS_LABEL,
            tick_label_font: FONT_TICK_LABEL,
            legend_font: FONT_LEGEND,
            dpi: DEFAULT_DPI,
            width_in,
            height_in,
            error_strip_height_in: ERROR_STRIP_HEIGHT_IN,
            mean_line_width_pt: MEAN_LINE_WIDTH_PT,
            legend_background_alpha: LEGEND_BACKGROUND_ALPHA,
        }
    }
}

impl FigureStyle {
    /// Resize the figure to a fraction of the document text width.
    pub fn with_figure_size(mut self, fraction: f64, height_ratio: Option<f64>) -> Self {
        let (width_in, height_in) = figure_size(fraction, height_ratio);
        self.width_in = width_in;
        self.height_in = height_in;
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (self.inches_to_px(self.width_in), self.inches_to_px(self.height_in))
    }

    pub fn inches_to_px(&self, inches: f64) -> u32 {
        (inches * self.dpi).round().max(1.0) as u32
    }

    /// Stroke width in pixels for a width given in points. Never thinner than one pixel.
    pub fn stroke_px(&self, width_pt: f64) -> u32 {
        (width_pt * self.dpi / 72.0).round().max(1.0) as u32
    }

    /// Cycles through the palette.
    pub fn color(&self, index: usize) -> RGBColor {
        if self.palette.is_empty() {
            PALETTE[index % PALETTE.len()]
        } else {
            self.palette[index % self.palette.len()]
        }
    }
}

/// Figure dimensions in inches that avoid scaling when embedded in LaTeX.
///
/// The width is `fraction` of the document text width. The height follows the golden
/// ratio unless `height_ratio` (height / width) is given.
pub fn figure_size(fraction: f64, height_ratio: Option<f64>) -> (f64, f64) {
    let width_in = DOCUMENT_WIDTH_PT * fraction * INCHES_PER_PT;
    let golden_ratio = (5f64.sqrt() - 1.0) / 2.0;
    let height_in = width_in * height_ratio.unwrap_or(golden_ratio);
    (width_in, height_in)
}


// src/config.rs
