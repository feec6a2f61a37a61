// src/font_config.rs

// Font settings for the thesis figure. Sizes are in points and are scaled to pixels
// with the figure DPI at draw time, so text keeps its size when the figure is embedded.

/// Serif family to match the document body text.
pub const FONT_FAMILY_SERIF: &str = "serif";

pub const FONT_SIZE_CAPTION_PT: f64 = 10.0;
pub const FONT_SIZE_AXIS_LABEL_PT: f64 = 10.0;
pub const FONT_SIZE_TICK_LABEL_PT: f64 = 8.0;
pub const FONT_SIZE_LEGEND_PT: f64 = 8.0;

/// A font family plus a size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    pub family: &'static str,
    pub size_pt: f64,
}

impl FontStyle {
    pub const fn serif(size_pt: f64) -> Self {
        Self {
            family: FONT_FAMILY_SERIF,
            size_pt,
        }
    }

    /// Tuple form accepted by plotters' `IntoFont`, sized for the given DPI.
    pub fn tuple(&self, dpi: f64) -> (&'static str, f64) {
        (self.family, self.size_pt * dpi / 72.0)
    }
}

pub const FONT_CAPTION: FontStyle = FontStyle::serif(FONT_SIZE_CAPTION_PT);
pub const FONT_AXIS_LABEL: FontStyle = FontStyle::serif(FONT_SIZE_AXIS_LABEL_PT);
pub const FONT_TICK_LABEL: FontStyle = FontStyle::serif(FONT_SIZE_TICK_LABEL_PT);
pub const FONT_LEGEND: FontStyle = FontStyle::serif(FONT_SIZE_LEGEND_PT);


// src/font_config.rs
