//! Public types and defaults for the visualization module.

/// Legend placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendMode {
    /// Boxed legend overlaid in the upper-right corner of the plotting area.
    #[default]
    Inside,
    /// Separate, non-overlapping legend panel on the right side.
    Right,
}

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Rendering knobs that are not part of the chart data itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub legend: LegendMode,
    /// Locale tag for tick labels, e.g. "en" or "de". See [`super::util::map_locale`].
    pub locale: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            legend: LegendMode::default(),
            locale: "en".to_string(),
        }
    }
}
