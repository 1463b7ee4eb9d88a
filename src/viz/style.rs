//! Series colors and their plotters adapters.
//!
//! Lines take their color from the "tab10" cycle by position, so the first
//! series is always blue, the second orange, and so on. Ten series or more wrap.

use plotters::prelude::*;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Category10 ("tab10") palette.
const TAB10: [Rgb8; 10] = [
    Rgb8::new(31, 119, 180),  // blue    (#1F77B4)
    Rgb8::new(255, 127, 14),  // orange  (#FF7F0E)
    Rgb8::new(44, 160, 44),   // green   (#2CA02C)
    Rgb8::new(214, 39, 40),   // red     (#D62728)
    Rgb8::new(148, 103, 189), // purple  (#9467BD)
    Rgb8::new(140, 86, 75),   // brown   (#8C564B)
    Rgb8::new(227, 119, 194), // pink    (#E377C2)
    Rgb8::new(127, 127, 127), // gray    (#7F7F7F)
    Rgb8::new(188, 189, 34),  // olive   (#BCBD22)
    Rgb8::new(23, 190, 207),  // cyan    (#17BECF)
];

/// Color for the series at position `idx`.
#[inline]
pub fn series_color(idx: usize) -> Rgb8 {
    TAB10[idx % TAB10.len()]
}

pub fn rgb_color(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Stroke style for a line series.
pub fn line_style(c: Rgb8, width: u32) -> ShapeStyle {
    rgb_color(c).stroke_width(width)
}
