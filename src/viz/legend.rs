//! Legend drawing for the separate right-hand panel.
//!
//! The inside legend uses plotters' own series-label box and lives in `mod.rs`.

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::style::{Rgb8, line_style};
use super::text::wrap_text_to_width;
use crate::error::{RenderError, Result};

const FONT_PX: u32 = 14;
const LINE_H: i32 = FONT_PX as i32 + 2;
const ROW_GAP: i32 = 6;
const PAD_X: i32 = 8;
const PAD_TOP: i32 = 24;
const SAMPLE_W: i32 = 22;
const SAMPLE_TO_TEXT_GAP: i32 = 8;

/// Draw a single-column legend: a short line sample in the series color followed
/// by the wrapped label. Entries keep the order of `items`.
pub fn draw_legend_panel<DB: DrawingBackend>(
    legend_area: &DrawingArea<DB, Shift>,
    items: &[(&str, Rgb8)],
) -> Result<()> {
    legend_area.fill(&WHITE).map_err(RenderError::backend)?;

    let (w_u32, _) = legend_area.dim_in_pixel();
    let w = w_u32 as i32;

    let label_style: TextStyle =
        TextStyle::from((FontFamily::SansSerif, FONT_PX)).pos(Pos::new(HPos::Left, VPos::Center));

    let text_x = PAD_X + SAMPLE_W + SAMPLE_TO_TEXT_GAP;
    let max_text_w = (w - text_x - PAD_X).max(40) as u32;

    let mut y = PAD_TOP;
    for (label, color) in items {
        let lines = wrap_text_to_width(label, FONT_PX, max_text_w);
        let first_center_y = y + LINE_H / 2;

        legend_area
            .draw(&PathElement::new(
                vec![(PAD_X, first_center_y), (PAD_X + SAMPLE_W, first_center_y)],
                line_style(*color, 2),
            ))
            .map_err(RenderError::backend)?;

        for (i, line) in lines.iter().enumerate() {
            let line_center_y = y + (i as i32) * LINE_H + LINE_H / 2;
            legend_area
                .draw(&Text::new(
                    line.as_str(),
                    (text_x, line_center_y),
                    label_style.clone(),
                ))
                .map_err(RenderError::backend)?;
        }

        y += (lines.len().max(1) as i32) * LINE_H + ROW_GAP;
    }
    Ok(())
}
