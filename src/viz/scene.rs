//! Validated, fully laid-out description of what a chart draws.
//!
//! A [`Scene`] is built once from a [`Chart`] and then handed to a surface.
//! Everything a backend needs is decided here so the drawing code never has to
//! look at the raw series again.

use log::debug;
use serde::Serialize;

use super::style::{Rgb8, series_color};
use super::util::padded_range;
use crate::error::{RenderError, Result};
use crate::models::Chart;

/// Upper bound on x ticks; one per year below that.
const MAX_X_TICKS: usize = 12;
const DEFAULT_TICKS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLine {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: Rgb8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// All x values are whole numbers (years); ticks are printed without decimals.
    pub integral_x: bool,
    pub x_ticks: usize,
    pub y_ticks: usize,
    /// One entry per drawn line, in draw order.
    pub lines: Vec<SceneLine>,
    /// Legend entries in draw order; empty when the legend is switched off.
    pub legend: Vec<String>,
}

impl Scene {
    /// Validate `chart` and lay it out.
    ///
    /// Fails with [`RenderError::LengthMismatch`] when a series has a different
    /// number of x and y values, [`RenderError::NonFinite`] on NaN or infinite
    /// coordinates, and [`RenderError::RangeTooWide`] when an axis span does not
    /// fit in an f64. Nothing is truncated.
    pub fn build(chart: &Chart) -> Result<Scene> {
        for s in &chart.series {
            if s.x.len() != s.y.len() {
                return Err(RenderError::LengthMismatch {
                    series: s.name.clone(),
                    x_len: s.x.len(),
                    y_len: s.y.len(),
                });
            }
            if let Some(index) = s
                .points()
                .position(|(x, y)| !x.is_finite() || !y.is_finite())
            {
                return Err(RenderError::NonFinite {
                    series: s.name.clone(),
                    index,
                });
            }
        }

        let lines: Vec<SceneLine> = chart
            .series
            .iter()
            .enumerate()
            .map(|(idx, s)| SceneLine {
                label: s.name.clone(),
                points: s.points().collect(),
                color: series_color(idx),
            })
            .collect();

        let xs = || lines.iter().flat_map(|l| l.points.iter().map(|p| p.0));
        let ys = lines.iter().flat_map(|l| l.points.iter().map(|p| p.1));
        let x_range = padded_range(xs());
        let y_range = padded_range(ys);
        for (axis, (lo, hi)) in [("x", x_range), ("y", y_range)] {
            if !(hi - lo).is_finite() {
                return Err(RenderError::RangeTooWide { axis });
            }
        }

        let integral_x = xs().next().is_some() && xs().all(|x| x.fract() == 0.0);
        let x_ticks = if integral_x {
            let (lo, hi) = xs().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
            ((hi - lo).min(MAX_X_TICKS as f64) as usize + 1).min(MAX_X_TICKS)
        } else {
            DEFAULT_TICKS
        };

        let legend = if chart.show_legend {
            lines.iter().map(|l| l.label.clone()).collect()
        } else {
            Vec::new()
        };

        debug!(
            "scene: {} lines, x {:?}, y {:?}, legend entries {}",
            lines.len(),
            x_range,
            y_range,
            legend.len()
        );

        Ok(Scene {
            title: chart.title.clone(),
            x_label: chart.x_label.clone(),
            y_label: chart.y_label.clone(),
            x_range,
            y_range,
            integral_x,
            x_ticks,
            y_ticks: DEFAULT_TICKS,
            lines,
            legend,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether a legend is drawn at all.
    pub fn has_legend(&self) -> bool {
        !self.legend.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Series;

    #[test]
    fn legend_follows_flag() {
        let chart = Chart::new(
            vec![Series::from_points("A", [(1.0, 1.0), (2.0, 2.0)])],
            "x",
            "y",
        )
        .with_legend(false);
        let scene = Scene::build(&chart).unwrap();
        assert_eq!(scene.lines.len(), 1);
        assert!(!scene.has_legend());
    }

    #[test]
    fn nan_is_rejected_with_index() {
        let chart = Chart::new(
            vec![Series::new("A", vec![1.0, 2.0], vec![0.5, f64::NAN])],
            "x",
            "y",
        );
        match Scene::build(&chart) {
            Err(RenderError::NonFinite { series, index }) => {
                assert_eq!(series, "A");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn year_axis_gets_one_tick_per_year() {
        let chart = Chart::new(
            vec![Series::from_points(
                "A",
                (2015..=2022).map(|y| (y as f64, 0.1)),
            )],
            "Year",
            "PageRank",
        );
        let scene = Scene::build(&chart).unwrap();
        assert!(scene.integral_x);
        assert_eq!(scene.x_ticks, 8);
    }

    #[test]
    fn huge_integral_x_span_caps_ticks() {
        let chart = Chart::new(
            vec![Series::from_points("A", [(0.0, 0.1), (1e20, 0.2)])],
            "x",
            "y",
        );
        let scene = Scene::build(&chart).unwrap();
        assert!(scene.integral_x);
        assert_eq!(scene.x_ticks, MAX_X_TICKS);
    }

    #[test]
    fn unrepresentable_y_span_is_rejected() {
        let chart = Chart::new(
            vec![Series::from_points("A", [(0.5, -1.7e308), (1.5, 1.7e308)])],
            "x",
            "y",
        );
        match Scene::build(&chart) {
            Err(RenderError::RangeTooWide { axis }) => assert_eq!(axis, "y"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn fractional_x_uses_default_ticks() {
        let chart = Chart::new(
            vec![Series::from_points("A", [(0.5, 1.0), (1.5, 2.0)])],
            "x",
            "y",
        );
        let scene = Scene::build(&chart).unwrap();
        assert!(!scene.integral_x);
        assert_eq!(scene.x_ticks, DEFAULT_TICKS);
    }
}
