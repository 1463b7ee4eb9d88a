//! pagerank_chart
//!
//! A small Rust library for drawing named numeric series as an overlaid line chart
//! with axis labels and a legend. Pairs with the `pagerank-chart` CLI, which plots the
//! embedded PageRank scores of core Debian packages by year.
//!
//! ### Features
//! - Validate series (equal x/y lengths, finite values) before anything is drawn
//! - Deterministic layout: draw order, legend order and colors follow input order
//! - Present to SVG/PNG files, an in-memory SVG string, or a native viewer window
//!
//! ### Example
//! ```no_run
//! use pagerank_chart::{Series, viz};
//!
//! let series = vec![
//!     Series::from_points("A", [(2015.0, 0.10), (2016.0, 0.20)]),
//!     Series::from_points("B", [(2015.0, 0.30), (2016.0, 0.40)]),
//! ];
//! let mut out = viz::FileSurface::new("ab.svg");
//! let scene = viz::render(&series, "Year", "PageRank", &mut out)?;
//! assert_eq!(scene.legend, vec!["A", "B"]);
//! # Ok::<(), pagerank_chart::RenderError>(())
//! ```

pub mod dataset;
pub mod display;
pub mod error;
pub mod models;
pub mod viz;

pub use error::RenderError;
pub use models::{Chart, Series};
