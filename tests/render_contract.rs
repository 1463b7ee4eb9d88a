mod common;

use common::{first_stroke, svg_texts, text_position};
use pagerank_chart::error::{RenderError, Result};
use pagerank_chart::viz::{self, RenderOptions, Scene, Surface, SvgSurface};
use pagerank_chart::{Chart, Series};

/// Surface that keeps every scene it is asked to present.
#[derive(Default)]
struct Recorder {
    scenes: Vec<Scene>,
}

impl Surface for Recorder {
    fn present(&mut self, scene: &Scene, _opts: &RenderOptions) -> Result<()> {
        self.scenes.push(scene.clone());
        Ok(())
    }
}

fn series_ab() -> Vec<Series> {
    vec![
        Series::from_points("A", [(2015.0, 0.10), (2016.0, 0.20)]),
        Series::from_points("B", [(2015.0, 0.30), (2016.0, 0.40)]),
    ]
}

#[test]
fn one_line_per_series_in_order() {
    let series = vec![
        Series::from_points("zlib1g", [(2015.0, 0.0148), (2016.0, 0.0)]),
        Series::from_points("dpkg", [(2015.0, 0.0050), (2016.0, 0.0074)]),
        Series::from_points("gcc", [(2015.0, 0.0139), (2016.0, 0.0075)]),
    ];
    let mut rec = Recorder::default();
    let scene = viz::render(&series, "Year", "PageRank", &mut rec).unwrap();

    let labels: Vec<&str> = scene.lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, ["zlib1g", "dpkg", "gcc"]);
    assert_eq!(scene.lines[1].points, vec![(2015.0, 0.0050), (2016.0, 0.0074)]);
    assert_eq!(rec.scenes.len(), 1);
    assert_eq!(rec.scenes[0], scene);
}

#[test]
fn legend_keeps_insertion_order_and_duplicates() {
    let series = vec![
        Series::from_points("perl", [(1.0, 1.0)]),
        Series::from_points("gcc", [(1.0, 2.0)]),
        Series::from_points("perl", [(1.0, 3.0)]),
    ];
    let mut rec = Recorder::default();
    let scene = viz::render(&series, "x", "y", &mut rec).unwrap();
    assert_eq!(scene.legend, vec!["perl", "gcc", "perl"]);
}

#[test]
fn mismatched_lengths_fail_before_presenting() {
    let series = vec![Series::new(
        "bad",
        vec![2015.0, 2016.0, 2017.0],
        vec![0.1, 0.2],
    )];
    let mut rec = Recorder::default();
    let err = viz::render(&series, "Year", "PageRank", &mut rec).unwrap_err();
    match err {
        RenderError::LengthMismatch {
            series,
            x_len,
            y_len,
        } => {
            assert_eq!(series, "bad");
            assert_eq!((x_len, y_len), (3, 2));
        }
        other => panic!("expected LengthMismatch, got {other:?}"),
    }
    assert!(rec.scenes.is_empty(), "nothing may be presented");
}

#[test]
fn mismatch_error_message_names_the_series() {
    let series = vec![Series::new("libjs-jquery", vec![2018.0], vec![])];
    let err = viz::render(&series, "Year", "PageRank", &mut Recorder::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "series 'libjs-jquery' has 1 x values but 0 y values"
    );
}

#[test]
fn empty_series_list_gives_axes_only_chart() {
    let mut svg = SvgSurface::new();
    let scene = viz::render(&[], "Year", "PageRank", &mut svg).unwrap();
    assert!(scene.is_empty());
    assert!(!scene.has_legend());
    assert_eq!(scene.x_range, (0.0, 1.0));
    assert_eq!(scene.y_range, (0.0, 1.0));

    let texts = svg_texts(svg.svg().expect("svg produced"));
    assert!(texts.iter().any(|t| t == "Year"));
    assert!(texts.iter().any(|t| t == "PageRank"));
}

#[test]
fn two_series_scenario() {
    let mut svg = SvgSurface::new();
    let scene = viz::render(&series_ab(), "Year", "PageRank", &mut svg).unwrap();

    assert_eq!(scene.lines.len(), 2);
    assert_eq!(scene.x_label, "Year");
    assert_eq!(scene.legend, vec!["A", "B"]);
    assert_ne!(scene.lines[0].color, scene.lines[1].color);

    let svg = svg.into_svg().expect("svg produced");
    assert!(text_position(&svg, "Year").is_some());
    let a = text_position(&svg, "A").expect("legend entry A");
    let b = text_position(&svg, "B").expect("legend entry B");
    assert!(a < b, "legend must list A before B");

    let first_a = first_stroke(&svg, &scene.lines[0].color.hex()).expect("line A drawn");
    let first_b = first_stroke(&svg, &scene.lines[1].color.hex()).expect("line B drawn");
    assert!(first_a < first_b, "line A must be drawn before line B");
}

#[test]
fn rendering_twice_is_identical() {
    let chart = Chart::new(series_ab(), "Year", "PageRank");
    let opts = RenderOptions::default();

    let mut first = SvgSurface::new();
    let mut second = SvgSurface::new();
    let s1 = viz::render_chart(&chart, &opts, &mut first).unwrap();
    let s2 = viz::render_chart(&chart, &opts, &mut second).unwrap();

    assert_eq!(s1, s2);
    assert_eq!(first.svg(), second.svg());
}

#[test]
fn hidden_legend_draws_no_labels() {
    let chart = Chart::new(series_ab(), "Year", "PageRank").with_legend(false);
    let svg = viz::render_svg_string(&chart, &RenderOptions::default()).unwrap();
    let texts = svg_texts(&svg);
    assert!(!texts.iter().any(|t| t == "A" || t == "B"));
}

#[test]
fn wide_integer_x_span_renders() {
    let series = vec![Series::from_points("A", [(0.0, 0.1), (1e20, 0.2)])];
    let mut svg = SvgSurface::new();
    let scene = viz::render(&series, "x", "y", &mut svg).unwrap();
    assert_eq!(scene.lines.len(), 1);
    assert!(svg.svg().is_some());
}

#[test]
fn extreme_but_representable_y_span_renders() {
    let series = vec![Series::from_points("A", [(0.5, -1e300), (1.5, 1e300)])];
    let mut svg = SvgSurface::new();
    let scene = viz::render(&series, "x", "y", &mut svg).unwrap();
    assert!(scene.y_range.0 < -1e300 && scene.y_range.1 > 1e300);
    assert!(svg.svg().is_some());
}

#[test]
fn y_span_beyond_f64_is_rejected() {
    let series = vec![Series::from_points("A", [(0.5, -1.7e308), (1.5, 1.7e308)])];
    let mut rec = Recorder::default();
    let err = viz::render(&series, "x", "y", &mut rec).unwrap_err();
    assert!(matches!(err, RenderError::RangeTooWide { axis: "y" }));
    assert!(rec.scenes.is_empty());
}
