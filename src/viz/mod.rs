//! Visualization: lay out named series as an overlaid line chart and present it.
//!
//! - One line per series, in the order given, colored from the tab10 cycle
//! - Axis descriptions from the chart, locale-aware tick labels
//! - Legend inside the plot (upper right) or in a separate right-hand panel
//! - Output to SVG/PNG files, an in-memory SVG string, or a viewer window

pub mod legend;
pub mod scene;
pub mod style;
pub mod surface;
pub mod text;
pub mod types;
pub mod util;

pub use scene::{Scene, SceneLine};
pub use surface::{FileSurface, Surface, SvgSurface, WindowSurface};
pub use types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, LegendMode, RenderOptions};

use crate::error::{RenderError, Result};
use crate::models::{Chart, Series};

use log::debug;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use legend::draw_legend_panel;
use style::line_style;
use util::{compute_left_label_area_px, format_integral_tick, format_tick, map_locale, tick_precision};

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        if plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        )
        .is_err()
        {
            log::error!("embedded sans-serif font could not be registered");
        }
    });
}

/// Draw `series` on shared axes labeled `x_label` / `y_label`, with a legend,
/// and present the result on `surface` using default options.
///
/// Returns the scene that was presented.
pub fn render(
    series: &[Series],
    x_label: &str,
    y_label: &str,
    surface: &mut dyn Surface,
) -> Result<Scene> {
    let chart = Chart::new(series.to_vec(), x_label, y_label);
    render_chart(&chart, &RenderOptions::default(), surface)
}

/// Fully-configurable entry point: validate and lay out `chart`, then present it.
pub fn render_chart(
    chart: &Chart,
    opts: &RenderOptions,
    surface: &mut dyn Surface,
) -> Result<Scene> {
    let scene = Scene::build(chart)?;
    surface.present(&scene, opts)?;
    Ok(scene)
}

/// Render `chart` to an SVG document in memory.
pub fn render_svg_string(chart: &Chart, opts: &RenderOptions) -> Result<String> {
    let scene = Scene::build(chart)?;
    scene_to_svg(&scene, opts)
}

/// Write `chart` to `out_path`: `.svg` via the SVG backend, anything else as a bitmap
/// whose format follows the extension (PNG recommended).
pub fn write_chart<P: AsRef<Path>>(chart: &Chart, out_path: P, opts: &RenderOptions) -> Result<()> {
    let scene = Scene::build(chart)?;
    write_scene(&scene, out_path, opts)
}

pub(crate) fn write_scene<P: AsRef<Path>>(
    scene: &Scene,
    out_path: P,
    opts: &RenderOptions,
) -> Result<()> {
    let out_path = out_path.as_ref();
    let size = (opts.width, opts.height);
    let is_svg = out_path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(out_path, size).into_drawing_area();
        draw_scene(root, scene, opts)
    } else {
        let root = BitMapBackend::new(out_path, size).into_drawing_area();
        draw_scene(root, scene, opts)
    }
}

pub(crate) fn scene_to_svg(scene: &Scene, opts: &RenderOptions) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (opts.width, opts.height)).into_drawing_area();
        draw_scene(root, scene, opts)?;
    }
    Ok(svg)
}

/// Rasterize into a packed RGB buffer of `width * height * 3` bytes.
pub(crate) fn scene_to_rgb(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; opts.width as usize * opts.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (opts.width, opts.height)).into_drawing_area();
        draw_scene(root, scene, opts)?;
    }
    Ok(buf)
}

/// Draw a laid-out scene onto any Plotters backend.
fn draw_scene<DB>(root: DrawingArea<DB, Shift>, scene: &Scene, opts: &RenderOptions) -> Result<()>
where
    DB: DrawingBackend,
{
    const MARGIN: u32 = 16;
    const TICK_FONT_PX: u32 = 12;

    ensure_fonts_registered();

    // ----------------------------
    // 1) Tick formatters
    // ----------------------------
    let (num_locale, dec_sep) = map_locale(&opts.locale);
    let (x_lo, x_hi) = scene.x_range;
    let (y_lo, y_hi) = scene.y_range;
    let x_prec = tick_precision(x_lo, x_hi, scene.x_ticks);
    let y_prec = tick_precision(y_lo, y_hi, scene.y_ticks);
    let integral_x = scene.integral_x;

    let x_label_fmt = move |x: &f64| {
        if integral_x {
            format_integral_tick(*x)
        } else {
            format_tick(*x, x_prec, num_locale, dec_sep)
        }
    };
    let y_label_fmt = move |v: &f64| format_tick(*v, y_prec, num_locale, dec_sep);

    let left_label_width_px =
        compute_left_label_area_px(y_lo, y_hi, scene.y_ticks, TICK_FONT_PX, |v| y_label_fmt(&v));

    // ----------------------------
    // 2) Split drawing areas
    // ----------------------------
    let use_panel = opts.legend == LegendMode::Right && scene.has_legend();
    let (plot_area, legend_area) = if use_panel {
        let (plot, legend) = root.split_horizontally((82).percent_width());
        (plot, Some(legend))
    } else {
        (root, None)
    };
    plot_area.fill(&WHITE).map_err(RenderError::backend)?;

    debug!(
        "drawing {} lines, legend {:?}, left label area {}px",
        scene.lines.len(),
        if scene.has_legend() { Some(opts.legend) } else { None },
        left_label_width_px
    );

    // ----------------------------
    // 3) Axes
    // ----------------------------
    let mut builder = ChartBuilder::on(&plot_area);
    builder
        .margin(MARGIN)
        .set_label_area_size(LabelAreaPosition::Left, left_label_width_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 56);
    if let Some(title) = scene.title.as_deref() {
        builder.caption(title, (FontFamily::SansSerif, 24));
    }
    let mut chart = builder
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(RenderError::backend)?;

    chart
        .configure_mesh()
        .x_desc(scene.x_label.as_str())
        .y_desc(scene.y_label.as_str())
        .x_labels(scene.x_ticks)
        .y_labels(scene.y_ticks)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, TICK_FONT_PX))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(RenderError::backend)?;

    // ----------------------------
    // 4) Lines, in order
    // ----------------------------
    for (idx, line) in scene.lines.iter().enumerate() {
        let color = line.color;
        let anno = chart
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                line_style(color, 2),
            ))
            .map_err(RenderError::backend)?;
        if !use_panel && let Some(label) = scene.legend.get(idx) {
            anno.label(label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], line_style(color, 2))
            });
        }
    }

    // ----------------------------
    // 5) Legend
    // ----------------------------
    if let Some(ref legend_area) = legend_area {
        let items: Vec<(&str, style::Rgb8)> = scene
            .legend
            .iter()
            .zip(&scene.lines)
            .map(|(label, line)| (label.as_str(), line.color))
            .collect();
        draw_legend_panel(legend_area, &items)?;
    } else if scene.has_legend() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .border_style(BLACK)
            .background_style(WHITE.mix(0.85))
            .label_font((FontFamily::SansSerif, 14))
            .draw()
            .map_err(RenderError::backend)?;
    }

    // ----------------------------
    // 6) Present
    // ----------------------------
    plot_area.present().map_err(RenderError::backend)?;
    if let Some(ref legend_area) = legend_area {
        legend_area.present().map_err(RenderError::backend)?;
    }
    Ok(())
}
