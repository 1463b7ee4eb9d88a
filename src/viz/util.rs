//! Utility functions for visualization: axis ranges, tick formatting, locale mapping.

use num_format::{Locale, ToFormattedString};

use super::text::estimate_text_width_px;

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Compute a padded axis range from data values.
///
/// - no values: `0.0..1.0`
/// - a single distinct value `v`: `v - 0.5..v + 0.5`, or 5% of `|v|` where 0.5
///   is below the float resolution of `v`
/// - otherwise the min..max span widened by 5% on each side
///
/// Bounds saturate at `f64::MIN`/`f64::MAX`; the width `hi - lo` can still
/// overflow for data spanning most of the f64 range.
pub fn padded_range<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        let pad = if min - 0.5 < min {
            0.5
        } else {
            min.abs() * AXIS_MARGIN
        };
        return (saturate(min - pad), saturate(max + pad));
    }
    // halves keep the margin finite when `max - min` itself overflows
    let pad = (max * 0.5 - min * 0.5) * (2.0 * AXIS_MARGIN);
    (saturate(min - pad), saturate(max + pad))
}

fn saturate(v: f64) -> f64 {
    v.clamp(f64::MIN, f64::MAX)
}

/// Decimal places needed so that neighbouring ticks stay distinguishable.
pub fn tick_precision(lo: f64, hi: f64, ticks: usize) -> usize {
    let step = (hi - lo).abs() / ticks.max(1) as f64;
    if step >= 1.0 || step <= 0.0 {
        0
    } else {
        // epsilon keeps exact powers of ten (0.1, 0.01) from rounding up
        (-step.log10() - 1e-9).ceil().clamp(0.0, 6.0) as usize
    }
}

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'),
    }
}

/// Format a tick value with `prec` decimals, locale digit grouping and decimal separator.
/// Values that round to zero never carry a minus sign.
pub fn format_tick(v: f64, prec: usize, locale: &Locale, dec_sep: char) -> String {
    let digits = format!("{:.*}", prec, v.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };
    let negative = v < 0.0 && digits.bytes().any(|b| (b'1'..=b'9').contains(&b));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    match int_part.parse::<u64>() {
        Ok(n) => out.push_str(&n.to_formatted_string(locale)),
        Err(_) => out.push_str(int_part),
    }
    if let Some(f) = frac_part {
        out.push(dec_sep);
        out.push_str(f);
    }
    out
}

/// Format an x tick that sits on a whole number (years); no digit grouping.
pub fn format_integral_tick(v: f64) -> String {
    (v.round() as i64).to_string()
}

/// Compute a tight left label area width for the Y axis (in pixels),
/// based on the formatted tick labels that will appear.
///
/// Returns a width clamped to a sensible range to avoid extremes.
pub fn compute_left_label_area_px<F>(lo: f64, hi: f64, ticks: usize, font_px: u32, fmt: F) -> u32
where
    F: Fn(f64) -> String,
{
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 {
            0.0
        } else {
            i as f64 / ticks as f64
        };
        let s = fmt(lo + (hi - lo) * t);
        max_px = max_px.max(estimate_text_width_px(&s, font_px));
    }
    // Room for the tick marks plus the rotated axis description.
    max_px.saturating_add(40).clamp(60, 160)
}
