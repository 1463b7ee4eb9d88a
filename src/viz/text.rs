//! Text measurement and wrapping for legend labels.

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Cut `text` to fit `max_px`, ending with a single ellipsis when shortened.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out: String = String::new();
    for ch in text.chars() {
        out.push(ch);
        out.push('…');
        let fits = estimate_text_width_px(&out, font_px) <= max_px;
        out.pop();
        if !fits {
            out.pop();
            break;
        }
    }
    if out.is_empty() {
        return String::new();
    }
    out.push('…');
    out
}

/// Wrap a legend label into lines no wider than `max_px`.
///
/// Breaks after whitespace and hyphens so package names like `multiarch-support`
/// split at the dash; a single overlong fragment is truncated.
pub fn wrap_text_to_width(text: &str, font_px: u32, max_px: u32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut cur = String::new();

    for piece in split_keeping_hyphens(text) {
        let candidate = if cur.is_empty() || cur.ends_with('-') {
            format!("{cur}{piece}")
        } else {
            format!("{cur} {piece}")
        };
        if estimate_text_width_px(&candidate, font_px) <= max_px {
            cur = candidate;
            continue;
        }
        if !cur.is_empty() {
            lines.push(std::mem::take(&mut cur));
        }
        cur = truncate_to_width(piece, font_px, max_px);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Split on whitespace, and after each hyphen inside a word.
fn split_keeping_hyphens(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for word in text.split_whitespace() {
        let mut rest = word;
        while let Some(pos) = rest.find('-') {
            if pos + 1 >= rest.len() {
                break;
            }
            out.push(&rest[..=pos]);
            rest = &rest[pos + 1..];
        }
        out.push(rest);
    }
    out
}
