/// Contents of every `<text>` element, in document order.
pub fn svg_texts(svg: &str) -> Vec<String> {
    svg.split("<text")
        .skip(1)
        .filter_map(|chunk| {
            let body = &chunk[chunk.find('>')? + 1..];
            let end = body.find("</text>")?;
            Some(body[..end].trim().to_string())
        })
        .collect()
}

/// Index of the first `<text>` element whose content is exactly `label`.
#[allow(dead_code)]
pub fn text_position(svg: &str, label: &str) -> Option<usize> {
    svg_texts(svg).iter().position(|t| t == label)
}

/// Byte offset of the first element stroked with `hex` (case-insensitive).
#[allow(dead_code)]
pub fn first_stroke(svg: &str, hex: &str) -> Option<usize> {
    svg.to_ascii_lowercase()
        .find(&format!("stroke=\"{}\"", hex.to_ascii_lowercase()))
}
