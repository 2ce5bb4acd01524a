use crate::{
    foundation::{core::Canvas, error::PlaceholderResult},
    text::{shape::TextMeasure, wrap::TextLine},
};

/// A wrapped line with its top-left drawing origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub width: f32,
}

/// Top of a vertically centered block of `line_count` lines.
///
/// Integer division truncates, so an odd leftover pixel ends up below the
/// block.
pub fn block_start_y(canvas_height: u32, line_count: usize, line_height: u32) -> i32 {
    let total = line_count as i64 * i64::from(line_height);
    (i64::from(canvas_height) - total).div_euclid(2) as i32
}

/// Left edge of a horizontally centered line.
pub fn centered_x(canvas_width: u32, line_width: f32) -> i32 {
    (i64::from(canvas_width) - line_width.ceil() as i64).div_euclid(2) as i32
}

/// Place every line centered on the canvas, one `line_height` apart.
pub fn layout_block(
    lines: &[TextLine],
    canvas: Canvas,
    line_height: u32,
    measure: &mut dyn TextMeasure,
) -> PlaceholderResult<Vec<PlacedLine>> {
    let start_y = block_start_y(canvas.height, lines.len(), line_height);

    let mut placed = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let text = line.text();
        let width = measure.measure_width(&text)?;
        placed.push(PlacedLine {
            x: centered_x(canvas.width, width),
            y: start_y + (i as i32) * line_height as i32,
            text,
            width,
        });
    }
    Ok(placed)
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
