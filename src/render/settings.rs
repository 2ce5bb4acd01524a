use crate::foundation::core::{Canvas, Rgba8};

/// Text stamped onto every badge.
pub const BADGE_TEXT: &str = "DeepSite";

/// Badge geometry and styling, anchored to the top-right corner.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeStyle {
    /// Left edge of the badge, measured from the canvas' right edge.
    pub left_from_right: u32,
    /// Right edge (inclusive pixel), measured from the canvas' right edge.
    pub right_from_right: u32,
    pub top: u32,
    /// Bottom edge (inclusive pixel).
    pub bottom: u32,
    pub fill: Rgba8,
    pub text: String,
    pub text_color: Rgba8,
    pub font_size_px: f32,
    /// Text origin, measured from the canvas' right edge and top.
    pub text_left_from_right: u32,
    pub text_top: u32,
}

/// Compiled-in look of every placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub canvas: Canvas,
    pub background: Rgba8,
    pub border: Rgba8,
    pub border_width: u32,
    pub border_inset: u32,
    pub text_color: Rgba8,
    pub font_size_px: f32,
    pub line_height: u32,
    /// Horizontal space reserved around wrapped text, both sides combined.
    pub text_margin: u32,
    pub badge: BadgeStyle,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 400,
                height: 300,
            },
            background: Rgba8::from_hex(0x1a202c),
            border: Rgba8::from_hex(0x4a5568),
            border_width: 2,
            border_inset: 1,
            text_color: Rgba8::from_hex(0xe2e8f0),
            font_size_px: 16.0,
            line_height: 20,
            text_margin: 40,
            badge: BadgeStyle {
                left_from_right: 80,
                right_from_right: 10,
                top: 10,
                bottom: 35,
                fill: Rgba8::from_hex(0x3182ce),
                text: BADGE_TEXT.to_string(),
                text_color: Rgba8::WHITE,
                font_size_px: 12.0,
                text_left_from_right: 70,
                text_top: 20,
            },
        }
    }
}

impl RenderSettings {
    /// Widest a wrapped line may be.
    pub fn max_line_width(&self) -> f32 {
        self.canvas.width.saturating_sub(self.text_margin) as f32
    }
}
