use crate::{
    foundation::error::{PlaceholderError, PlaceholderResult},
    text::font::{FontFace, LoadedFont},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Anything that can report the rendered pixel width of a string.
pub trait TextMeasure {
    fn measure_width(&mut self, text: &str) -> PlaceholderResult<f32>;
}

/// The one face a [`TextLayoutEngine`] shapes with.
#[derive(Clone, Debug)]
struct RegisteredFace {
    family_name: String,
    weight: parley::style::FontWeight,
    style: parley::style::FontStyle,
    width: parley::style::FontWidth,
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    face: Option<RegisteredFace>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            face: None,
        }
    }

    /// Family name of the registered font, if any.
    pub fn family_name(&self) -> Option<&str> {
        self.face.as_ref().map(|f| f.family_name.as_str())
    }

    /// Register font bytes and make face `index` of the blob the layout default.
    ///
    /// Collections (`.ttc`) register every face; the family, weight, style
    /// and width of face `index` are pinned so shaping selects that face.
    pub fn register_font(&mut self, font_bytes: &[u8], index: u32) -> PlaceholderResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let (family_id, info) = families
            .iter()
            .find_map(|(id, infos)| {
                infos
                    .iter()
                    .find(|info| info.index() == index)
                    .map(|info| (*id, info))
            })
            .ok_or_else(|| {
                PlaceholderError::font(format!("font bytes have no face with index {index}"))
            })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PlaceholderError::font("registered font family has no name"))?
            .to_string();
        self.face = Some(RegisteredFace {
            family_name: family_name.clone(),
            weight: info.weight(),
            style: info.style(),
            width: info.width(),
        });
        Ok(family_name)
    }

    /// Shape and lay out a single unwrapped line with the registered font.
    pub fn layout_plain(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> PlaceholderResult<parley::Layout<TextBrushRgba8>> {
        validate_size(size_px)?;
        let face = self
            .face
            .clone()
            .ok_or_else(|| PlaceholderError::font("no font registered with the layout engine"))?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(face.family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(face.weight));
        builder.push_default(parley::style::StyleProperty::FontStyle(face.style));
        builder.push_default(parley::style::StyleProperty::FontWidth(face.width));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }
}

/// A string shaped with a concrete font at a concrete size.
pub enum ShapedText {
    Outline(parley::Layout<TextBrushRgba8>),
    Builtin {
        text: String,
        size_px: f32,
        brush: TextBrushRgba8,
    },
}

/// Shapes and measures text with a [`LoadedFont`], whatever tier it came from.
pub struct TextShaper {
    font: LoadedFont,
    engine: TextLayoutEngine,
}

impl TextShaper {
    pub fn new(font: LoadedFont) -> PlaceholderResult<Self> {
        let mut engine = TextLayoutEngine::new();
        if let FontFace::Outline(outline) = font.face() {
            engine.register_font(outline.bytes.as_slice(), outline.index)?;
        }
        Ok(Self { font, engine })
    }

    pub fn font(&self) -> &LoadedFont {
        &self.font
    }

    pub fn shape(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> PlaceholderResult<ShapedText> {
        match self.font.face() {
            FontFace::Outline(_) => Ok(ShapedText::Outline(
                self.engine.layout_plain(text, size_px, brush)?,
            )),
            FontFace::Builtin(_) => {
                validate_size(size_px)?;
                Ok(ShapedText::Builtin {
                    text: text.to_string(),
                    size_px,
                    brush,
                })
            }
        }
    }

    pub fn measure(&mut self, text: &str, size_px: f32) -> PlaceholderResult<f32> {
        match self.font.face() {
            FontFace::Outline(_) => Ok(self
                .engine
                .layout_plain(text, size_px, TextBrushRgba8::default())?
                .width()),
            FontFace::Builtin(f) => {
                validate_size(size_px)?;
                Ok(f.measure(text, size_px))
            }
        }
    }

    /// Borrow this shaper as a [`TextMeasure`] at a fixed size.
    pub fn at_size(&mut self, size_px: f32) -> SizedShaper<'_> {
        SizedShaper {
            shaper: self,
            size_px,
        }
    }
}

pub struct SizedShaper<'a> {
    shaper: &'a mut TextShaper,
    size_px: f32,
}

impl TextMeasure for SizedShaper<'_> {
    fn measure_width(&mut self, text: &str) -> PlaceholderResult<f32> {
        self.shaper.measure(text, self.size_px)
    }
}

fn validate_size(size_px: f32) -> PlaceholderResult<()> {
    if !size_px.is_finite() || size_px <= 0.0 {
        return Err(PlaceholderError::font("text size_px must be finite and > 0"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/text/shape.rs"]
mod tests;
