use std::path::Path;

use crate::{
    foundation::{
        core::{Canvas, Rgba8},
        error::{PlaceholderError, PlaceholderResult},
    },
    render::{
        PlaceholderBackend,
        layout::{PlacedLine, layout_block},
        settings::RenderSettings,
    },
    text::{
        font::{BuiltinFont, FontFace, FontOrigin, LoadedFont},
        shape::{ShapedText, TextBrushRgba8, TextShaper},
        wrap::{TextLine, wrap_greedy},
    },
};

/// CPU placeholder renderer powered by `vello_cpu`.
pub struct PlaceholderRenderer {
    settings: RenderSettings,
    shaper: TextShaper,
    font_data: Option<vello_cpu::peniko::FontData>,
}

impl PlaceholderRenderer {
    pub fn new(font: LoadedFont, settings: RenderSettings) -> PlaceholderResult<Self> {
        Canvas::new(settings.canvas.width, settings.canvas.height)?;
        let font_data = match font.face() {
            FontFace::Outline(outline) => Some(vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(outline.bytes.as_ref().clone()),
                outline.index,
            )),
            FontFace::Builtin(_) => None,
        };
        let shaper = TextShaper::new(font)?;
        Ok(Self {
            settings,
            shaper,
            font_data,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn font_origin(&self) -> &FontOrigin {
        self.shaper.font().origin()
    }

    /// Wrap `label` against the canvas width minus the text margin.
    pub fn wrap_label(&mut self, label: &str) -> PlaceholderResult<Vec<TextLine>> {
        let max_width = self.settings.max_line_width();
        let size = self.settings.font_size_px;
        wrap_greedy(label, max_width, &mut self.shaper.at_size(size))
    }

    /// Wrap and center `label`, returning each line's drawing origin.
    pub fn place_label(&mut self, label: &str) -> PlaceholderResult<Vec<PlacedLine>> {
        let lines = self.wrap_label(label)?;
        let size = self.settings.font_size_px;
        layout_block(
            &lines,
            self.settings.canvas,
            self.settings.line_height,
            &mut self.shaper.at_size(size),
        )
    }

    /// Draw the full placeholder for `label` and return it as RGB8.
    pub fn render(&mut self, label: &str) -> PlaceholderResult<image::RgbImage> {
        let (w, h) = self.settings.canvas.size_u16()?;
        let placed = self.place_label(label)?;

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        clear_pixmap(&mut pixmap, self.settings.background.premultiplied());

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        self.draw_border(&mut ctx);

        let text_brush = brush(self.settings.text_color);
        for line in &placed {
            let shaped = self
                .shaper
                .shape(&line.text, self.settings.font_size_px, text_brush)?;
            draw_shaped(
                &mut ctx,
                self.font_data.as_ref(),
                &shaped,
                f64::from(line.x),
                f64::from(line.y),
            )?;
        }

        self.draw_badge(&mut ctx)?;

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        pixmap_to_rgb(&pixmap, u32::from(w), u32::from(h))
    }

    /// Render `label` and write it as a PNG, replacing any existing file.
    pub fn render_to_file(&mut self, label: &str, path: &Path) -> PlaceholderResult<()> {
        let img = self.render(label)?;
        image::save_buffer_with_format(
            path,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .map_err(|e| PlaceholderError::encode(format!("write png '{}': {e}", path.display())))
    }

    fn draw_border(&self, ctx: &mut vello_cpu::RenderContext) {
        let s = &self.settings;
        let (w, h) = (f64::from(s.canvas.width), f64::from(s.canvas.height));
        let inset = f64::from(s.border_inset);
        let bw = f64::from(s.border_width);

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(s.border.to_cpu_color());
        for rect in [
            vello_cpu::kurbo::Rect::new(inset, inset, w - inset, inset + bw),
            vello_cpu::kurbo::Rect::new(inset, h - inset - bw, w - inset, h - inset),
            vello_cpu::kurbo::Rect::new(inset, inset, inset + bw, h - inset),
            vello_cpu::kurbo::Rect::new(w - inset - bw, inset, w - inset, h - inset),
        ] {
            ctx.fill_rect(&rect);
        }
    }

    fn draw_badge(&mut self, ctx: &mut vello_cpu::RenderContext) -> PlaceholderResult<()> {
        let badge = &self.settings.badge;
        let w = f64::from(self.settings.canvas.width);

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(badge.fill.to_cpu_color());
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            w - f64::from(badge.left_from_right),
            f64::from(badge.top),
            w - f64::from(badge.right_from_right) + 1.0,
            f64::from(badge.bottom) + 1.0,
        ));

        let shaped = self
            .shaper
            .shape(&badge.text, badge.font_size_px, brush(badge.text_color))?;
        draw_shaped(
            ctx,
            self.font_data.as_ref(),
            &shaped,
            w - f64::from(badge.text_left_from_right),
            f64::from(badge.text_top),
        )
    }
}

impl PlaceholderBackend for PlaceholderRenderer {
    fn render_placeholder(&mut self, label: &str, path: &Path) -> PlaceholderResult<()> {
        self.render_to_file(label, path)
    }
}

fn brush(c: Rgba8) -> TextBrushRgba8 {
    TextBrushRgba8 {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}

fn draw_shaped(
    ctx: &mut vello_cpu::RenderContext,
    font: Option<&vello_cpu::peniko::FontData>,
    shaped: &ShapedText,
    x: f64,
    y: f64,
) -> PlaceholderResult<()> {
    match shaped {
        ShapedText::Outline(layout) => {
            let font = font.ok_or_else(|| {
                PlaceholderError::render("outline text shaped without font data")
            })?;
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));

            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };

                    let b = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(b.r, b.g, b.b, b.a));

                    // x includes the run offset, y the line baseline
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }

            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        }
        ShapedText::Builtin {
            text,
            size_px,
            brush,
        } => {
            let size = f64::from(*size_px);
            let advance = f64::from(BuiltinFont.advance(*size_px));
            let (l, t, r, b) = BuiltinFont::CELL_EM;

            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            for (i, c) in text.chars().enumerate() {
                if c.is_whitespace() {
                    continue;
                }
                let cx = x + advance * i as f64;
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    cx + f64::from(l) * size,
                    y + f64::from(t) * size,
                    cx + f64::from(r) * size,
                    y + f64::from(b) * size,
                ));
            }
        }
    }
    Ok(())
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn pixmap_to_rgb(
    pixmap: &vello_cpu::Pixmap,
    width: u32,
    height: u32,
) -> PlaceholderResult<image::RgbImage> {
    let premul = pixmap.data_as_u8_slice();
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for px in premul.chunks_exact(4) {
        let a = u16::from(px[3]);
        for &c in &px[..3] {
            let straight = if a == 0 {
                0
            } else {
                ((u16::from(c) * 255 + a / 2) / a).min(255) as u8
            };
            rgb.push(straight);
        }
    }

    image::RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| PlaceholderError::render("pixmap byte length mismatch"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
