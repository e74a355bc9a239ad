// File: crates/logo-core/src/text.rs
// Summary: Label shaping for column numbers and axis captions using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::ticks::LabelAlign;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Tabular digits keep column numbers from jittering between tiles.
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`, centered on `x` or ending at `x`.
    pub fn draw_aligned(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        align: LabelAlign,
    ) {
        let mut p = self.layout(text, size, color);
        let width = p.longest_line();
        let left = match align {
            LabelAlign::Center => x - width / 2.0,
            LabelAlign::Right => x - width,
        };
        // Paragraph paints from its top-left corner; approximate the ascent.
        p.paint(canvas, (left, y - size * 0.8));
    }

    /// Draw `text` rotated a quarter turn counter-clockwise, centered on `(x, y)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let width = p.longest_line();
        let saved = canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-width / 2.0, -size / 2.0));
        canvas.restore_to_count(saved);
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
