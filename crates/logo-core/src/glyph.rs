// File: crates/logo-core/src/glyph.rs
// Summary: Draws one residue letter stretched non-uniformly into a target box.
// Notes:
// - Each letter lives in a 100x100 reference box, except W whose box is 30% wider
//   so its broad shape is not squeezed harder than narrow letters.
// - Canvas transforms are saved/restored around every draw; paints are local.

use skia_safe as skia;

/// Side of the reference box every glyph is laid out in.
pub const GLYPH_BOX: f32 = 100.0;
/// Extra intrinsic width for wide glyphs.
pub const WIDE_GLYPH_FACTOR: f32 = 1.3;

/// Intrinsic `(width, height)` of `letter` in reference units.
pub fn intrinsic_size(letter: char) -> (f32, f32) {
    match letter {
        'W' => (GLYPH_BOX * WIDE_GLYPH_FACTOR, GLYPH_BOX),
        _ => (GLYPH_BOX, GLYPH_BOX),
    }
}

/// Placement of a glyph: translate to the box center, then scale reference units to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphTransform {
    pub center: (f32, f32),
    pub scale_x: f32,
    pub scale_y: f32,
}

pub fn glyph_transform(letter: char, target_width: f32, target_height: f32, x: f32, y: f32) -> GlyphTransform {
    let (iw, ih) = intrinsic_size(letter);
    GlyphTransform {
        center: (x, y),
        scale_x: target_width / iw,
        scale_y: target_height / ih,
    }
}

pub struct GlyphRenderer {
    font: skia::Font,
}

impl GlyphRenderer {
    pub fn new() -> Self {
        let typeface = skia::FontMgr::default().legacy_make_typeface(None, skia::FontStyle::bold());
        let font = match typeface {
            Some(tf) => skia::Font::from_typeface(tf, GLYPH_BOX),
            None => {
                log::warn!("no system typeface found; glyphs fall back to solid blocks");
                let mut f = skia::Font::default();
                f.set_size(GLYPH_BOX);
                f
            }
        };
        Self { font }
    }

    /// Draw `letter` filling `target_width` x `target_height`, centered at `(x, y)`.
    pub fn draw_letter(
        &self,
        canvas: &skia::Canvas,
        letter: char,
        target_width: f32,
        target_height: f32,
        x: f32,
        y: f32,
        color: skia::Color,
    ) {
        if target_width <= 0.0 || target_height <= 0.0 {
            return;
        }
        let t = glyph_transform(letter, target_width, target_height, x, y);
        let (iw, ih) = intrinsic_size(letter);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);

        let mut buf = [0u8; 4];
        let text: &str = letter.encode_utf8(&mut buf);
        let (_, ink) = self.font.measure_str(text, Some(&paint));

        let saved = canvas.save();
        canvas.translate(t.center);
        canvas.scale((t.scale_x, t.scale_y));
        if ink.width() > 0.0 && ink.height() > 0.0 {
            // Font size is derived so the ink fills the reference box height.
            let k = ih / ink.height();
            canvas.scale((k, k));
            canvas.translate((-ink.center_x(), -ink.center_y()));
            canvas.draw_str(text, (0.0, 0.0), &self.font, &paint);
        } else {
            canvas.draw_rect(skia::Rect::from_xywh(-iw / 2.0, -ih / 2.0, iw, ih), &paint);
        }
        canvas.restore_to_count(saved);
    }
}

impl Default for GlyphRenderer {
    fn default() -> Self { Self::new() }
}
