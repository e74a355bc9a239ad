// File: crates/logo-core/src/render.rs
// Summary: Lazily materialized Skia raster tiles; paints stacks, indicator bands, and column labels.

use std::collections::HashMap;

use skia_safe as skia;

use crate::column::layout_column;
use crate::config::{ColorScheme, CoordinateMode};
use crate::consensus::ConsensusColorMap;
use crate::data::LogoData;
use crate::error::{LogoError, Result};
use crate::glyph::GlyphRenderer;
use crate::palette::{residue_color, Palette, UNSTYLED};
use crate::text::TextShaper;
use crate::ticks::{column_ticks, height_ticks, LabelAlign, Lod};
use crate::tiles::{columns_per_tile, compute_tiles, render_window, RenderTile};
use crate::types::TileLayout;
use crate::viewport::ViewportManager;

/// Width of the fixed height-axis strip.
pub const AXIS_WIDTH: i32 = 64;
const LABEL_SIZE: f32 = 11.0;
const TICK_LENGTH: f32 = 4.0;

/// Columns that carry a highlight background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Highlight {
    pub clicked: Option<usize>,
    pub hovered: Option<usize>,
}

/// Everything a paint pass reads; borrowed from the engine for one call.
pub struct RenderContext<'a> {
    pub data: &'a LogoData,
    pub viewport: &'a ViewportManager,
    pub scheme: ColorScheme,
    pub consensus: Option<&'a ConsensusColorMap>,
    pub max_height: f64,
    pub coordinates: CoordinateMode,
    pub show_inserts: bool,
    pub draw_labels: bool,
    pub highlight: Highlight,
    pub palette: &'a Palette,
}

impl RenderContext<'_> {
    /// Fill color of `symbol` in `col` under the active scheme; unknown symbols are grey.
    pub fn letter_color(&self, col: usize, symbol: char) -> skia::Color {
        match (self.scheme, self.consensus) {
            (ColorScheme::Consensus, Some(map)) => map.color(col, symbol),
            _ => residue_color(self.data.alphabet, symbol).unwrap_or(UNSTYLED),
        }
    }
}

pub struct CanvasTileRenderer {
    layout: TileLayout,
    tiles: Vec<RenderTile>,
    surfaces: HashMap<usize, skia::Surface>,
    tile_width: f32,
    glyphs: GlyphRenderer,
    text: TextShaper,
}

impl CanvasTileRenderer {
    pub fn new(layout: TileLayout) -> Self {
        Self {
            layout,
            tiles: Vec::new(),
            surfaces: HashMap::new(),
            tile_width: 0.0,
            glyphs: GlyphRenderer::new(),
            text: TextShaper::new(),
        }
    }

    pub fn layout(&self) -> &TileLayout { &self.layout }

    /// Change the vertical layout; every tile must be redrawn.
    pub fn set_layout(&mut self, layout: TileLayout) {
        if layout != self.layout {
            self.layout = layout;
            self.invalidate_all();
        }
    }

    pub fn tiles(&self) -> &[RenderTile] { &self.tiles }

    /// Nominal width of a full tile at the current zoom.
    pub fn tile_width(&self) -> f32 { self.tile_width }

    /// Rebuild the tile partition for the viewport; all surfaces are dropped.
    pub fn compute_tiles(&mut self, viewport: &ViewportManager) {
        let state = viewport.state();
        self.tiles = compute_tiles(state);
        self.tile_width = columns_per_tile(state.zoomed_column_width_px) as f32 * state.zoomed_column_width_px;
        self.surfaces.clear();
        log::debug!("partitioned {} columns into {} tiles", state.column_span(), self.tiles.len());
    }

    pub fn invalidate_all(&mut self) {
        for t in &mut self.tiles {
            t.rendered = false;
        }
        self.surfaces.clear();
    }

    /// Mark the tiles holding any of `columns` for redraw.
    pub fn invalidate_columns(&mut self, columns: &[usize]) {
        for t in &mut self.tiles {
            if columns.iter().any(|&c| t.contains_column(c)) {
                t.rendered = false;
                self.surfaces.remove(&t.index);
                log::debug!("tile {} invalidated", t.index);
            }
        }
    }

    /// Draw every unrendered tile intersecting the window around `target_scroll_px`.
    /// Returns the indices painted by this call.
    pub fn render(&mut self, target_scroll_px: f32, ctx: &RenderContext<'_>) -> Result<Vec<usize>> {
        let window = render_window(target_scroll_px, self.tile_width);
        let height = self.layout.height().ceil() as i32;
        let mut painted = Vec::new();
        for i in 0..self.tiles.len() {
            let tile = self.tiles[i];
            if tile.rendered || !tile.span().intersects(&window) {
                continue;
            }
            let width = tile.width_px.ceil().max(1.0) as i32;
            let mut surface = skia::surfaces::raster_n32_premul((width, height))
                .ok_or_else(|| LogoError::render(format!("failed to create {width}x{height} tile surface")))?;
            paint_tile(surface.canvas(), &tile, ctx, &self.layout, &self.glyphs, &self.text);
            self.surfaces.insert(i, surface);
            self.tiles[i].rendered = true;
            painted.push(i);
        }
        if !painted.is_empty() {
            log::debug!("materialized tiles {:?} around {:.0}px", painted, target_scroll_px);
        }
        Ok(painted)
    }

    pub fn tile_surface(&self, index: usize) -> Option<&skia::Surface> {
        self.surfaces.get(&index)
    }

    pub fn materialized(&self) -> usize { self.surfaces.len() }

    /// PNG bytes of a materialized tile.
    pub fn tile_png_bytes(&mut self, index: usize) -> Result<Vec<u8>> {
        let surface = self
            .surfaces
            .get_mut(&index)
            .ok_or_else(|| LogoError::render(format!("tile {index} is not materialized")))?;
        encode_png(surface)
    }

    /// Fixed strip with height ticks and the axis caption.
    pub fn render_axis(&self, ctx: &RenderContext<'_>) -> Result<skia::Surface> {
        let height = self.layout.height().ceil() as i32;
        let mut surface = skia::surfaces::raster_n32_premul((AXIS_WIDTH, height))
            .ok_or_else(|| LogoError::render("failed to create axis surface"))?;
        let canvas = surface.canvas();
        canvas.clear(ctx.palette.background);

        let l = &self.layout;
        let right = AXIS_WIDTH as f32 - 1.0;
        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_color(ctx.palette.axis_line);
        line.set_stroke_width(1.0);
        canvas.draw_line((right, l.top_padding), (right, l.baseline()), &line);

        for v in height_ticks(ctx.max_height) {
            let y = l.baseline() - l.plot_height * (v / ctx.max_height) as f32;
            canvas.draw_line((right - TICK_LENGTH, y), (right, y), &line);
            if !ctx.draw_labels {
                continue;
            }
            self.text.draw_aligned(
                canvas, &format!("{v:.1}"), right - TICK_LENGTH - 2.0, y + LABEL_SIZE * 0.4,
                LABEL_SIZE, ctx.palette.label, LabelAlign::Right,
            );
        }
        if ctx.draw_labels {
            self.text.draw_vertical(
                canvas, ctx.data.axis_label(), LABEL_SIZE, l.top_padding + l.plot_height / 2.0,
                LABEL_SIZE, ctx.palette.label,
            );
        }
        Ok(surface)
    }
}

pub fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| LogoError::render("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

// ---- helpers ----------------------------------------------------------------

fn fill(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

fn paint_tile(
    canvas: &skia::Canvas,
    tile: &RenderTile,
    ctx: &RenderContext<'_>,
    layout: &TileLayout,
    glyphs: &GlyphRenderer,
    text: &TextShaper,
) {
    canvas.clear(ctx.palette.background);
    let w = ctx.viewport.column_width();
    let zoom = ctx.viewport.zoom();
    let lod = Lod::for_column_width(w);

    for col in tile.column_range_start..=tile.column_range_end {
        let x = ctx.viewport.column_left(col) - tile.pixel_offset;
        let plot = skia::Rect::from_xywh(x, layout.top_padding, w, layout.plot_height);

        if ctx.highlight.hovered == Some(col) {
            canvas.draw_rect(plot, &fill(ctx.palette.hovered));
        }
        if ctx.highlight.clicked == Some(col) {
            canvas.draw_rect(plot, &fill(ctx.palette.clicked));
        }

        let Some(cl) = layout_column(ctx.data, col, ctx.max_height, layout, ctx.show_inserts) else {
            continue;
        };
        if cl.masked {
            canvas.draw_rect(plot, &fill(ctx.palette.masked));
        } else {
            for seg in &cl.segments {
                let color = ctx.letter_color(col, seg.symbol);
                match lod {
                    Lod::Detailed => glyphs.draw_letter(
                        canvas, seg.symbol, w * 0.9, seg.height,
                        x + w / 2.0, seg.y_top + seg.height / 2.0, color,
                    ),
                    Lod::Compact => {
                        let bar_w = if w >= 3.0 { w - 1.0 } else { w };
                        canvas.draw_rect(skia::Rect::from_xywh(x, seg.y_top, bar_w, seg.height), &fill(color));
                    }
                }
            }
        }

        for bar in &cl.indicators {
            let r = skia::Rect::from_xywh(x, layout.indicator_top(bar.row), w, layout.indicator_height);
            canvas.draw_rect(r, &fill(bar.color));
        }
    }

    let mut tick = skia::Paint::default();
    tick.set_color(ctx.palette.tick);
    tick.set_stroke_width(1.0);
    let label_top = layout.label_top();
    for t in column_ticks(tile.column_range_start, tile.column_range_end, lod, zoom) {
        let left = ctx.viewport.column_left(t.column) - tile.pixel_offset;
        let anchor = match t.align {
            LabelAlign::Center => left + w / 2.0,
            LabelAlign::Right => left + w,
        };
        canvas.draw_line((anchor, label_top), (anchor, label_top + TICK_LENGTH), &tick);
        if !ctx.draw_labels {
            continue;
        }
        let label = ctx.data.display_column(t.column, ctx.coordinates).to_string();
        text.draw_aligned(
            canvas, &label, anchor, label_top + TICK_LENGTH + LABEL_SIZE,
            LABEL_SIZE, ctx.palette.label, t.align,
        );
    }
}
