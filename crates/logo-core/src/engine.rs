// File: crates/logo-core/src/engine.rs
// Summary: One logo instance owned by its host: data, viewport, tiles, modes, and pointer handling.
// Notes:
// - Every call runs layout and drawing synchronously; the latest call wins.
// - Mode switches keep the centered column in place and force a full redraw.

use std::collections::BTreeSet;

use crate::config::{ColorScheme, CoordinateMode, EngineOptions, HeightScale};
use crate::consensus::ConsensusColorMap;
use crate::data::{Alphabet, LogoData};
use crate::error::Result;
use crate::interaction::{InteractionController, LogoObserver, PointerEvent};
use crate::palette::{residue_color, Palette};
use crate::render::{encode_png, CanvasTileRenderer, Highlight, RenderContext};
use crate::tiles::RenderTile;
use crate::types::TileLayout;
use crate::viewport::{ScrollCommand, ViewportManager, ZoomAnchor};

pub struct LogoEngine {
    data: LogoData,
    options: EngineOptions,
    palette: Palette,
    viewport: ViewportManager,
    renderer: CanvasTileRenderer,
    interaction: InteractionController,
    consensus: Option<ConsensusColorMap>,
    scheme: ColorScheme,
    height_scale: HeightScale,
    coordinates: CoordinateMode,
    observer: Option<Box<dyn LogoObserver>>,
}

impl LogoEngine {
    /// Validate `data`, fit it into a container `container_width_px` wide, and draw
    /// the tiles around the initial scroll position.
    pub fn new(data: LogoData, container_width_px: f32, options: EngineOptions) -> Result<Self> {
        options.validate()?;
        data.validate()?;
        warn_unknown_symbols(&data);

        let layout = tile_layout(&data, &options);
        let mut engine = Self {
            viewport: ViewportManager::new(data.column_count(), options.base_column_width, container_width_px),
            renderer: CanvasTileRenderer::new(layout),
            palette: Palette::find(&options.theme),
            interaction: InteractionController::new(),
            consensus: None,
            scheme: ColorScheme::Default,
            height_scale: options.height_scale,
            coordinates: CoordinateMode::Model,
            observer: None,
            data,
            options,
        };
        engine.apply_scheme(engine.options.color_scheme)?;
        engine.apply_coordinates(engine.options.coordinates);
        engine.layout_pass(container_width_px);
        log::info!(
            "logo engine ready: {} columns ({:?}), zoom {:.2}",
            engine.data.column_count(), engine.data.alphabet, engine.viewport.zoom()
        );
        engine.render()?;
        Ok(engine)
    }

    pub fn set_observer(&mut self, observer: Box<dyn LogoObserver>) {
        self.observer = Some(observer);
    }

    pub fn data(&self) -> &LogoData { &self.data }
    pub fn options(&self) -> &EngineOptions { &self.options }
    pub fn viewport(&self) -> &ViewportManager { &self.viewport }
    pub fn renderer(&self) -> &CanvasTileRenderer { &self.renderer }
    pub fn tiles(&self) -> &[RenderTile] { self.renderer.tiles() }
    pub fn color_scheme(&self) -> ColorScheme { self.scheme }
    pub fn height_scale(&self) -> HeightScale { self.height_scale }
    pub fn coordinates(&self) -> CoordinateMode { self.coordinates }
    pub fn highlight(&self) -> Highlight { self.interaction.highlight() }
    pub fn consensus_colors(&self) -> Option<&ConsensusColorMap> { self.consensus.as_ref() }
    pub fn max_height(&self) -> f64 { self.data.max_height(self.height_scale) }
    pub fn current_center_column(&self) -> usize { self.viewport.current_center_column() }

    fn layout_pass(&mut self, container_width_px: f32) {
        self.viewport = ViewportManager::new(
            self.data.column_count(),
            self.options.base_column_width,
            container_width_px,
        );
        self.viewport.fit_to_viewport(container_width_px, self.options.start_zoom());
        self.renderer.set_layout(tile_layout(&self.data, &self.options));
        self.renderer.compute_tiles(&self.viewport);
    }

    /// Paint unrendered tiles near the current scroll offset.
    pub fn render(&mut self) -> Result<Vec<usize>> {
        let target = self.viewport.scroll_offset();
        let ctx = RenderContext {
            data: &self.data,
            viewport: &self.viewport,
            scheme: self.scheme,
            consensus: self.consensus.as_ref(),
            max_height: self.data.max_height(self.height_scale),
            coordinates: self.coordinates,
            show_inserts: self.options.show_inserts,
            draw_labels: self.options.draw_labels,
            highlight: self.interaction.highlight(),
            palette: &self.palette,
        };
        self.renderer.render(target, &ctx)
    }

    /// Redraw only the tiles holding `columns`.
    fn refresh_columns(&mut self, columns: &[usize]) -> Result<()> {
        self.renderer.invalidate_columns(columns);
        self.render()?;
        Ok(())
    }

    /// Clamp and apply a zoom; every tile is discarded and the visible ones redrawn.
    pub fn set_zoom(&mut self, zoom: f32, anchor: Option<ZoomAnchor>) -> Result<f32> {
        let applied = self.viewport.set_zoom(zoom, anchor);
        self.renderer.compute_tiles(&self.viewport);
        log::debug!("zoom set to {applied:.2}");
        self.render()?;
        Ok(applied)
    }

    /// Scroll so `column` is centered; out-of-range columns are clamped.
    pub fn scroll_to_column(&mut self, column: usize, animate: bool) -> Result<ScrollCommand> {
        let cmd = self.viewport.scroll_to_column(column, animate);
        self.render()?;
        Ok(cmd)
    }

    /// Adopt a scroll offset reported by the host container.
    pub fn set_scroll_offset(&mut self, offset_px: f32) -> Result<()> {
        self.viewport.set_scroll_offset(offset_px);
        self.render()?;
        Ok(())
    }

    /// New container width. A logo whose zoom the fit pinned, or one that no longer
    /// fills the container, is refitted; the centered column stays centered.
    pub fn resize(&mut self, container_width_px: f32) -> Result<()> {
        let center = self.viewport.current_center_column();
        if !self.viewport.zoom_enabled() || self.viewport.total_width() < container_width_px {
            self.layout_pass(container_width_px);
        } else {
            self.viewport.resize(container_width_px);
            self.renderer.compute_tiles(&self.viewport);
        }
        self.viewport.scroll_to_column(center, false);
        self.render()?;
        Ok(())
    }

    /// Replace the logo; tiles, highlights, and cached consensus colors are dropped.
    /// On error the engine keeps the previous logo untouched.
    pub fn load(&mut self, data: LogoData) -> Result<()> {
        data.validate()?;
        let wants_consensus = self.scheme == ColorScheme::Consensus;
        let consensus = if wants_consensus && data.alphabet == Alphabet::Aa {
            Some(ConsensusColorMap::compute(&data)?)
        } else {
            None
        };
        warn_unknown_symbols(&data);

        if wants_consensus && consensus.is_none() {
            log::warn!("consensus coloring applies to amino-acid logos only; keeping default colors");
            self.scheme = ColorScheme::Default;
        }
        self.data = data;
        self.consensus = consensus;
        self.interaction.reset();
        self.apply_coordinates(self.coordinates);
        self.layout_pass(self.viewport.viewport_width());
        log::info!("loaded logo with {} columns", self.data.column_count());
        self.render()?;
        Ok(())
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<()> {
        match event {
            PointerEvent::Click { x } => {
                let col = self.column_at(x);
                let outcome = self.interaction.click(col);
                if let (Some(obs), Some(snapshot)) = (self.observer.as_mut(), self.data.snapshot(col)) {
                    obs.on_column_click(col, &snapshot);
                }
                if outcome.changed {
                    let affected: Vec<usize> = outcome.previous.into_iter().chain([col]).collect();
                    self.refresh_columns(&affected)?;
                }
            }
            PointerEvent::Move { x } => {
                let col = self.column_at(x);
                if let Some(previous) = self.interaction.hover(col) {
                    if let Some(obs) = self.observer.as_mut() {
                        obs.on_column_hover(col);
                    }
                    let affected: Vec<usize> = previous.into_iter().chain([col]).collect();
                    self.refresh_columns(&affected)?;
                }
            }
            PointerEvent::DoubleClick { x } => {
                if !self.viewport.zoom_enabled() {
                    log::debug!("double-click ignored: zoom disabled for this logo");
                    return Ok(());
                }
                let anchor = ZoomAnchor { column: self.column_at(x), offset_px: x };
                let next = InteractionController::toggled_zoom(self.viewport.zoom());
                self.set_zoom(next, Some(anchor))?;
            }
            PointerEvent::Leave => {
                if let Some(previous) = self.interaction.leave() {
                    self.refresh_columns(&[previous])?;
                }
            }
        }
        Ok(())
    }

    fn column_at(&self, container_x: f32) -> usize {
        self.viewport.column_from_pixel(self.viewport.scroll_offset() + container_x)
    }

    pub fn toggle_color_scheme(&mut self, scheme: Option<ColorScheme>) -> Result<ColorScheme> {
        let next = scheme.unwrap_or_else(|| self.scheme.toggled());
        self.preserving_scroll(|e| e.apply_scheme(next))?;
        Ok(self.scheme)
    }

    pub fn toggle_height_scale(&mut self, mode: Option<HeightScale>) -> Result<HeightScale> {
        let next = mode.unwrap_or_else(|| self.height_scale.toggled());
        self.preserving_scroll(|e| {
            e.height_scale = next;
            Ok(())
        })?;
        Ok(self.height_scale)
    }

    pub fn toggle_alignment_coordinates(&mut self, mode: Option<CoordinateMode>) -> Result<CoordinateMode> {
        let next = mode.unwrap_or_else(|| self.coordinates.toggled());
        self.preserving_scroll(|e| {
            e.apply_coordinates(next);
            Ok(())
        })?;
        Ok(self.coordinates)
    }

    fn preserving_scroll(&mut self, change: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        let center = self.viewport.current_center_column();
        change(self)?;
        self.renderer.invalidate_all();
        self.viewport.scroll_to_column(center, false);
        self.render()?;
        Ok(())
    }

    fn apply_scheme(&mut self, next: ColorScheme) -> Result<()> {
        if next == ColorScheme::Consensus {
            if self.data.alphabet == Alphabet::Dna {
                log::warn!("consensus coloring applies to amino-acid logos only; keeping default colors");
                self.scheme = ColorScheme::Default;
                return Ok(());
            }
            if self.consensus.is_none() {
                self.consensus = Some(ConsensusColorMap::compute(&self.data)?);
            }
        }
        self.scheme = next;
        Ok(())
    }

    fn apply_coordinates(&mut self, next: CoordinateMode) {
        if next == CoordinateMode::Alignment && self.data.alignment_column_map.is_none() {
            log::warn!("no alignment column map; keeping model coordinates");
            self.coordinates = CoordinateMode::Model;
            return;
        }
        self.coordinates = next;
    }

    /// PNG of a materialized tile.
    pub fn tile_png_bytes(&mut self, index: usize) -> Result<Vec<u8>> {
        self.renderer.tile_png_bytes(index)
    }

    /// PNG of the height axis strip.
    pub fn axis_png_bytes(&self) -> Result<Vec<u8>> {
        let ctx = RenderContext {
            data: &self.data,
            viewport: &self.viewport,
            scheme: self.scheme,
            consensus: self.consensus.as_ref(),
            max_height: self.data.max_height(self.height_scale),
            coordinates: self.coordinates,
            show_inserts: self.options.show_inserts,
            draw_labels: self.options.draw_labels,
            highlight: self.interaction.highlight(),
            palette: &self.palette,
        };
        let mut surface = self.renderer.render_axis(&ctx)?;
        encode_png(&mut surface)
    }
}

fn tile_layout(data: &LogoData, options: &EngineOptions) -> TileLayout {
    let rows = if options.show_inserts && data.has_insert_rows() { 3 } else { 1 };
    TileLayout::new(options.plot_height, rows)
}

/// Symbols outside the palette still render (grey); report each one once.
fn warn_unknown_symbols(data: &LogoData) {
    let unknown: BTreeSet<char> = data
        .columns
        .iter()
        .flat_map(|c| c.entries.iter().map(|&(s, _)| s))
        .filter(|&s| residue_color(data.alphabet, s).is_none())
        .collect();
    if !unknown.is_empty() {
        log::warn!("symbols {:?} are not in the {:?} palette; drawing them grey", unknown, data.alphabet);
    }
}
