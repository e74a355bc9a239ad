// File: crates/logo-core/tests/lazy.rs
// Purpose: Only tiles near the scroll position are materialized; zoom changes discard every tile.

use logo_core::palette::Palette;
use logo_core::types::TileLayout;
use logo_core::{
    Alphabet, CanvasTileRenderer, ColorScheme, Column, CoordinateMode, EngineOptions, HeightCalc,
    Highlight, LogoData, LogoEngine, RenderContext, ViewportManager,
};

fn long_dna_logo(n: usize) -> LogoData {
    let columns = (0..n)
        .map(|i| {
            let a = (i % 7) as f64 * 0.2;
            Column::new(vec![('A', a), ('C', 0.3), ('G', 0.5), ('T', 0.1)])
        })
        .collect();
    LogoData::new(Alphabet::Dna, HeightCalc::Probability, columns, 2.0, 2.0, vec![0.2; n])
}

fn rendered(engine: &LogoEngine) -> Vec<usize> {
    engine.tiles().iter().filter(|t| t.rendered).map(|t| t.index).collect()
}

#[test]
fn only_nearby_tiles_are_painted() {
    // 3000 columns at zoom 0.4: 13.6px columns, 367 per tile, 9 tiles.
    let mut engine = LogoEngine::new(long_dna_logo(3000), 1000.0, EngineOptions::default()).unwrap();
    assert_eq!(engine.tiles().len(), 9);
    assert_eq!(rendered(&engine), vec![0, 1]);
    assert_eq!(engine.renderer().materialized(), 2);

    engine.scroll_to_column(3000, false).unwrap();
    assert_eq!(rendered(&engine), vec![0, 1, 7, 8]);
    assert!(engine.renderer().tile_surface(4).is_none());
    assert!(engine.tile_png_bytes(4).is_err());
}

#[test]
fn zoom_change_repartitions_and_repaints() {
    let mut engine = LogoEngine::new(long_dna_logo(3000), 1000.0, EngineOptions::default()).unwrap();
    engine.scroll_to_column(1500, false).unwrap();
    let center = engine.current_center_column();

    let applied = engine.set_zoom(0.2, None).unwrap();
    assert!((applied - 0.2).abs() < 1e-6);
    // 6.8px columns: 735 per tile.
    assert_eq!(engine.tiles().len(), 5);
    assert_eq!(engine.current_center_column(), center);

    let painted = rendered(&engine);
    assert!(!painted.is_empty());
    assert_eq!(engine.renderer().materialized(), painted.len());
    let visible = engine.viewport().visible_span();
    for i in painted {
        let t = engine.tiles()[i];
        assert!(t.span().intersects(&logo_core::tiles::render_window(engine.viewport().scroll_offset(), engine.renderer().tile_width())));
    }
    assert!(engine
        .tiles()
        .iter()
        .filter(|t| t.span().intersects(&visible))
        .all(|t| t.rendered));
}

#[test]
fn recomputing_tiles_resets_render_state() {
    let data = long_dna_logo(600);
    let mut vm = ViewportManager::new(600, 34.0, 800.0);
    let palette = Palette::light();
    let mut renderer = CanvasTileRenderer::new(TileLayout::default());
    renderer.compute_tiles(&vm);

    let ctx = RenderContext {
        data: &data,
        viewport: &vm,
        scheme: ColorScheme::Default,
        consensus: None,
        max_height: 2.0,
        coordinates: CoordinateMode::Model,
        show_inserts: true,
        draw_labels: false,
        highlight: Highlight::default(),
        palette: &palette,
    };
    let first = renderer.render(0.0, &ctx).unwrap();
    assert_eq!(first, vec![0, 1]);
    // Already painted tiles are skipped.
    assert!(renderer.render(0.0, &ctx).unwrap().is_empty());

    renderer.invalidate_columns(&[200]);
    assert_eq!(renderer.render(0.0, &ctx).unwrap(), vec![1]);

    vm.set_zoom(0.5, None);
    renderer.compute_tiles(&vm);
    assert!(renderer.tiles().iter().all(|t| !t.rendered));
    assert_eq!(renderer.materialized(), 0);
}
