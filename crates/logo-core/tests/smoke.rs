// File: crates/logo-core/tests/smoke.rs
// Purpose: End-to-end render writing tile and axis PNGs, plus pixel checks on highlights and masking.

use logo_core::palette::Palette;
use logo_core::{Alphabet, Column, EngineOptions, HeightCalc, LogoData, LogoEngine, PointerEvent};

fn small_logo() -> LogoData {
    LogoData::new(
        Alphabet::Aa,
        HeightCalc::Probability,
        vec![
            Column::new(vec![('L', 0.2)]),
            Column::new(vec![('W', 3.0), ('K', 0.8)]),
            Column::new(vec![('G', 2.0), ('P', 1.0), ('X', 0.5)]),
        ],
        4.32,
        3.8,
        vec![0.6, 0.8, 0.97],
    )
    .with_inserts(vec![0.2, 0.06, 0.0], vec![10.0, 8.0, 0.0])
    .with_match_mismatch(vec![false, true, false])
}

fn rgba(img: &image::RgbaImage, x: u32, y: u32) -> [u8; 4] {
    img.get_pixel(x, y).0
}

fn rgb_of(c: skia_safe::Color) -> [u8; 4] {
    [c.r(), c.g(), c.b(), 255]
}

#[test]
fn render_smoke_png() {
    let mut engine = LogoEngine::new(small_logo(), 600.0, EngineOptions::default()).expect("engine");
    assert_eq!(engine.tiles().len(), 1);

    let bytes = engine.tile_png_bytes(0).expect("tile bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let axis = engine.axis_png_bytes().expect("axis bytes");
    assert!(axis.starts_with(&[137, 80, 78, 71]));

    let out = std::path::PathBuf::from("target/test_out/smoke_tile.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, &bytes).unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    // 3 columns * 34px; plot 300 + padding 10 + 3 indicator rows + label strip.
    assert_eq!(img.width(), 102);
    assert_eq!(img.height(), 366);
}

#[test]
fn highlights_and_mask_reach_pixels() {
    let light = Palette::light();
    let mut engine = LogoEngine::new(small_logo(), 600.0, EngineOptions::default()).unwrap();
    engine.handle_pointer(PointerEvent::Click { x: 17.0 }).unwrap();
    engine.handle_pointer(PointerEvent::Move { x: 85.0 }).unwrap();

    let img = image::load_from_memory(&engine.tile_png_bytes(0).unwrap()).unwrap().to_rgba8();
    // Top of the plot area, above every stack.
    assert_eq!(rgba(&img, 17, 15), rgb_of(light.clicked));
    assert_eq!(rgba(&img, 85, 15), rgb_of(light.hovered));
    // Masked column is a solid block over the whole plot.
    assert_eq!(rgba(&img, 51, 160), rgb_of(light.masked));
    // Occupancy row: 0.6 strong, 0.97 empty.
    assert_eq!(rgba(&img, 17, 317), rgb_of(logo_core::palette::OCCUPANCY_STRONG));
    assert_eq!(rgba(&img, 85, 317), rgb_of(logo_core::palette::BAND_EMPTY));

    engine.handle_pointer(PointerEvent::Leave).unwrap();
    let img = image::load_from_memory(&engine.tile_png_bytes(0).unwrap()).unwrap().to_rgba8();
    assert_eq!(rgba(&img, 85, 15), rgb_of(light.background));
    assert_eq!(rgba(&img, 17, 15), rgb_of(light.clicked));
}
