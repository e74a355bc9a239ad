// File: crates/logo-core/tests/column.rs
// Purpose: Stack geometry (ordering, noise floor, height bound) and indicator band colors.

use logo_core::column::{indicator_bars, layout_column, stack_segments, IndicatorKind};
use logo_core::palette::{
    insert_length_band, insert_prob_band, occupancy_band, BAND_EMPTY, INSERT_LIGHT, INSERT_MEDIUM,
    INSERT_STRONG, OCCUPANCY_LIGHT, OCCUPANCY_MEDIUM, OCCUPANCY_STRONG,
};
use logo_core::types::TileLayout;
use logo_core::{Alphabet, Column, HeightCalc, LogoData};

#[test]
fn stacks_smallest_first_and_drops_noise() {
    let col = Column::new(vec![('A', 1.0), ('C', 0.5), ('G', 0.005), ('T', 0.01)]);
    let segs = stack_segments(&col, 2.0, 300.0, 310.0);

    let symbols: Vec<char> = segs.iter().map(|s| s.symbol).collect();
    assert_eq!(symbols, vec!['C', 'A'], "tallest residue ends on top");
    assert_eq!(segs[0].height, 75.0);
    assert_eq!(segs[0].y_top, 235.0);
    assert_eq!(segs[1].height, 150.0);
    assert_eq!(segs[1].y_top, 85.0);
}

#[test]
fn stack_never_exceeds_plot_height() {
    let col = Column::new(vec![('A', 2.0), ('C', 1.5), ('G', 0.7)]);
    let segs = stack_segments(&col, 2.0, 300.0, 310.0);
    let total: f32 = segs.iter().map(|s| s.height).sum();
    assert!(total <= 300.0 + 1e-3, "total {}", total);
    assert!(segs.iter().all(|s| s.y_top >= 10.0 - 1e-3));
}

#[test]
fn negative_scores_are_not_stacked() {
    let col = Column::new(vec![('A', -0.4), ('C', 0.8)]);
    let segs = stack_segments(&col, 1.0, 100.0, 110.0);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].symbol, 'C');
}

#[test]
fn band_breakpoints() {
    assert_eq!(occupancy_band(0.70), OCCUPANCY_STRONG);
    assert_eq!(occupancy_band(0.75), OCCUPANCY_MEDIUM);
    assert_eq!(occupancy_band(0.90), OCCUPANCY_LIGHT);
    assert_eq!(occupancy_band(0.95), BAND_EMPTY);

    assert_eq!(insert_prob_band(0.2), INSERT_STRONG);
    assert_eq!(insert_prob_band(0.1), INSERT_MEDIUM);
    assert_eq!(insert_prob_band(0.04), INSERT_LIGHT);
    assert_eq!(insert_prob_band(0.03), BAND_EMPTY);

    assert_eq!(insert_length_band(10.0), INSERT_STRONG);
    assert_eq!(insert_length_band(8.0), INSERT_MEDIUM);
    assert_eq!(insert_length_band(5.0), INSERT_LIGHT);
    assert_eq!(insert_length_band(4.0), BAND_EMPTY);
}

fn logo_with_rows() -> LogoData {
    LogoData::new(
        Alphabet::Dna,
        HeightCalc::Probability,
        vec![Column::new(vec![('A', 1.5)]), Column::new(vec![('C', 1.0), ('T', 0.5)])],
        2.0,
        1.6,
        vec![0.5, 0.9],
    )
    .with_inserts(vec![0.2, 0.0], vec![12.0, 1.0])
    .with_match_mismatch(vec![false, true])
}

#[test]
fn indicator_rows_follow_insert_toggle() {
    let data = logo_with_rows();
    let bars = indicator_bars(&data, 1, true);
    let kinds: Vec<IndicatorKind> = bars.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![IndicatorKind::Occupancy, IndicatorKind::InsertProb, IndicatorKind::InsertLength]);
    assert_eq!(bars[0].color, OCCUPANCY_STRONG);
    assert_eq!(bars[1].color, INSERT_STRONG);
    assert_eq!(bars[2].row, 2);

    let bars = indicator_bars(&data, 1, false);
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].kind, IndicatorKind::Occupancy);
}

#[test]
fn masked_column_has_no_stack_but_keeps_indicators() {
    let data = logo_with_rows();
    let layout = TileLayout::new(300.0, 3);

    let open = layout_column(&data, 1, 2.0, &layout, true).unwrap();
    assert!(!open.masked);
    assert_eq!(open.segments.len(), 1);

    let masked = layout_column(&data, 2, 2.0, &layout, true).unwrap();
    assert!(masked.masked);
    assert!(masked.segments.is_empty());
    assert_eq!(masked.indicators.len(), 3);

    assert!(layout_column(&data, 3, 2.0, &layout, true).is_none());
    assert!(layout_column(&data, 0, 2.0, &layout, true).is_none());
}

#[test]
fn tile_layout_rows_stack_below_baseline() {
    let l = TileLayout::new(300.0, 3);
    assert_eq!(l.baseline(), 310.0);
    assert_eq!(l.indicator_top(0), 312.0);
    assert_eq!(l.indicator_top(2), 336.0);
    assert_eq!(l.label_top(), 348.0);
    assert_eq!(l.height(), 366.0);
    assert_eq!(TileLayout::default().height(), 342.0);
}
