// File: crates/logo-core/tests/interaction.rs
// Purpose: Click/hover highlights, host callbacks, and double-click zoom toggling through the engine.

use std::cell::RefCell;
use std::rc::Rc;

use logo_core::{
    Alphabet, Callbacks, Column, ColumnSnapshot, EngineOptions, HeightCalc, LogoData, LogoEngine,
    LogoObserver, PointerEvent,
};

fn dna_logo(n: usize) -> LogoData {
    let columns = (0..n)
        .map(|i| Column::new(vec![('A', 0.2 + (i % 5) as f64 * 0.3), ('C', 0.4), ('G', 0.1), ('T', 0.05)]))
        .collect();
    LogoData::new(Alphabet::Dna, HeightCalc::Probability, columns, 2.0, 1.8, vec![0.1; n])
        .with_alignment_map((0..n as u32).map(|i| i * 2 + 1).collect())
}

#[derive(Default)]
struct Recorder {
    clicks: Vec<(usize, ColumnSnapshot)>,
    hovers: Vec<usize>,
}

struct Shared(Rc<RefCell<Recorder>>);

impl LogoObserver for Shared {
    fn on_column_click(&mut self, column: usize, snapshot: &ColumnSnapshot) {
        self.0.borrow_mut().clicks.push((column, snapshot.clone()));
    }
    fn on_column_hover(&mut self, column: usize) {
        self.0.borrow_mut().hovers.push(column);
    }
}

/// Container x at the middle of `col` for 34px columns and no scroll.
fn mid(col: usize) -> f32 {
    (col as f32 - 1.0) * 34.0 + 17.0
}

#[test]
fn click_and_hover_are_independent() {
    // 10 columns fit in 1000px: zoom pinned at 1.0, 34px columns.
    let mut engine = LogoEngine::new(dna_logo(10), 1000.0, EngineOptions::default()).unwrap();
    let rec = Rc::new(RefCell::new(Recorder::default()));
    engine.set_observer(Box::new(Shared(rec.clone())));

    engine.handle_pointer(PointerEvent::Click { x: mid(5) }).unwrap();
    engine.handle_pointer(PointerEvent::Move { x: mid(7) }).unwrap();
    assert_eq!(engine.highlight().clicked, Some(5));
    assert_eq!(engine.highlight().hovered, Some(7));

    engine.handle_pointer(PointerEvent::Click { x: mid(2) }).unwrap();
    assert_eq!(engine.highlight().clicked, Some(2));
    assert_eq!(engine.highlight().hovered, Some(7));

    let rec = rec.borrow();
    let clicked: Vec<usize> = rec.clicks.iter().map(|(c, _)| *c).collect();
    assert_eq!(clicked, vec![5, 2]);
    assert_eq!(rec.hovers, vec![7]);

    let (_, snap) = &rec.clicks[0];
    assert_eq!(snap.column, 5);
    assert_eq!(snap.alignment_column, Some(9));
    assert_eq!(snap.delete_prob, 0.1);
    assert_eq!(snap.heights.len(), 4);
}

#[test]
fn repeated_click_reports_again_without_redraw() {
    let mut engine = LogoEngine::new(dna_logo(10), 1000.0, EngineOptions::default()).unwrap();
    let count = Rc::new(RefCell::new(0usize));
    let seen = count.clone();
    engine.set_observer(Box::new(Callbacks {
        on_column_click: Some(Box::new(move |_: usize, _: &ColumnSnapshot| *seen.borrow_mut() += 1)),
        on_column_hover: None,
    }));

    engine.handle_pointer(PointerEvent::Click { x: mid(3) }).unwrap();
    assert!(engine.tiles().iter().all(|t| t.rendered));
    engine.handle_pointer(PointerEvent::Click { x: mid(3) + 5.0 }).unwrap();
    assert_eq!(*count.borrow(), 2);
    assert_eq!(engine.highlight().clicked, Some(3));
}

#[test]
fn hover_within_same_column_is_silent_and_leave_clears() {
    let mut engine = LogoEngine::new(dna_logo(10), 1000.0, EngineOptions::default()).unwrap();
    let rec = Rc::new(RefCell::new(Recorder::default()));
    engine.set_observer(Box::new(Shared(rec.clone())));

    engine.handle_pointer(PointerEvent::Move { x: mid(4) - 10.0 }).unwrap();
    engine.handle_pointer(PointerEvent::Move { x: mid(4) + 10.0 }).unwrap();
    assert_eq!(rec.borrow().hovers, vec![4]);

    engine.handle_pointer(PointerEvent::Leave).unwrap();
    assert_eq!(engine.highlight().hovered, None);
    assert_eq!(rec.borrow().hovers, vec![4]);
}

#[test]
fn pointer_beyond_last_column_clamps() {
    let mut engine = LogoEngine::new(dna_logo(10), 1000.0, EngineOptions::default()).unwrap();
    engine.handle_pointer(PointerEvent::Click { x: 900.0 }).unwrap();
    assert_eq!(engine.highlight().clicked, Some(10));
}

#[test]
fn double_click_toggles_zoom_around_pointer() {
    // 100 columns at 0.4 = 1360px: wider than the container, so zoom stays enabled.
    let mut engine = LogoEngine::new(dna_logo(100), 1000.0, EngineOptions::default()).unwrap();
    assert!(engine.viewport().zoom_enabled());
    assert!((engine.viewport().zoom() - 0.4).abs() < 1e-6);

    let x = 500.0;
    let col = engine.viewport().column_from_pixel(engine.viewport().scroll_offset() + x);
    engine.handle_pointer(PointerEvent::DoubleClick { x }).unwrap();
    assert_eq!(engine.viewport().zoom(), 1.0);
    assert_eq!(engine.viewport().column_from_pixel(engine.viewport().scroll_offset() + x), col);

    engine.handle_pointer(PointerEvent::DoubleClick { x }).unwrap();
    assert!((engine.viewport().zoom() - 0.3).abs() < 1e-6);
}

#[test]
fn double_click_ignored_when_zoom_disabled() {
    let mut engine = LogoEngine::new(dna_logo(3), 600.0, EngineOptions::default()).unwrap();
    assert!(!engine.viewport().zoom_enabled());
    engine.handle_pointer(PointerEvent::DoubleClick { x: 40.0 }).unwrap();
    assert_eq!(engine.viewport().zoom(), 1.0);
}
