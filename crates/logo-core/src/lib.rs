// File: crates/logo-core/src/lib.rs
// Summary: Core library entry point; exports the sequence logo engine and its building blocks.

pub mod column;
pub mod config;
pub mod consensus;
pub mod data;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod interaction;
pub mod palette;
pub mod render;
pub mod sync;
pub mod text;
pub mod ticks;
pub mod tiles;
pub mod types;
pub mod viewport;

pub use config::{ColorScheme, CoordinateMode, EngineOptions, HeightScale};
pub use consensus::{arbitrate, ConsensusColorMap, ConsensusTable, Group, GroupScores};
pub use data::{Alphabet, Column, ColumnSnapshot, HeightCalc, LogoData};
pub use engine::LogoEngine;
pub use error::{LogoError, Result};
pub use glyph::GlyphRenderer;
pub use interaction::{Callbacks, InteractionController, LogoObserver, PointerEvent};
pub use palette::Palette;
pub use render::{CanvasTileRenderer, Highlight, RenderContext};
pub use sync::PairedViewport;
pub use text::TextShaper;
pub use tiles::{compute_tiles, RenderTile};
pub use viewport::{ScrollCommand, ViewportManager, ViewportState, ZoomAnchor};
