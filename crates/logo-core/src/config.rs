// File: crates/logo-core/src/config.rs
// Summary: Engine options (initial zoom, modes, sizes) with serde defaults and TOML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LogoError, Result};
use crate::types::{BASE_COLUMN_WIDTH, ZOOM_MAX, ZOOM_MIN};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Fixed per-letter palette of the alphabet.
    #[default]
    Default,
    /// Per-column biochemical consensus colors (amino acids only).
    Consensus,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Default => Self::Consensus,
            Self::Consensus => Self::Default,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightScale {
    #[default]
    Theoretical,
    Observed,
}

impl HeightScale {
    pub fn toggled(self) -> Self {
        match self {
            Self::Theoretical => Self::Observed,
            Self::Observed => Self::Theoretical,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// Label columns 1..N by model position.
    #[default]
    Model,
    /// Label columns with `alignmentColumnMap`.
    Alignment,
}

impl CoordinateMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Model => Self::Alignment,
            Self::Alignment => Self::Model,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Zoom the fit starts from; small logos are stepped up from here.
    pub initial_zoom: f32,
    pub base_column_width: f32,
    pub plot_height: f32,
    pub color_scheme: ColorScheme,
    pub height_scale: HeightScale,
    pub coordinates: CoordinateMode,
    /// Draw insertion rows when the data carries them.
    pub show_inserts: bool,
    /// Column numbers and axis captions; off for pixel-exact snapshots.
    pub draw_labels: bool,
    /// Palette preset name, see `Palette::find`.
    pub theme: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            initial_zoom: 0.4,
            base_column_width: BASE_COLUMN_WIDTH,
            plot_height: 300.0,
            color_scheme: ColorScheme::Default,
            height_scale: HeightScale::Theoretical,
            coordinates: CoordinateMode::Model,
            show_inserts: true,
            draw_labels: true,
            theme: "light".to_string(),
        }
    }
}

impl EngineOptions {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let opts: Self = toml::from_str(s)
            .map_err(|e| LogoError::config(format!("invalid engine options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading engine options from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_column_width.is_finite() && self.base_column_width > 0.0) {
            return Err(LogoError::config(format!(
                "base_column_width must be positive, got {}", self.base_column_width
            )));
        }
        if !(self.plot_height.is_finite() && self.plot_height > 0.0) {
            return Err(LogoError::config(format!(
                "plot_height must be positive, got {}", self.plot_height
            )));
        }
        if !self.initial_zoom.is_finite() {
            return Err(LogoError::config("initial_zoom must be finite"));
        }
        Ok(())
    }

    /// Starting zoom clamped into the supported range.
    pub fn start_zoom(&self) -> f32 {
        self.initial_zoom.clamp(ZOOM_MIN, ZOOM_MAX)
    }
}
