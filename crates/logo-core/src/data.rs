// File: crates/logo-core/src/data.rs
// Summary: Logo data model (columns, max heights, indicator rows) and its fail-fast validation.
// Notes:
// - Columns are 1-indexed at every public accessor; storage is a plain Vec.
// - Optional per-column arrays must match the column count when present. Missing
//   required arrays are rejected instead of being padded with zeros.

use serde::{Deserialize, Serialize};

use crate::config::{CoordinateMode, HeightScale};
use crate::error::{LogoError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    Dna,
    Aa,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightCalc {
    Probability,
    Score,
}

/// One model position: ordered `(symbol, value)` pairs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    pub entries: Vec<(char, f64)>,
}

impl Column {
    pub fn new(entries: Vec<(char, f64)>) -> Self {
        Self { entries }
    }

    /// Value recorded for `symbol`, if the column lists it.
    pub fn value(&self, symbol: char) -> Option<f64> {
        self.entries.iter().find(|(s, _)| *s == symbol).map(|&(_, v)| v)
    }
}

impl From<Vec<(char, f64)>> for Column {
    fn from(entries: Vec<(char, f64)>) -> Self { Self::new(entries) }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoData {
    pub alphabet: Alphabet,
    pub height_calc: HeightCalc,
    /// Stacked heights per column.
    pub columns: Vec<Column>,
    /// Per-column emission probabilities; drives the consensus color scheme.
    #[serde(default)]
    pub probabilities: Option<Vec<Column>>,
    pub max_height_theoretical: f64,
    pub max_height_observed: f64,
    pub delete_prob: Vec<f64>,
    #[serde(default)]
    pub insert_prob: Option<Vec<f64>>,
    #[serde(default)]
    pub insert_length: Option<Vec<f64>>,
    #[serde(default)]
    pub match_mismatch_flag: Option<Vec<bool>>,
    #[serde(default)]
    pub alignment_column_map: Option<Vec<u32>>,
}

/// Everything the host receives about a clicked column.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSnapshot {
    pub column: usize,
    pub alignment_column: Option<u32>,
    pub probabilities: Option<Vec<(char, f64)>>,
    pub heights: Vec<(char, f64)>,
    pub insert_prob: Option<f64>,
    pub insert_length: Option<f64>,
    pub delete_prob: f64,
}

impl LogoData {
    pub fn new(
        alphabet: Alphabet,
        height_calc: HeightCalc,
        columns: Vec<Column>,
        max_height_theoretical: f64,
        max_height_observed: f64,
        delete_prob: Vec<f64>,
    ) -> Self {
        Self {
            alphabet,
            height_calc,
            columns,
            probabilities: None,
            max_height_theoretical,
            max_height_observed,
            delete_prob,
            insert_prob: None,
            insert_length: None,
            match_mismatch_flag: None,
            alignment_column_map: None,
        }
    }

    pub fn with_probabilities(mut self, probabilities: Vec<Column>) -> Self {
        self.probabilities = Some(probabilities);
        self
    }

    pub fn with_inserts(mut self, insert_prob: Vec<f64>, insert_length: Vec<f64>) -> Self {
        self.insert_prob = Some(insert_prob);
        self.insert_length = Some(insert_length);
        self
    }

    pub fn with_match_mismatch(mut self, flags: Vec<bool>) -> Self {
        self.match_mismatch_flag = Some(flags);
        self
    }

    pub fn with_alignment_map(mut self, map: Vec<u32>) -> Self {
        self.alignment_column_map = Some(map);
        self
    }

    /// Parse and validate a JSON logo document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: Self = serde_json::from_str(json)
            .map_err(|e| LogoError::config(format!("invalid logo document: {e}")))?;
        data.validate()?;
        Ok(data)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let data: Self = serde_json::from_slice(bytes)
            .map_err(|e| LogoError::config(format!("invalid logo document: {e}")))?;
        data.validate()?;
        Ok(data)
    }

    /// Reject malformed models before anything is drawn.
    pub fn validate(&self) -> Result<()> {
        let n = self.columns.len();
        if n == 0 {
            return Err(LogoError::config("logo has no columns"));
        }
        for (name, h) in [
            ("maxHeightTheoretical", self.max_height_theoretical),
            ("maxHeightObserved", self.max_height_observed),
        ] {
            if !h.is_finite() || h <= 0.0 {
                return Err(LogoError::config(format!("{name} must be a positive number, got {h}")));
            }
        }
        for (i, col) in self.columns.iter().enumerate() {
            for &(symbol, value) in &col.entries {
                if !value.is_finite() {
                    return Err(LogoError::config(format!(
                        "column {} symbol '{symbol}' has a non-finite value", i + 1
                    )));
                }
                if value < 0.0 && self.height_calc == HeightCalc::Probability {
                    return Err(LogoError::config(format!(
                        "column {} symbol '{symbol}' has a negative height under probability calculation",
                        i + 1
                    )));
                }
            }
        }

        check_len("deleteProb", self.delete_prob.len(), n)?;
        check_unit_range("deleteProb", &self.delete_prob)?;

        match (&self.insert_prob, &self.insert_length) {
            (Some(p), Some(l)) => {
                check_len("insertProb", p.len(), n)?;
                check_len("insertLength", l.len(), n)?;
                check_unit_range("insertProb", p)?;
                if let Some(i) = l.iter().position(|v| !v.is_finite() || *v < 0.0) {
                    return Err(LogoError::config(format!(
                        "insertLength[{}] must be >= 0, got {}", i + 1, l[i]
                    )));
                }
            }
            (None, None) => {}
            (Some(_), None) => return Err(LogoError::config("insertProb given without insertLength")),
            (None, Some(_)) => return Err(LogoError::config("insertLength given without insertProb")),
        }

        if let Some(flags) = &self.match_mismatch_flag {
            check_len("matchMismatchFlag", flags.len(), n)?;
        }
        if let Some(map) = &self.alignment_column_map {
            check_len("alignmentColumnMap", map.len(), n)?;
        }
        if let Some(probs) = &self.probabilities {
            check_len("probabilities", probs.len(), n)?;
            for (i, col) in probs.iter().enumerate() {
                if let Some(&(symbol, p)) = col.entries.iter().find(|(_, p)| !(0.0..=1.0).contains(p)) {
                    return Err(LogoError::config(format!(
                        "probabilities column {} symbol '{symbol}' outside [0,1]: {p}", i + 1
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn column_count(&self) -> usize { self.columns.len() }

    /// Stacked heights for 1-indexed `col`.
    pub fn column(&self, col: usize) -> Option<&Column> {
        col.checked_sub(1).and_then(|i| self.columns.get(i))
    }

    pub fn probabilities(&self, col: usize) -> Option<&Column> {
        let i = col.checked_sub(1)?;
        self.probabilities.as_ref().and_then(|p| p.get(i))
    }

    /// Active max height for the given scale mode.
    pub fn max_height(&self, scale: HeightScale) -> f64 {
        match scale {
            HeightScale::Theoretical => self.max_height_theoretical,
            HeightScale::Observed => self.max_height_observed,
        }
    }

    pub fn has_insert_rows(&self) -> bool {
        self.insert_prob.is_some() && self.insert_length.is_some()
    }

    pub fn is_masked(&self, col: usize) -> bool {
        let Some(i) = col.checked_sub(1) else { return false };
        self.match_mismatch_flag
            .as_ref()
            .and_then(|f| f.get(i).copied())
            .unwrap_or(false)
    }

    pub fn delete_prob(&self, col: usize) -> Option<f64> {
        col.checked_sub(1).and_then(|i| self.delete_prob.get(i).copied())
    }

    pub fn insert_prob(&self, col: usize) -> Option<f64> {
        let i = col.checked_sub(1)?;
        self.insert_prob.as_ref().and_then(|v| v.get(i).copied())
    }

    pub fn insert_length(&self, col: usize) -> Option<f64> {
        let i = col.checked_sub(1)?;
        self.insert_length.as_ref().and_then(|v| v.get(i).copied())
    }

    pub fn alignment_column(&self, col: usize) -> Option<u32> {
        let i = col.checked_sub(1)?;
        self.alignment_column_map.as_ref().and_then(|m| m.get(i).copied())
    }

    /// Label printed under `col` in the given coordinate mode.
    pub fn display_column(&self, col: usize, mode: CoordinateMode) -> u32 {
        match mode {
            CoordinateMode::Alignment => self.alignment_column(col).unwrap_or(col as u32),
            CoordinateMode::Model => col as u32,
        }
    }

    /// Y axis caption for the active height calculation.
    pub fn axis_label(&self) -> &'static str {
        match self.height_calc {
            HeightCalc::Probability => "Information Content (bits)",
            HeightCalc::Score => "Score (bits)",
        }
    }

    pub fn snapshot(&self, col: usize) -> Option<ColumnSnapshot> {
        let heights = self.column(col)?.entries.clone();
        Some(ColumnSnapshot {
            column: col,
            alignment_column: self.alignment_column(col),
            probabilities: self.probabilities(col).map(|c| c.entries.clone()),
            heights,
            insert_prob: self.insert_prob(col),
            insert_length: self.insert_length(col),
            delete_prob: self.delete_prob(col)?,
        })
    }
}

fn check_len(name: &str, got: usize, want: usize) -> Result<()> {
    if got != want {
        return Err(LogoError::config(format!(
            "{name} has {got} entries but the logo has {want} columns"
        )));
    }
    Ok(())
}

fn check_unit_range(name: &str, values: &[f64]) -> Result<()> {
    if let Some(i) = values.iter().position(|v| !(0.0..=1.0).contains(v)) {
        return Err(LogoError::config(format!(
            "{name}[{}] outside [0,1]: {}", i + 1, values[i]
        )));
    }
    Ok(())
}
