// File: crates/logo-core/src/consensus.rs
// Summary: Per-column biochemical consensus classification and the letter color rules built on it.
// Notes:
// - Scores are grouped emission probabilities; each threshold picks one group per column.
// - The letter rules are kept literal, one entry per rule. Letters that test similar
//   chemistry (R vs K) carry different condition sets.

use std::collections::BTreeMap;

use skia_safe as skia;

use crate::data::LogoData;
use crate::error::{LogoError, Result};
use crate::palette::{
    CONSENSUS_BLUE, CONSENSUS_CYAN, CONSENSUS_GLYCINE, CONSENSUS_GREEN, CONSENSUS_GREY,
    CONSENSUS_PROLINE, CONSENSUS_RED,
};

use self::Group::{Alcohol as O, Hydrophobic as H, Negative as NEG, Polar as P, Positive as POS};

/// Thresholds at which a consensus group is arbitrated, ascending.
pub const THRESHOLDS: [f64; 4] = [0.50, 0.60, 0.80, 0.85];
const T50: usize = 0;
const T60: usize = 1;
const T80: usize = 2;
const T85: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Polar,
    Alcohol,
    Negative,
    Positive,
    Hydrophobic,
    Unclassified,
}

impl Group {
    /// Arbitration order; earlier wins a full tie.
    pub const SCORED: [Group; 5] = [
        Group::Polar,
        Group::Alcohol,
        Group::Negative,
        Group::Positive,
        Group::Hydrophobic,
    ];

    pub fn symbol(self) -> char {
        match self {
            Group::Polar => 'p',
            Group::Alcohol => 'o',
            Group::Negative => '-',
            Group::Positive => '+',
            Group::Hydrophobic => 'h',
            Group::Unclassified => '.',
        }
    }

    /// Number of residues in the class; smaller classes are more specific.
    pub fn class_size(self) -> u32 {
        match self {
            Group::Unclassified => 20,
            Group::Hydrophobic => 11,
            Group::Positive => 3,
            Group::Negative | Group::Alcohol | Group::Polar => 2,
        }
    }
}

/// Grouped probability mass of one column.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupScores {
    pub polar: f64,
    pub alcohol: f64,
    pub negative: f64,
    pub positive: f64,
    pub hydrophobic: f64,
}

impl GroupScores {
    pub fn from_probabilities(entries: &[(char, f64)]) -> Self {
        let mut s = Self::default();
        for &(letter, p) in entries {
            match letter {
                'Q' | 'N' => s.polar += p,
                'S' | 'T' => s.alcohol += p,
                'E' | 'D' => s.negative += p,
                _ => {}
            }
            // H counts as both charged and hydrophobic.
            if matches!(letter, 'K' | 'R' | 'H') {
                s.positive += p;
            }
            if matches!(letter, 'W' | 'L' | 'V' | 'I' | 'M' | 'A' | 'F' | 'C' | 'Y' | 'H' | 'P') {
                s.hydrophobic += p;
            }
        }
        s
    }

    pub fn score(&self, group: Group) -> f64 {
        match group {
            Group::Polar => self.polar,
            Group::Alcohol => self.alcohol,
            Group::Negative => self.negative,
            Group::Positive => self.positive,
            Group::Hydrophobic => self.hydrophobic,
            Group::Unclassified => 0.0,
        }
    }
}

/// Pick the most specific group whose score reaches `threshold`.
/// Smaller class size wins; equal sizes go to the higher score.
pub fn arbitrate(scores: &GroupScores, threshold: f64) -> Group {
    let mut best = Group::Unclassified;
    let mut best_score = f64::NEG_INFINITY;
    for g in Group::SCORED {
        let score = scores.score(g);
        if score < threshold {
            continue;
        }
        let better = g.class_size() < best.class_size()
            || (g.class_size() == best.class_size() && score > best_score);
        if better {
            best = g;
            best_score = score;
        }
    }
    best
}

/// Consensus group of every column at every threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsensusTable {
    rows: [Vec<Group>; 4],
}

impl ConsensusTable {
    pub fn build(probabilities: &[crate::data::Column]) -> Self {
        let scores: Vec<GroupScores> = probabilities
            .iter()
            .map(|c| GroupScores::from_probabilities(&c.entries))
            .collect();
        let rows = THRESHOLDS.map(|t| scores.iter().map(|s| arbitrate(s, t)).collect());
        Self { rows }
    }

    /// Group for 1-indexed `col` at threshold index `t` (see `THRESHOLDS`).
    pub fn group(&self, t: usize, col: usize) -> Option<Group> {
        self.rows.get(t)?.get(col.checked_sub(1)?).copied()
    }

    /// Groups of one column at all four thresholds.
    pub fn column(&self, col: usize) -> Option<[Group; 4]> {
        let i = col.checked_sub(1)?;
        if i >= self.rows[0].len() {
            return None;
        }
        Some([self.rows[0][i], self.rows[1][i], self.rows[2][i], self.rows[3][i]])
    }

    pub fn len(&self) -> usize { self.rows[0].len() }

    pub fn is_empty(&self) -> bool { self.rows[0].is_empty() }
}

/// One letter rule: the letters it colors and the threshold/group pairs that trigger it.
/// `when: None` applies unconditionally.
pub struct LetterRule {
    pub letters: &'static [(char, skia::Color)],
    pub when: Option<&'static [(usize, Group)]>,
}

impl LetterRule {
    fn matches(&self, groups: &[Group; 4]) -> bool {
        match self.when {
            None => true,
            Some(conds) => conds.iter().any(|&(t, g)| groups[t] == g),
        }
    }
}

pub const LETTER_RULES: [LetterRule; 10] = [
    // D
    LetterRule { letters: &[('D', CONSENSUS_RED)], when: Some(&[(T50, NEG), (T60, NEG), (T85, P)]) },
    // R
    LetterRule { letters: &[('R', CONSENSUS_RED)], when: Some(&[(T60, POS), (T80, POS), (T85, P)]) },
    // Q
    LetterRule { letters: &[('Q', CONSENSUS_GREEN)], when: Some(&[(T50, P), (T60, P), (T85, NEG)]) },
    // N
    LetterRule { letters: &[('N', CONSENSUS_GREEN)], when: Some(&[(T50, P), (T85, P)]) },
    // K
    LetterRule { letters: &[('K', CONSENSUS_RED)], when: Some(&[(T50, POS), (T85, P)]) },
    // E
    LetterRule { letters: &[('E', CONSENSUS_RED)], when: Some(&[(T60, NEG), (T80, NEG), (T85, P)]) },
    // H, Y
    LetterRule {
        letters: &[('H', CONSENSUS_CYAN), ('Y', CONSENSUS_CYAN)],
        when: Some(&[(T60, H), (T85, H), (T80, POS)]),
    },
    // hydrophobic core
    LetterRule {
        letters: &[
            ('A', CONSENSUS_BLUE), ('C', CONSENSUS_BLUE), ('F', CONSENSUS_BLUE), ('L', CONSENSUS_BLUE),
            ('I', CONSENSUS_BLUE), ('M', CONSENSUS_BLUE), ('V', CONSENSUS_BLUE), ('W', CONSENSUS_BLUE),
        ],
        when: Some(&[(T60, H), (T80, H)]),
    },
    // S, T
    LetterRule {
        letters: &[('S', CONSENSUS_GREEN), ('T', CONSENSUS_GREEN)],
        when: Some(&[(T50, O), (T85, O), (T80, P)]),
    },
    // P, G
    LetterRule { letters: &[('P', CONSENSUS_PROLINE), ('G', CONSENSUS_GLYCINE)], when: None },
];

/// Color of `letter` for a column whose groups at the four thresholds are `groups`.
pub fn letter_color(letter: char, groups: &[Group; 4]) -> skia::Color {
    for rule in &LETTER_RULES {
        if let Some(&(_, color)) = rule.letters.iter().find(|(l, _)| *l == letter) {
            return if rule.matches(groups) { color } else { CONSENSUS_GREY };
        }
    }
    CONSENSUS_GREY
}

/// `column -> (letter -> color)` for the consensus scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsensusColorMap {
    columns: Vec<BTreeMap<char, skia::Color>>,
}

impl ConsensusColorMap {
    pub fn from_table(table: &ConsensusTable) -> Self {
        let columns = (1..=table.len())
            .filter_map(|col| table.column(col))
            .map(|groups| {
                LETTER_RULES
                    .iter()
                    .flat_map(|r| r.letters.iter())
                    .map(|&(letter, _)| (letter, letter_color(letter, &groups)))
                    .collect()
            })
            .collect();
        Self { columns }
    }

    /// Classify every column of an amino-acid logo.
    pub fn compute(data: &LogoData) -> Result<Self> {
        let probs = data.probabilities.as_ref().ok_or_else(|| {
            LogoError::config("consensus coloring needs per-column probabilities")
        })?;
        let table = ConsensusTable::build(probs);
        log::debug!("consensus classified {} columns", table.len());
        Ok(Self::from_table(&table))
    }

    /// Color for `letter` in 1-indexed `col`; grey when unknown.
    pub fn color(&self, col: usize, letter: char) -> skia::Color {
        col.checked_sub(1)
            .and_then(|i| self.columns.get(i))
            .and_then(|m| m.get(&letter).copied())
            .unwrap_or(CONSENSUS_GREY)
    }

    pub fn len(&self) -> usize { self.columns.len() }

    pub fn is_empty(&self) -> bool { self.columns.is_empty() }
}
