// File: crates/logo-core/src/palette.rs
// Summary: Residue palettes, consensus and indicator band colors, and light/dark UI presets.

use skia_safe as skia;

use crate::data::Alphabet;

/// Fallback for symbols missing from the active palette.
pub const UNSTYLED: skia::Color = skia::Color::from_rgb(0x7a, 0x7a, 0x7a);

// Consensus scheme colors.
pub const CONSENSUS_GREY: skia::Color = skia::Color::from_rgb(0x7a, 0x7a, 0x7a);
pub const CONSENSUS_RED: skia::Color = skia::Color::from_rgb(0xff, 0x99, 0x99);
pub const CONSENSUS_GREEN: skia::Color = skia::Color::from_rgb(0x99, 0xff, 0x99);
pub const CONSENSUS_BLUE: skia::Color = skia::Color::from_rgb(0x99, 0x99, 0xff);
pub const CONSENSUS_CYAN: skia::Color = skia::Color::from_rgb(0x99, 0xff, 0xff);
pub const CONSENSUS_PROLINE: skia::Color = skia::Color::from_rgb(0xff, 0xff, 0x11);
pub const CONSENSUS_GLYCINE: skia::Color = skia::Color::from_rgb(0xff, 0x7f, 0x11);

// Occupancy bands (strong to faint).
pub const OCCUPANCY_STRONG: skia::Color = skia::Color::from_rgb(0x21, 0x71, 0xb5);
pub const OCCUPANCY_MEDIUM: skia::Color = skia::Color::from_rgb(0x6b, 0xae, 0xd6);
pub const OCCUPANCY_LIGHT: skia::Color = skia::Color::from_rgb(0xbd, 0xd7, 0xe7);
// Insert probability / length bands.
pub const INSERT_STRONG: skia::Color = skia::Color::from_rgb(0xe6, 0x55, 0x0d);
pub const INSERT_MEDIUM: skia::Color = skia::Color::from_rgb(0xfd, 0xae, 0x6b);
pub const INSERT_LIGHT: skia::Color = skia::Color::from_rgb(0xfe, 0xe6, 0xce);
pub const BAND_EMPTY: skia::Color = skia::Color::WHITE;

/// Occupancy breakpoints, checked in order with `<`.
pub const OCCUPANCY_BREAKS: [f64; 3] = [0.75, 0.85, 0.95];
/// Insert probability breakpoints, checked in order with `>`.
pub const INSERT_PROB_BREAKS: [f64; 3] = [0.1, 0.05, 0.03];
/// Insert length breakpoints, checked in order with `>`.
pub const INSERT_LENGTH_BREAKS: [f64; 3] = [9.0, 7.0, 4.0];

/// Letter color in the fixed palette of `alphabet`, or `None` if the symbol is not part of it.
pub fn residue_color(alphabet: Alphabet, symbol: char) -> Option<skia::Color> {
    let rgb = match alphabet {
        Alphabet::Dna => match symbol {
            'A' => (0xcb, 0xf7, 0x51),
            'C' => (0x5e, 0xc0, 0xcc),
            'G' => (0xff, 0xdf, 0x59),
            'T' | 'U' => (0xb5, 0x1f, 0x16),
            _ => return None,
        },
        Alphabet::Aa => match symbol {
            'A' => (0xff, 0x99, 0x66),
            'C' => (0x00, 0x99, 0x99),
            'D' => (0xff, 0x00, 0x00),
            'E' => (0xcc, 0x00, 0x33),
            'F' => (0x00, 0xcc, 0x00),
            'G' => (0xf2, 0xf2, 0x0c),
            'H' => (0x66, 0x00, 0x33),
            'I' => (0xcc, 0x99, 0x33),
            'K' => (0x66, 0x33, 0x99),
            'L' => (0x66, 0x33, 0x99),
            'M' => (0x99, 0x66, 0x00),
            'N' => (0x00, 0x33, 0x66),
            'P' => (0x33, 0xcc, 0x00),
            'Q' => (0x00, 0x66, 0x33),
            'R' => (0x00, 0x66, 0x99),
            'S' => (0x00, 0x66, 0x66),
            'T' => (0x33, 0x66, 0x99),
            'V' => (0x99, 0x99, 0x00),
            'W' => (0x66, 0x66, 0xcc),
            'Y' => (0xff, 0xcc, 0x00),
            _ => return None,
        },
    };
    Some(skia::Color::from_rgb(rgb.0, rgb.1, rgb.2))
}

/// Occupancy row color; lower occupancy reads stronger.
pub fn occupancy_band(value: f64) -> skia::Color {
    let [a, b, c] = OCCUPANCY_BREAKS;
    if value < a { OCCUPANCY_STRONG } else if value < b { OCCUPANCY_MEDIUM } else if value < c { OCCUPANCY_LIGHT } else { BAND_EMPTY }
}

pub fn insert_prob_band(value: f64) -> skia::Color {
    descending_band(value, INSERT_PROB_BREAKS)
}

pub fn insert_length_band(value: f64) -> skia::Color {
    descending_band(value, INSERT_LENGTH_BREAKS)
}

fn descending_band(value: f64, [a, b, c]: [f64; 3]) -> skia::Color {
    if value > a { INSERT_STRONG } else if value > b { INSERT_MEDIUM } else if value > c { INSERT_LIGHT } else { BAND_EMPTY }
}

/// Non-residue colors of a rendered logo.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub background: skia::Color,
    pub tick: skia::Color,
    pub label: skia::Color,
    pub axis_line: skia::Color,
    pub clicked: skia::Color,
    pub hovered: skia::Color,
    pub masked: skia::Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            label: skia::Color::from_argb(255, 20, 20, 30),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            clicked: skia::Color::from_argb(255, 255, 236, 179),
            hovered: skia::Color::from_argb(255, 230, 236, 245),
            masked: skia::Color::from_argb(255, 204, 204, 204),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            label: skia::Color::from_argb(255, 235, 235, 245),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            clicked: skia::Color::from_argb(255, 90, 78, 30),
            hovered: skia::Color::from_argb(255, 40, 44, 56),
            masked: skia::Color::from_argb(255, 70, 70, 75),
        }
    }

    /// Find a palette by `name`, falling back to light.
    pub fn find(name: &str) -> Self {
        for p in [Self::light(), Self::dark()] {
            if p.name.eq_ignore_ascii_case(name) { return p; }
        }
        Self::light()
    }
}
