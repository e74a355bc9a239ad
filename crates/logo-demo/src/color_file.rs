// File: crates/logo-demo/src/color_file.rs
// Summary: Tab-separated `column<TAB>colorIndex` overlay used by structure viewers; checked against 1-based columns.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ColorRow {
    pub column: usize,
    pub color_index: u32,
}

pub fn load(path: &Path, column_count: usize) -> Result<Vec<ColorRow>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse(file, column_count)
}

pub fn parse<R: std::io::Read>(input: R, column_count: usize) -> Result<Vec<ColorRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(input);
    let mut rows = Vec::new();
    for (i, rec) in rdr.deserialize::<ColorRow>().enumerate() {
        let row = rec.with_context(|| format!("line {}", i + 1))?;
        if row.column == 0 || row.column > column_count {
            bail!("line {}: column {} outside 1..={}", i + 1, row.column, column_count);
        }
        rows.push(row);
    }
    Ok(rows)
}
