// File: crates/logo-demo/src/main.rs
// Summary: Demo loads a logo JSON document and writes the visible tiles and the height axis to PNGs.

mod color_file;

use anyhow::{Context, Result};
use clap::Parser;
use logo_core::{EngineOptions, LogoData, LogoEngine};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "logo-demo")]
#[command(about = "Render a sequence logo JSON document to tile PNGs")]
#[command(version)]
struct Args {
    /// Logo document (JSON)
    logo: PathBuf,

    /// Engine options file (TOML)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Tab-separated column to color-index overlay to validate
    #[arg(long)]
    color_file: Option<PathBuf>,

    /// Container width in pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f32,

    /// Center this column before writing tiles
    #[arg(long)]
    scroll_to: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();
    let args = Args::parse();

    let bytes = std::fs::read(&args.logo)
        .with_context(|| format!("failed to read logo '{}'", args.logo.display()))?;
    let data = LogoData::from_json_slice(&bytes)
        .with_context(|| format!("failed to load logo '{}'", args.logo.display()))?;
    println!("Loaded {} columns ({:?})", data.column_count(), data.alphabet);

    let options = match &args.options {
        Some(p) => EngineOptions::load(p).with_context(|| format!("failed to load options '{}'", p.display()))?,
        None => EngineOptions::default(),
    };

    if let Some(path) = &args.color_file {
        let rows = color_file::load(path, data.column_count())
            .with_context(|| format!("failed to load color file '{}'", path.display()))?;
        println!("Color file maps {} columns", rows.len());
        log::debug!("color rows: {:?}", rows);
    }

    let mut engine = LogoEngine::new(data, args.width, options)?;
    if let Some(col) = args.scroll_to {
        let cmd = engine.scroll_to_column(col, false)?;
        println!("Scrolled to column {} (offset {:.0}px)", col, cmd.offset_px);
    }
    let vp = engine.viewport().state();
    println!(
        "Zoom {:.2} (zoom control {}), column width {:.1}px, {} tiles",
        vp.zoom,
        if vp.zoom_enabled { "enabled" } else { "disabled" },
        vp.zoomed_column_width_px,
        engine.tiles().len()
    );

    let rendered: Vec<usize> = engine.tiles().iter().filter(|t| t.rendered).map(|t| t.index).collect();
    for index in rendered {
        let bytes = engine.tile_png_bytes(index)?;
        let out = out_name_with(&args.logo, &format!("tile{index}"));
        std::fs::write(&out, bytes).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }
    let axis = engine.axis_png_bytes()?;
    let out = out_name_with(&args.logo, "axis");
    std::fs::write(&out, axis).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/logo_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("logo");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("logo_{}_{}.png", stem, suffix));
    out
}
