//! Example: outline extraction on a merged glyph sheet.
//!
//! Loads a horizontally-merged PNG of N equal-width glyph cells, crops each
//! cell out of the sheet, and runs `extract_contours` on it. Every cell
//! yields a list of closed boundary loops (outer outlines and holes), which
//! are written to a JSON file next to the input image along with the
//! assembled path commands.
//!
//! Per-cell and total timing is printed to stdout.
//!
//! Run from the workspace root:
//!   cargo run -p glyph-trace --example glyphsheet -- --help
//!   cargo run -p glyph-trace --example glyphsheet

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glyph_trace::{AlphaImage, ExtractConfig, PathCmd, contour_set_to_path, extract_contours};
use image::ImageReader;
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Extract outlines from a horizontally-merged glyph sheet")]
struct Args {
    /// Path to the merged PNG (default: data/glyphs_0.png)
    #[arg(long, default_value = "data/glyphs_0.png")]
    input: String,

    /// Number of equal-width glyph cells merged in the image
    #[arg(long, default_value_t = 10)]
    n_cells: usize,

    /// Diffusion passes applied before tracing. Raise for heavily
    /// anti-aliased strokes, set to 0 to trace the raw mask.
    #[arg(long, default_value_t = 5)]
    steps: u32,

    /// Output JSON path (default: <input stem>_outlines.json next to input)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PathCmdDto {
    op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f32>,
}

#[derive(Serialize)]
struct CellResult {
    cell: usize,
    /// Wall-clock time for this cell's extraction, in milliseconds.
    elapsed_ms: f64,
    /// One flat `[x0, y0, x1, y1, ...]` array per boundary loop.
    loops: Vec<Vec<u32>>,
    path: Vec<PathCmdDto>,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let img_path = &args.input;
    let out_path = args.out.unwrap_or_else(|| {
        let p = std::path::Path::new(img_path);
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        let dir = p.parent().unwrap_or(std::path::Path::new("."));
        dir.join(format!("{stem}_outlines.json"))
            .to_string_lossy()
            .into_owned()
    });

    let decoded = ImageReader::open(img_path)
        .with_context(|| format!("opening {img_path}"))?
        .decode()
        .with_context(|| format!("decoding {img_path}"))?;

    let full_width = decoded.width() as usize;
    let height = decoded.height() as usize;
    let n_cells = args.n_cells;

    assert!(n_cells > 0, "n_cells must be > 0");
    assert_eq!(
        full_width % n_cells,
        0,
        "image width {full_width} is not divisible by n_cells={n_cells}"
    );
    let cell_w = full_width / n_cells;

    // Alpha channel if the PNG has one, luminance otherwise.
    let alpha = if decoded.color().has_alpha() {
        decoded.to_rgba8().pixels().map(|px| px.0[3]).collect()
    } else {
        decoded.to_luma8().into_raw()
    };
    let sheet = AlphaImage::from_vec(full_width, height, alpha).context("building sheet image")?;

    println!(
        "loaded {img_path}: {full_width}x{height}, splitting into {n_cells} cells of {cell_w}x{height}"
    );
    println!("config: steps={}", args.steps);

    let cfg = ExtractConfig {
        diffusion_steps: args.steps,
    };

    let mut results: Vec<CellResult> = Vec::with_capacity(n_cells);
    let total_start = Instant::now();

    for cell_idx in 0..n_cells {
        let cell = sheet
            .as_view()
            .subview(cell_idx * cell_w, 0, cell_w, height)
            .context("cropping glyph cell")?;

        let t0 = Instant::now();
        let set = extract_contours(&cell, &cfg).context("extracting cell contours")?;
        let path = contour_set_to_path(&set);
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

        println!(
            "  cell {cell_idx}: {} loops, {} points  ({elapsed_ms:.2} ms)",
            set.len(),
            set.total_points()
        );

        let loops = set.iter().map(|c| c.to_flat()).collect();
        let path = path
            .cmds
            .iter()
            .map(|cmd| match *cmd {
                PathCmd::MoveTo(p) => PathCmdDto {
                    op: "move",
                    x: Some(p.x),
                    y: Some(p.y),
                },
                PathCmd::LineTo(p) => PathCmdDto {
                    op: "line",
                    x: Some(p.x),
                    y: Some(p.y),
                },
                PathCmd::Close => PathCmdDto {
                    op: "close",
                    x: None,
                    y: None,
                },
            })
            .collect();

        results.push(CellResult {
            cell: cell_idx,
            elapsed_ms,
            loops,
            path,
        });
    }

    let total_ms = total_start.elapsed().as_secs_f64() * 1e3;
    println!("total extraction time: {total_ms:.2} ms");

    let out_file =
        std::fs::File::create(&out_path).with_context(|| format!("creating {out_path}"))?;
    serde_json::to_writer_pretty(out_file, &results)
        .with_context(|| format!("writing JSON to {out_path}"))?;

    println!("outlines written to {out_path}");
    Ok(())
}
