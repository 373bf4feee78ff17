use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gt_contour::{
    CompoundPath, ContourSet, ExtractConfig, PathCmd, contour_set_to_path, extract_contours,
};
use gt_core::{AlphaImage, Mask};
use gt_diffuse::diffuse_opacity;
use image::{GrayImage, Rgb, RgbImage};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "gt_gallery")]
#[command(about = "Run glyph-trace algorithms on external fixtures")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(name = "mask")]
    Mask(MaskArgs),
    #[command(name = "contours")]
    Contours(ContoursArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "docs/fig/raw")]
    out: PathBuf,
    /// Diffusion passes applied before tracing.
    #[arg(long, default_value_t = 5)]
    steps: u32,
}

#[derive(Args, Debug, Clone)]
struct MaskArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
struct ContoursArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Debug, Clone, Serialize)]
struct MetaMask {
    steps: u32,
    width: usize,
    height: usize,
    opaque_pixels: usize,
    pixel_rule: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct MetaContours {
    steps: u32,
    width: usize,
    height: usize,
    contour_count: usize,
    total_points: usize,
    subpaths: usize,
}

#[derive(Debug, Clone, Serialize)]
struct ContourDto {
    point_count: usize,
    flat: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
struct PathCmdDto {
    op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
struct ContourSetDto {
    width: usize,
    height: usize,
    contours: Vec<ContourDto>,
    path: Vec<PathCmdDto>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Mask(args) => run_mask(args),
        Command::Contours(args) => run_contours(args),
    }
}

fn run_mask(args: MaskArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "mask")?;
    let img = load_input_alpha(&args.common.input)?;

    let mask = diffuse_opacity(&img.as_view(), args.common.steps);

    save_mask_image(case_dir.join("mask.png"), &mask)?;
    write_json(
        case_dir.join("meta.json"),
        &MetaMask {
            steps: args.common.steps,
            width: img.width(),
            height: img.height(),
            opaque_pixels: mask.count_set(),
            pixel_rule: "opaque iff alpha != 0, diffused by `steps` passes",
        },
    )?;

    println!(
        "mask: {}x{}, {} opaque pixels after {} diffusion passes",
        img.width(),
        img.height(),
        mask.count_set(),
        args.common.steps
    );
    Ok(())
}

fn run_contours(args: ContoursArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "contours")?;
    let img = load_input_alpha(&args.common.input)?;

    let cfg = ExtractConfig {
        diffusion_steps: args.common.steps,
    };
    let set = extract_contours(&img.as_view(), &cfg)
        .with_context(|| format!("extracting contours from {}", args.common.input.display()))?;
    let path = contour_set_to_path(&set);

    write_json(case_dir.join("contours.json"), &contour_set_dto(&set, &path))?;
    write_json(
        case_dir.join("meta.json"),
        &MetaContours {
            steps: args.common.steps,
            width: set.width,
            height: set.height,
            contour_count: set.len(),
            total_points: set.total_points(),
            subpaths: path.num_subpaths(),
        },
    )?;

    let overlay = render_contour_overlay(&img, &set);
    overlay
        .save(case_dir.join("overlay.png"))
        .context("writing contours overlay.png")?;

    println!(
        "contours: {} loops, {} boundary points ({} path subpaths)",
        set.len(),
        set.total_points(),
        path.num_subpaths()
    );
    Ok(())
}

fn prepare_case(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    if !common.input.is_file() {
        anyhow::bail!("input path {} is not a file.", common.input.display());
    }

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    fs::copy(&common.input, case_dir.join("input.png")).with_context(|| {
        format!(
            "copying input {} -> {}",
            common.input.display(),
            case_dir.join("input.png").display()
        )
    })?;

    Ok(case_dir)
}

/// Loads the alpha plane of a fixture.
///
/// Images carrying an alpha channel contribute it directly; opaque formats
/// fall back to luminance as the mask (bright strokes on black).
fn load_input_alpha(path: &Path) -> Result<AlphaImage> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;

    let (w, h) = (dyn_img.width() as usize, dyn_img.height() as usize);
    let data = if dyn_img.color().has_alpha() {
        dyn_img
            .to_rgba8()
            .pixels()
            .map(|px| px.0[3])
            .collect::<Vec<u8>>()
    } else {
        dyn_img.to_luma8().into_raw()
    };

    AlphaImage::from_vec(w, h, data)
        .with_context(|| format!("constructing alpha image from {}", path.display()))
}

fn save_mask_image(path: PathBuf, mask: &Mask) -> Result<()> {
    let mut data = vec![0u8; mask.width() * mask.height()];
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if mask.get(x, y) {
                data[y * mask.width() + x] = 255;
            }
        }
    }

    let gray = GrayImage::from_raw(mask.width() as u32, mask.height() as u32, data)
        .context("constructing GrayImage from mask")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn render_contour_overlay(input: &AlphaImage, set: &ContourSet) -> RgbImage {
    let gray = GrayImage::from_raw(
        input.width() as u32,
        input.height() as u32,
        input.data().to_vec(),
    )
    .expect("dimensions and data length must match");
    let mut rgb = image::DynamicImage::ImageLuma8(gray).to_rgb8();

    for contour in set.iter() {
        for &(x, y) in &contour.points {
            rgb.put_pixel(x, y, Rgb([255, 64, 64]));
        }
    }

    rgb
}

fn contour_set_dto(set: &ContourSet, path: &CompoundPath) -> ContourSetDto {
    let contours = set
        .iter()
        .map(|c| ContourDto {
            point_count: c.len(),
            flat: c.to_flat(),
        })
        .collect();

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

    ContourSetDto {
        width: set.width,
        height: set.height,
        contours,
        path,
    }
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}
