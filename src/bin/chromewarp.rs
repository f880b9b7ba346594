use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "chromewarp", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a text job (config + glyph outlines) to a PNG.
    Render(RenderArgs),
    /// Warp an already flattened PNG.
    Warp(WarpArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Top rigid, bottom bends.
    BottomWeighted,
    /// Whole columns follow the parabola.
    FullArc,
    /// Only the lower part follows the parabola.
    BottomArc,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    Down,
    Up,
}

#[derive(Parser, Debug)]
struct WarpArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Warp strategy.
    #[arg(long, value_enum, default_value_t = ModeArg::BottomWeighted)]
    mode: ModeArg,

    /// Displacement in pixels. For arcs, positive lifts the center.
    #[arg(long, allow_negative_numbers = true)]
    bend: f64,

    /// Bottom-weighted direction.
    #[arg(long, value_enum, default_value_t = DirectionArg::Down)]
    direction: DirectionArg,

    /// Onset start as a fraction of the glyph height.
    #[arg(long)]
    start_ratio: Option<f64>,

    /// Onset exponent.
    #[arg(long)]
    power: Option<f64>,

    /// RGB distance from the background that counts as content.
    #[arg(long, default_value_t = 24.0)]
    tolerance: f32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Warp(args) => cmd_warp(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read job '{}'", args.in_path.display()))?;
    let job = chromewarp::RenderJob::from_json_str(&text)
        .with_context(|| format!("parse job '{}'", args.in_path.display()))?;
    let out = chromewarp::render_job(&job)?;
    write_png(&args.out, out)
}

fn cmd_warp(args: WarpArgs) -> anyhow::Result<()> {
    let img = image::open(&args.in_path)
        .with_context(|| format!("decode image '{}'", args.in_path.display()))?
        .into_rgba8();
    let buf = chromewarp::RasterBuffer::from_image(img)?;

    let base = match args.mode {
        ModeArg::BottomWeighted => {
            let dir = match args.direction {
                DirectionArg::Down => chromewarp::WarpDirection::Down,
                DirectionArg::Up => chromewarp::WarpDirection::Up,
            };
            chromewarp::WarpParams::bottom_weighted(args.bend, dir)
        }
        ModeArg::FullArc => chromewarp::WarpParams::full_arc(args.bend),
        ModeArg::BottomArc => chromewarp::WarpParams::bottom_arc(args.bend),
    };
    let params = base.with_onset(
        args.start_ratio.unwrap_or(base.start_ratio),
        args.power.unwrap_or(base.power),
    );

    let out = chromewarp::warp_flattened(&buf, &params, args.tolerance)?;
    write_png(&args.out, out)
}

fn write_png(path: &Path, buf: chromewarp::RasterBuffer) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    buf.into_image()?
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;

    eprintln!("wrote {}", path.display());
    Ok(())
}
