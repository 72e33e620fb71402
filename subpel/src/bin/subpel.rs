use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use subpel::transform::{UpsampleMethod, upsample};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "subpel", version, about = "Upsample an image by an integer magnitude")]
struct Cli {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image; the format follows the extension.
    #[arg(long)]
    out: PathBuf,

    /// Interpolation method.
    #[arg(long, value_enum, default_value_t = MethodChoice::Bilinear)]
    method: MethodChoice,

    /// Integer scale factor (six-tap accepts only 2 or 4).
    #[arg(long, default_value_t = 2)]
    magnitude: u32,

    /// Component depth used while processing.
    #[arg(long, value_enum, default_value_t = DepthChoice::Eight)]
    depth: DepthChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodChoice {
    Bilinear,
    SixTap,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DepthChoice {
    #[value(name = "8")]
    Eight,
    #[value(name = "16")]
    Sixteen,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let method = match cli.method {
        MethodChoice::Bilinear => UpsampleMethod::Bilinear,
        MethodChoice::SixTap => UpsampleMethod::SixTap,
    };

    if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let (width, height) = match cli.depth {
        DepthChoice::Eight => run_u8(&cli.in_path, &cli.out, cli.magnitude, method)?,
        DepthChoice::Sixteen => run_u16(&cli.in_path, &cli.out, cli.magnitude, method)?,
    };

    tracing::info!(
        out = %cli.out.display(),
        width,
        height,
        %method,
        magnitude = cli.magnitude,
        "wrote upsampled image"
    );
    Ok(())
}

fn run_u8(
    input: &Path,
    out: &Path,
    magnitude: u32,
    method: UpsampleMethod,
) -> anyhow::Result<(u32, u32)> {
    let image = subpel::io::read_raster(input)
        .with_context(|| format!("read image '{}'", input.display()))?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        "loaded '{}'",
        input.display()
    );

    let up = upsample(&image, magnitude, method).context("upsample")?;
    subpel::io::write_raster(&up, out)
        .with_context(|| format!("write image '{}'", out.display()))?;
    Ok(up.dimensions())
}

fn run_u16(
    input: &Path,
    out: &Path,
    magnitude: u32,
    method: UpsampleMethod,
) -> anyhow::Result<(u32, u32)> {
    let image = subpel::io::read_raster_u16(input)
        .with_context(|| format!("read image '{}'", input.display()))?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        "loaded '{}'",
        input.display()
    );

    let up = upsample(&image, magnitude, method).context("upsample")?;
    subpel::io::write_raster_u16(&up, out)
        .with_context(|| format!("write image '{}'", out.display()))?;
    Ok(up.dimensions())
}
