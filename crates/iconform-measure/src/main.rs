//! iconform-measure: measure an icon image's normalization scale.
//!
//! Decodes an icon image, runs the measurement pipeline, and prints the
//! resulting scale, fractional bounds, and optional mask-match verdict
//! as JSON on stdout. Progress notes go to stderr so the JSON stays
//! pipeable.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin iconform-measure -- [OPTIONS] <IMAGE_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use iconform_norm::{ImageSource, MaskPath, ShapeNormalizer};

/// Measure an icon image's shape normalization scale.
///
/// Runs the boundary-scan / convex-hull / area-ratio pipeline on the
/// image's alpha channel and prints the result as JSON.
#[derive(Parser)]
#[command(name = "iconform-measure", version)]
struct Cli {
    /// Path to the icon image (PNG, JPEG, BMP, WebP).
    image_path: PathBuf,

    /// Target on-screen icon size in pixels.
    ///
    /// The working surface is twice this, matching what consumers
    /// render before scaling down.
    #[arg(long, default_value_t = ShapeNormalizer::DEFAULT_ICON_SIZE)]
    icon_size: usize,

    /// Mask shape to test the icon silhouette against.
    #[arg(long, value_enum)]
    mask: Option<Mask>,

    /// Corner radius for the rounded-square mask, as a fraction of the
    /// side (clamped to 0.0–0.5).
    #[arg(long, default_value_t = 0.25)]
    corner_radius: f32,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

/// Mask shape selection.
#[derive(Clone, Copy, ValueEnum)]
enum Mask {
    /// Full-bleed circle inscribed in the icon square.
    Circle,
    /// The full icon square.
    Square,
    /// Square with quarter-round corners (see --corner-radius).
    RoundedSquare,
}

impl Mask {
    fn build(self, corner_radius: f32) -> Result<MaskPath, iconform_norm::MaskPathError> {
        match self {
            Self::Circle => MaskPath::circle(),
            Self::Square => MaskPath::square(),
            Self::RoundedSquare => MaskPath::rounded_square(corner_radius),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Reading image from {}", cli.image_path.display());
    let bytes = std::fs::read(&cli.image_path)?;
    let image = image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = image.dimensions();
    eprintln!("Decoded {width}x{height} image");

    let source = ImageSource::from_rgba(&image);
    let mask = cli
        .mask
        .map(|m| m.build(cli.corner_radius))
        .transpose()?;

    let mut normalizer = ShapeNormalizer::new(cli.icon_size);
    eprintln!(
        "Measuring at icon size {} (surface {})",
        cli.icon_size,
        normalizer.max_size()
    );
    let result = normalizer.measure(&source, mask.as_ref());

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}
