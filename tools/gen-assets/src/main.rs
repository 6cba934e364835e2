//! Asset generator for the Cosmic Spectrum mod
//!
//! Renders every static asset the mod ships:
//! - Wallpapers (JPEG): full size, quarter-size preview, square
//! - Logo (PNG with alpha)
//! - Animated wallpaper (looping GIF)
//! - Background music and UI cues (16-bit stereo WAV, in `audio/`)
//!
//! Running with no arguments writes into `GX_Cosmic_Spectrum/assets`
//! relative to the current directory. Existing files are overwritten.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod audio;
pub mod texture;

/// Default asset directory, relative to the project root
const DEFAULT_OUTPUT: &str = "GX_Cosmic_Spectrum/assets";

#[derive(Parser)]
#[command(name = "gen-assets")]
#[command(about = "Generate wallpapers, logo, animation and audio for the Cosmic Spectrum mod")]
#[command(version)]
struct Cli {
    /// Output directory for generated assets
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// TrueType font used for the logo title
    #[arg(long, default_value = cosmic_gen::texture::DEFAULT_FONT_PATH)]
    font: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let audio_dir = cli.output.join(audio::AUDIO_SUBDIR);

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("Failed to create asset directory: {}", cli.output.display()))?;
    fs::create_dir_all(&audio_dir)
        .with_context(|| format!("Failed to create audio directory: {}", audio_dir.display()))?;

    tracing::info!("=== Cosmic Spectrum asset generation ===");
    tracing::info!("Output -> {}", cli.output.display());

    let images = texture::ImageSet::default().generate(&cli.output, &cli.font)?;
    let sounds = audio::generate_sounds(&audio_dir)?;

    tracing::info!("Done! Generated {} images and {} sounds", images, sounds);
    Ok(())
}
