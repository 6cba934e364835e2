//! Cosmic Spectrum mod packager
//!
//! Regenerates assets (when a generator is available), zips the mod
//! directory into `dist/` and exports a copy to the project root.

use anyhow::Result;
use clap::Parser;
use pack_mod::{package, Generator, PackLayout};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pack-mod")]
#[command(about = "Package the GX_Cosmic_Spectrum mod into a distributable zip")]
#[command(version)]
struct Cli {
    /// Project root containing the GX_Cosmic_Spectrum directory
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Asset generator to run before packaging
    #[arg(long, conflicts_with = "skip_generate")]
    generator: Option<PathBuf>,

    /// Package the existing assets without running the generator
    #[arg(long)]
    skip_generate: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let generator = match (cli.skip_generate, cli.generator) {
        (true, _) => Generator::Skip,
        (false, Some(path)) => Generator::Path(path),
        (false, None) => Generator::Auto,
    };

    let layout = PackLayout::from_root(&cli.root);
    let report = package(&layout, &generator)?;

    println!("Created {}", report.archive.display());
    println!("Exported {}", report.export.display());
    Ok(())
}
