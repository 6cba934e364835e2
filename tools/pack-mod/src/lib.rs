//! Packager for the Cosmic Spectrum mod
//!
//! Bundles the mod directory into a deflate zip under `dist/` and copies the
//! archive next to the project root so it can be shared directly. The asset
//! generator can be run first so the archive always carries fresh assets.
//!
//! # Layout
//!
//! ```text
//! <root>/
//!   GX_Cosmic_Spectrum/          mod sources (archived)
//!     assets/                    generator output
//!   dist/GX_Cosmic_Spectrum.zip  packaged archive
//!   GX_Cosmic_Spectrum.zip       exported copy
//! ```

pub mod archive;
pub mod generator;
pub mod layout;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub use archive::{collect_files, entry_name, write_archive};
pub use generator::{resolve_generator, run_generator, Generator, GENERATOR_NAME};
pub use layout::PackLayout;

/// Paths produced by a successful [`package`] run
#[derive(Debug, Clone)]
pub struct PackReport {
    pub archive: PathBuf,
    pub export: PathBuf,
    /// Number of files written into the archive
    pub entries: usize,
}

/// Run the full packaging pipeline
///
/// Fails before touching the filesystem if the mod directory is missing.
/// A generator that exits non-zero aborts the run before any archive is
/// written.
pub fn package(layout: &PackLayout, generator: &Generator) -> Result<PackReport> {
    if !layout.mod_dir.is_dir() {
        anyhow::bail!("{} directory not found", layout::MOD_DIR_NAME);
    }

    match resolve_generator(generator) {
        Some(exe) => run_generator(&exe, &layout.asset_dir())?,
        None => tracing::info!("Asset generator not found, packaging existing assets"),
    }

    fs::create_dir_all(&layout.dist_dir).with_context(|| {
        format!(
            "Failed to create dist directory: {}",
            layout.dist_dir.display()
        )
    })?;

    let archive = layout.archive_path();
    let entries = write_archive(&layout.mod_dir, &archive)?;

    fs::copy(&archive, &layout.export_path).with_context(|| {
        format!(
            "Failed to export archive to {}",
            layout.export_path.display()
        )
    })?;

    Ok(PackReport {
        archive,
        export: layout.export_path.clone(),
        entries,
    })
}
