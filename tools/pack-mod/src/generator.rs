//! Locating and running the asset generator

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Executable name of the asset generator
pub const GENERATOR_NAME: &str = "gen-assets";

/// How the generator step should be handled
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Generator {
    /// Do not run a generator
    Skip,
    /// Look next to the current executable, then on `PATH`
    #[default]
    Auto,
    /// Run this executable
    Path(PathBuf),
}

/// Find the generator executable, or `None` if there is nothing to run
pub fn resolve_generator(generator: &Generator) -> Option<PathBuf> {
    match generator {
        Generator::Skip => None,
        Generator::Path(path) => Some(path.clone()),
        Generator::Auto => sibling_generator().or_else(|| which::which(GENERATOR_NAME).ok()),
    }
}

/// `gen-assets` in the same directory as the running binary
fn sibling_generator() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let candidate = exe.parent()?.join(format!(
        "{}{}",
        GENERATOR_NAME,
        std::env::consts::EXE_SUFFIX
    ));
    candidate.is_file().then_some(candidate)
}

/// Run the generator with `--output asset_dir`
///
/// Fails if the process cannot be spawned or exits unsuccessfully.
pub fn run_generator(exe: &Path, asset_dir: &Path) -> Result<()> {
    tracing::info!("Running asset generator: {}", exe.display());

    let status = Command::new(exe)
        .arg("--output")
        .arg(asset_dir)
        .status()
        .with_context(|| format!("Failed to execute generator: {}", exe.display()))?;

    if !status.success() {
        anyhow::bail!(
            "Asset generator failed with exit code: {:?}",
            status.code()
        );
    }

    Ok(())
}
