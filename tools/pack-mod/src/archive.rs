//! Zip archive construction

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// All regular files under `base`, sorted by path
pub fn collect_files(base: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(base).follow_links(false) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", base.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Archive entry name for `path` relative to `base`, always `/`-separated
pub fn entry_name(base: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(base)
        .with_context(|| format!("{} is not inside {}", path.display(), base.display()))?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Ok(parts.join("/"))
}

/// Write every file under `source` into a deflate zip at `archive`
///
/// Any existing archive is replaced. Returns the number of entries written.
pub fn write_archive(source: &Path, archive: &Path) -> Result<usize> {
    let files = collect_files(source)?;

    let file = File::create(archive)
        .with_context(|| format!("Failed to create archive: {}", archive.display()))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in &files {
        let name = entry_name(source, path)?;
        tracing::debug!("  + {}", name);

        zip.start_file(name.as_str(), options)
            .with_context(|| format!("Failed to add {} to archive", name))?;
        let mut input =
            File::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
        io::copy(&mut input, &mut zip)
            .with_context(|| format!("Failed to compress {}", path.display()))?;
    }

    let mut writer = zip
        .finish()
        .with_context(|| format!("Failed to finalize archive: {}", archive.display()))?;
    io::Write::flush(&mut writer)?;

    let size = fs::metadata(archive).map(|m| m.len()).unwrap_or(0);
    tracing::info!(
        "Archived {} files into {} ({} bytes)",
        files.len(),
        archive.display(),
        size
    );

    Ok(files.len())
}
