//! Fixed project layout

use std::path::{Path, PathBuf};

/// Mod directory name; also the archive stem
pub const MOD_DIR_NAME: &str = "GX_Cosmic_Spectrum";
/// Directory the archive is built into
pub const DIST_DIR_NAME: &str = "dist";
/// Asset directory inside the mod directory
pub const ASSET_DIR_NAME: &str = "assets";

/// Where the packager reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackLayout {
    pub mod_dir: PathBuf,
    pub dist_dir: PathBuf,
    /// Second copy of the archive, outside `dist/`
    pub export_path: PathBuf,
}

impl PackLayout {
    /// Standard layout under a project root
    pub fn from_root(root: &Path) -> Self {
        Self {
            mod_dir: root.join(MOD_DIR_NAME),
            dist_dir: root.join(DIST_DIR_NAME),
            export_path: root.join(archive_file_name()),
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.dist_dir.join(archive_file_name())
    }

    /// Directory the asset generator writes into
    pub fn asset_dir(&self) -> PathBuf {
        self.mod_dir.join(ASSET_DIR_NAME)
    }
}

fn archive_file_name() -> String {
    format!("{}.zip", MOD_DIR_NAME)
}
