//! End-to-end packaging against a temporary project root

use pack_mod::{package, Generator, PackLayout};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tempfile::tempdir;

fn populate_mod(root: &Path) -> Vec<(&'static str, Vec<u8>)> {
    let files: Vec<(&'static str, Vec<u8>)> = vec![
        ("mod.json", br#"{"name":"Cosmic Spectrum"}"#.to_vec()),
        ("assets/logo.png", vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3]),
        ("assets/audio/sfx_focus.wav", (0..=255u8).cycle().take(4096).collect()),
        ("theme/colors/palette.txt", b"core mid outer star\n".to_vec()),
    ];
    let mod_dir = root.join("GX_Cosmic_Spectrum");
    for (name, bytes) in &files {
        let path = mod_dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, bytes).unwrap();
    }
    files
}

#[test]
fn test_archive_round_trips_every_file() {
    let dir = tempdir().unwrap();
    let files = populate_mod(dir.path());
    let layout = PackLayout::from_root(dir.path());

    let report = package(&layout, &Generator::Skip).unwrap();
    assert_eq!(report.entries, files.len());
    assert_eq!(report.archive, dir.path().join("dist/GX_Cosmic_Spectrum.zip"));

    let mut zip = zip::ZipArchive::new(File::open(&report.archive).unwrap()).unwrap();
    assert_eq!(zip.len(), files.len());
    for (name, bytes) in &files {
        let mut entry = zip.by_name(name).unwrap();
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents).unwrap();
        assert_eq!(&contents, bytes, "{}", name);
    }
}

#[test]
fn test_export_is_identical_copy() {
    let dir = tempdir().unwrap();
    populate_mod(dir.path());
    let layout = PackLayout::from_root(dir.path());

    let report = package(&layout, &Generator::Skip).unwrap();
    assert_eq!(report.export, dir.path().join("GX_Cosmic_Spectrum.zip"));
    assert_eq!(
        fs::read(&report.archive).unwrap(),
        fs::read(&report.export).unwrap()
    );
}

#[test]
fn test_repackaging_replaces_archive() {
    let dir = tempdir().unwrap();
    populate_mod(dir.path());
    let layout = PackLayout::from_root(dir.path());
    package(&layout, &Generator::Skip).unwrap();

    fs::remove_file(dir.path().join("GX_Cosmic_Spectrum/mod.json")).unwrap();
    let report = package(&layout, &Generator::Skip).unwrap();

    let zip = zip::ZipArchive::new(File::open(&report.export).unwrap()).unwrap();
    assert_eq!(zip.len(), 3);
    assert!(zip.file_names().all(|n| n != "mod.json"));
}

#[test]
fn test_missing_mod_dir_creates_nothing() {
    let dir = tempdir().unwrap();
    let layout = PackLayout::from_root(dir.path());

    let err = package(&layout, &Generator::Skip).unwrap_err();
    assert_eq!(err.to_string(), "GX_Cosmic_Spectrum directory not found");
    assert!(!dir.path().join("dist").exists());
    assert!(!dir.path().join("GX_Cosmic_Spectrum.zip").exists());
}

#[cfg(unix)]
#[test]
fn test_failing_generator_aborts_before_archiving() {
    let dir = tempdir().unwrap();
    populate_mod(dir.path());
    let layout = PackLayout::from_root(dir.path());

    let result = package(&layout, &Generator::Path("false".into()));
    assert!(result.is_err());
    assert!(!layout.archive_path().exists());
    assert!(!layout.export_path.exists());
}

#[cfg(unix)]
#[test]
fn test_successful_generator_then_archive() {
    let dir = tempdir().unwrap();
    let files = populate_mod(dir.path());
    let layout = PackLayout::from_root(dir.path());

    let report = package(&layout, &Generator::Path("true".into())).unwrap();
    assert_eq!(report.entries, files.len());
}
