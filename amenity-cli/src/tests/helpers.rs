//! Test helpers for writing export fixtures and capturing CLI output.

use super::*;
use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

/// One school, one hospital, one unnamed school and an element without
/// coordinates.
pub(super) const MIXED_EXPORT: &str = r#"{
  "version": 0.6,
  "elements": [
    {"type": "node", "tags": {"name": "Greenwood School", "amenity": "school"}, "lat": 12.9, "lon": 77.6},
    {"type": "node", "tags": {"name": "City Hospital", "amenity": "hospital"}, "lat": 12.95, "lon": 77.65},
    {"type": "node", "tags": {"name": "Greenwood School", "amenity": "school"}, "lat": 12.91, "lon": 77.61},
    {"type": "node", "tags": {"amenity": "school"}, "lat": 13.0, "lon": 77.7},
    {"type": "way", "tags": {"name": "No Coordinates", "amenity": "school"}}
  ]
}"#;

/// Temporary directory holding export fixtures for one test.
pub(super) struct Workspace {
    dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn mkdir(&self, name: &str) -> Utf8PathBuf {
        let path = self.path(name);
        fs::create_dir(self.dir.path().join(name)).expect("create directory");
        path
    }
}

pub(super) fn write_utf8(path: &Utf8PathBuf, contents: &[u8]) {
    fs::write(path, contents).expect("write fixture");
}

/// Run the CLI over `argv` and capture what it wrote.
pub(super) fn run_capturing(argv: &[String]) -> (Result<(), CliError>, String) {
    let mut stdout = Vec::new();
    let result = run_from(argv, &mut stdout);
    let text = String::from_utf8(stdout).expect("CLI output is UTF-8");
    (result, text)
}
