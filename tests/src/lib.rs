//! Fixtures shared by the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory holding one data file.
///
/// The file itself is not created; tests decide whether it exists.
pub struct DataFile {
    _dir: TempDir,
    path: PathBuf,
}

impl DataFile {
    pub fn new() -> anyhow::Result<Self> {
        let dir: TempDir = TempDir::new()?;
        let path: PathBuf = dir.path().join("data.json");
        Ok(Self { _dir: dir, path })
    }

    /// A data file pre-filled with `text`.
    pub fn with_contents(text: &str) -> anyhow::Result<Self> {
        let file = Self::new()?;
        fs::write(&file.path, text)?;
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> anyhow::Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    pub fn json(&self) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.read()?)?)
    }
}
