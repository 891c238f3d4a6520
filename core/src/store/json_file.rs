use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use roster_common::error::StoreError;
use tracing::debug;

use super::{Snapshot, SnapshotStore, decode, encode};

/// Keeps the snapshot in a single JSON file.
///
/// Writes truncate the file and rewrite it in place. A save interrupted
/// halfway leaves a damaged file behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotStore for JsonFileStore {
    fn read(&self) -> Result<Option<Snapshot>, StoreError> {
        let text: String = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No data file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        decode(&text).map(Some)
    }

    fn write(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let text: String = encode(snapshot)?;
        let mut file: File = File::create(&self.path).map_err(|e| self.io_error(e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| self.io_error(e))?;
        debug!("Wrote {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
