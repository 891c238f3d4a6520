//! The storage **abstraction** behind the registry.
//!
//! A store holds exactly one [`Snapshot`], the whole registry state. The
//! registry reads it once when constructed and overwrites it on every save.
//! Concrete backends live in the submodules; the JSON encoding is shared so
//! every backend produces the same document.

use std::collections::BTreeMap;

use roster_common::error::StoreError;
use roster_common::model::{Course, EntityId, Student, Teacher};
use serde::{Deserialize, Serialize};

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Everything the registry persists.
///
/// Collections are keyed by id. `serde_json` writes integer map keys as
/// decimal strings and parses them back, so keys that are not integers fail
/// to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub students: BTreeMap<EntityId, Student>,
    #[serde(default)]
    pub teachers: BTreeMap<EntityId, Teacher>,
    #[serde(default)]
    pub courses: BTreeMap<EntityId, Course>,
    /// Absent in documents written by hand or by older tools.
    #[serde(rename = "_next_id", default)]
    pub next_id: Option<EntityId>,
}

/// Defines the contract for persisting a registry snapshot.
pub trait SnapshotStore {
    /// Reads the stored snapshot.
    ///
    /// # Returns
    /// * `Ok(None)` - Nothing has been stored yet.
    /// * `Ok(Some(_))` - The decoded snapshot.
    /// * `Err(_)` - The backend failed or the stored document is not a valid snapshot.
    fn read(&self) -> Result<Option<Snapshot>, StoreError>;

    /// Replaces whatever is stored with `snapshot`.
    fn write(&self, snapshot: &Snapshot) -> Result<(), StoreError>;

    /// Human readable location, used in messages.
    fn describe(&self) -> String;
}

/// Renders a snapshot as pretty printed JSON with two space indentation.
pub fn encode(snapshot: &Snapshot) -> Result<String, StoreError> {
    serde_json::to_string_pretty(snapshot).map_err(StoreError::Encode)
}

pub fn decode(text: &str) -> Result<Snapshot, StoreError> {
    serde_json::from_str(text).map_err(StoreError::Decode)
}
