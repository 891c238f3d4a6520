//! # Roster Core
//!
//! The in-memory registry of students, teachers and courses, and the
//! storage it saves to.
//!
//! * **[`registry`]**: entity creation, reference checks, id allocation.
//! * **[`store`]**: the [`store::SnapshotStore`] contract plus its file and memory adapters.

pub mod registry;
pub mod store;

pub use registry::{LoadStatus, Registry};
pub use store::{JsonFileStore, MemoryStore, Snapshot, SnapshotStore};
