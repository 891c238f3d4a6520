use std::path::PathBuf;

use thiserror::Error;

use crate::model::{EntityId, EntityKind};

/// A registry operation referenced an entity that does not exist.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("teacher id {0} not found")]
    TeacherNotFound(EntityId),
    #[error("student id {0} not found")]
    StudentNotFound(EntityId),
    #[error("course id {0} not found")]
    CourseNotFound(EntityId),
}

impl RegistryError {
    /// The kind of entity that was missing.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::TeacherNotFound(_) => EntityKind::Teacher,
            Self::StudentNotFound(_) => EntityKind::Student,
            Self::CourseNotFound(_) => EntityKind::Course,
        }
    }

    /// The id that could not be resolved.
    pub fn id(&self) -> EntityId {
        match *self {
            Self::TeacherNotFound(id) | Self::StudentNotFound(id) | Self::CourseNotFound(id) => id,
        }
    }
}

/// Failure reading or writing a stored snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}
