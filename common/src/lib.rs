//! Types shared by every `roster` crate: entity records, identifiers,
//! error types and the runtime configuration.

pub mod config;
pub mod error;
pub mod log;
pub mod model;

#[doc(hidden)]
pub use tracing;
