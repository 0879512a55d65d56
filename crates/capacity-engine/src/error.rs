//! Error types for capacity-engine operations.
//!
//! The computations themselves never fail; malformed temporal data degrades
//! to zero-valued defaults instead. Errors exist only at the boundary:
//! parsing dates handed in as strings, loading a snapshot, and resolving
//! entity ids.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Unknown task: {0}")]
    UnknownTask(String),

    #[error("Malformed snapshot: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
