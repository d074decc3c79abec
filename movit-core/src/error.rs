//! Error types for the catalog and session core.

use thiserror::Error;

/// Catalog lookup failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// No workout is registered under the given id. Whether to fall back
    /// to a default workout is the caller's decision, not the catalog's.
    #[error("no workout with id {0}")]
    NotFound(u32),
}

/// Session mutation failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The checklist index does not exist in the bound workout.
    #[error("exercise index {index} is out of range for a workout with {len} exercises")]
    OutOfRange { index: usize, len: usize },
}
