//! Error types
//!
//! The engine itself has a single failure mode (bad coordinates). Everything
//! else that "cannot proceed" is a silent no-op by policy.

use thiserror::Error;

/// Errors raised by board access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Row or column outside `[0, GRID_SIZE)`
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },
}

/// Errors raised while persisting settings or the high score
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Browser storage unavailable or rejected the write
    #[error("storage unavailable")]
    Unavailable,
}
