//! Centralized error types for the Kin workspace.
//!
//! The data model itself has no failure modes; these cover loading and
//! writing rosters.

use thiserror::Error;

/// Top-level error enum. Variants map to subsystems.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type KinResult<T> = Result<T, KinError>;
