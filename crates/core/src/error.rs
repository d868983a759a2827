//! Error types shared across the workspace.

use thiserror::Error;

/// Errors produced by the overlap-detection engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The input geometry is malformed and cannot enter the pipeline.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// An internal invariant was violated.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
