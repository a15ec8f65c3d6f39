//! Error types for fuel rod geometry operations.

use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discretizing or assembling a fuel rod.
#[derive(Error, Debug)]
pub enum Error {
    /// Radii or ring counts that do not describe a valid annulus.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Parallel input sequences with differing lengths.
    #[error("mismatched length for {what}: expected {expected}, found {found}")]
    MismatchedLength {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Physically invalid density, temperature or composition.
    #[error("invalid material: {0}")]
    InvalidMaterial(String),

    /// An insert used in a role its classification does not allow.
    #[error("invalid insert: {0}")]
    InvalidInsert(String),

    /// An element without nodes or an assembly without elements.
    #[error("empty aggregate: {0}")]
    EmptyAggregate(String),

    /// I/O errors (snapshot and configuration files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn mismatched(what: &'static str, expected: usize, found: usize) -> Self {
        Error::MismatchedLength {
            what,
            expected,
            found,
        }
    }
}
