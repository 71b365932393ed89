//! Error types for the file-facing parts of the crate.
//!
//! Decoding a document never fails: malformed bytes only shorten the result
//! (see [`StopReason`](super::models::StopReason)). These errors cover reading
//! inputs from disk and rendering reports.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum AsepriteError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be read from disk.
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the given inputs resolved to a document.
    #[error("No .{extensions} files found for given inputs.")]
    NoDocuments { extensions: String },

    /// Structured output could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience `Result` type alias using the crate's `AsepriteError` type.
pub type Result<T> = std::result::Result<T, AsepriteError>;
