//! Error taxonomy for project documents.
//!
//! Opening and saving report failures as explicit results. Index errors come
//! from mutation commands that reference a task, bookmark or quick note that
//! does not exist; they leave the project untouched and are meant to be
//! handled at the presentation boundary as no-ops with a diagnostic.

use thiserror::Error;

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

#[derive(Error, Debug)]
pub enum DocumentError {
    /// The bytes were absent, empty, or did not decode into a project.
    #[error("Document is corrupt: {reason}")]
    CorruptDocument { reason: String },

    /// A mutation referenced a position outside the sequence.
    #[error("Index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Raised only by the optional consistency check.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Document I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

impl DocumentError {
    pub fn corrupt(reason: impl Into<String>) -> Self {
        DocumentError::CorruptDocument { reason: reason.into() }
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, DocumentError::IndexOutOfRange { .. })
    }
}
