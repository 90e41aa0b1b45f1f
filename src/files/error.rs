//! File lookup errors.

use thiserror::Error;

/// A named file does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("file {file:?} not found")]
pub struct NotFoundError {
    file: String,
}

impl NotFoundError {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }

    /// The identifier that was not found.
    pub fn file(&self) -> &str {
        &self.file
    }
}
