//! Error types for the notebook model.

use thiserror::Error;

/// Errors that can occur while loading or inspecting a notebook.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NbError {
    /// Notebook file could not be read.
    #[error("Failed to read notebook '{path}': {source}")]
    Read {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Notebook file could not be written.
    #[error("Failed to write notebook '{path}': {source}")]
    Write {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Document does not match the nbformat schema.
    #[error("Invalid notebook document: {0}")]
    Schema(#[from] serde_json::Error),

    /// Cell index past the end of the document.
    #[error("Cell {index} not found (document has {len} cells)")]
    NoSuchCell {
        /// Requested index.
        index: usize,
        /// Number of cells in the document.
        len: usize,
    },

    /// Cell has no outputs attached.
    #[error("Cell {index} has no outputs")]
    NoOutputs {
        /// Index of the cell.
        index: usize,
    },

    /// First output of the cell carries no text.
    #[error("First output of cell {index} has no text")]
    NoText {
        /// Index of the cell.
        index: usize,
    },

    /// Text assertion did not hold.
    #[error("Cell {index}: expected output to {expected}, got: {actual:?}")]
    AssertionFailed {
        /// Index of the offending cell.
        index: usize,
        /// Human-readable expectation (substring or pattern).
        expected: String,
        /// Actual text of the first output.
        actual: String,
    },
}

/// Result type for notebook operations.
pub type NbResult<T> = Result<T, NbError>;
