//! Error types for the runner.

use std::time::Duration;
use thiserror::Error;

use skoll_nb::NbError;
use skoll_session::SessionError;

/// Errors that can occur while running a notebook.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunError {
    /// The document could not be loaded or does not match the schema.
    #[error(transparent)]
    Notebook(#[from] NbError),

    /// The execution session failed at the harness level.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// One execution pass exceeded its wall-clock limit. Never retried.
    #[error("Notebook '{document}' timed out after {limit:?}")]
    Timeout {
        /// The document being executed.
        document: String,
        /// The configured per-pass limit.
        limit: Duration,
    },
}

/// Result type for runner operations.
pub type RunResult<T> = Result<T, RunError>;
