//! Error types for execution sessions.

use thiserror::Error;

/// Harness-level failures of an execution session.
///
/// Cell runtime errors are not represented here; they travel back as error
/// outputs attached to the cell.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// The interpreter process could not be started.
    #[error("Failed to spawn interpreter: {0}")]
    Spawn(String),

    /// The session replied with something the adapter cannot decode.
    #[error("Session protocol error: {0}")]
    Protocol(String),

    /// Pipe or filesystem failure while talking to the session.
    #[error("Session I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A cell was submitted after the session was closed.
    #[error("Session is closed")]
    ClosedSession,
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
