//! Session traits.

use async_trait::async_trait;
use std::path::Path;

use skoll_nb::Output;

use crate::error::SessionResult;

/// Opens fresh execution sessions.
///
/// Each execution pass gets its own session; nothing carries over between
/// passes, which is what makes a blind retry a full re-run.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    /// Name of the backing interpreter, for logs and reports.
    fn name(&self) -> &str;

    /// Open a session whose working directory is `workdir`.
    async fn open(&self, workdir: &Path) -> SessionResult<Box<dyn Session>>;
}

/// One live interpreter session.
///
/// Cells are submitted strictly in document order; the session keeps one
/// shared namespace across cells of the same pass.
#[async_trait]
pub trait Session: Send {
    /// Run one cell's source and return its outputs in capture order.
    ///
    /// A runtime error inside the cell is returned as an error output, not
    /// as an `Err`; the pass must keep going.
    async fn run_cell(&mut self, source: &str) -> SessionResult<Vec<Output>>;

    /// Shut the session down. Called on every exit path of a pass.
    async fn close(&mut self) -> SessionResult<()>;
}
