//! The verification runner.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use skoll_nb::{Cell, Notebook, collect_errors};
use skoll_session::{Session, SessionFactory, TransientPolicy};

use crate::error::{RunError, RunResult};
use crate::report::Verification;

/// Default wall-clock limit for one execution pass.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(200);

/// Default bound on full execution passes.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Runs notebooks through an execution session, with a bounded blind retry
/// on the known-transient embedding failure.
pub struct Runner<F> {
    factory: F,
    timeout: Duration,
    max_attempts: u32,
    policy: TransientPolicy,
}

impl<F: SessionFactory> Runner<F> {
    /// Runner with default timeout, attempt bound, and transient policy.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            timeout: DEFAULT_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            policy: TransientPolicy::default(),
        }
    }

    /// Set the wall-clock limit applied to each whole execution pass.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of full execution passes.
    ///
    /// Clamped to at least 1: the document always runs once.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Replace the transient classification policy.
    pub fn with_policy(mut self, policy: TransientPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Execute the document once, attaching outputs to every code cell.
    ///
    /// Opens one fresh session anchored to the document's directory, runs
    /// every code cell in order without aborting on cell errors, and closes
    /// the session on every exit path. Exceeding the pass timeout yields
    /// [`RunError::Timeout`].
    pub async fn execute(&self, path: &Path) -> RunResult<Notebook> {
        let document = path.display().to_string();
        let mut notebook = Notebook::from_path(path)?;
        let workdir = document_dir(path);

        info!(
            document = %document,
            session = self.factory.name(),
            cells = notebook.cells.len(),
            "executing notebook"
        );
        let mut session = self.factory.open(&workdir).await?;

        let outcome =
            tokio::time::timeout(self.timeout, run_all(&mut notebook, session.as_mut())).await;

        // Scoped teardown: the session dies with the pass, success or not.
        if let Err(close_err) = session.close().await {
            warn!(document = %document, error = %close_err, "session close failed");
        }

        match outcome {
            Err(_elapsed) => Err(RunError::Timeout {
                document,
                limit: self.timeout,
            }),
            Ok(pass) => {
                pass?;
                Ok(notebook)
            }
        }
    }

    /// Execute the document, retrying full fresh passes while the collected
    /// errors classify as known-transient, up to the attempt bound.
    ///
    /// Guarantees:
    /// - a clean first pass returns after exactly 1 attempt;
    /// - any non-transient first error returns after the current attempt;
    /// - at most `max_attempts` passes ever run.
    pub async fn run_with_retry(&self, path: &Path) -> RunResult<Verification> {
        let mut attempts = 1;
        let mut notebook = self.execute(path).await?;
        let mut errors = collect_errors(&notebook);

        while self.policy.is_known_transient(&errors) && attempts < self.max_attempts {
            attempts += 1;
            warn!(
                document = %path.display(),
                attempt = attempts,
                max_attempts = self.max_attempts,
                "embedding search failed, re-running notebook"
            );
            notebook = self.execute(path).await?;
            errors = collect_errors(&notebook);
        }

        info!(
            document = %path.display(),
            attempts,
            errors = errors.len(),
            "verification finished"
        );
        Ok(Verification {
            notebook,
            errors,
            attempts,
        })
    }
}

/// Directory the document lives in; relative resources resolve against it.
fn document_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Run every code cell in order, replacing its outputs in place.
async fn run_all(notebook: &mut Notebook, session: &mut dyn Session) -> RunResult<()> {
    let mut counter = 0;
    for (index, cell) in notebook.cells.iter_mut().enumerate() {
        let Cell::Code {
            source,
            outputs,
            execution_count,
            ..
        } = cell
        else {
            continue;
        };

        counter += 1;
        debug!(cell = index, "running cell");
        // Replace, never accumulate: a retry is a fresh pass.
        outputs.clear();
        *outputs = session.run_cell(source.as_str()).await?;
        *execution_count = Some(counter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_dir_falls_back_to_cwd() {
        assert_eq!(document_dir(Path::new("bare.ipynb")), PathBuf::from("."));
        assert_eq!(
            document_dir(Path::new("tutorials/01.ipynb")),
            PathBuf::from("tutorials")
        );
    }

    #[test]
    fn max_attempts_is_clamped_to_one() {
        use skoll_adapter_script::{ScriptedFactory, ScriptedPass};
        let runner =
            Runner::new(ScriptedFactory::repeating(ScriptedPass::new())).with_max_attempts(0);
        assert_eq!(runner.max_attempts, 1);
    }
}
