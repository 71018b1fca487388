//! Skoll Notebook Verification Runner
//!
//! Executes a tutorial notebook end-to-end in one fresh interpreter session,
//! collects every cell-level runtime error, and retries the whole run a
//! bounded number of times when the only failure is the known-transient
//! embedding-search error.
//!
//! # Semantics
//!
//! - **Collect everything, fail at the end.** A cell error never aborts the
//!   pass; it is recorded as an output and execution continues.
//! - **Retries are full re-runs.** Each attempt re-parses the document and
//!   opens a fresh session; no state crosses attempt boundaries.
//! - **Timeout is fatal.** The wall-clock limit covers one whole pass and is
//!   never retried.
//!
//! # Example
//!
//! ```ignore
//! use skoll_adapter_python::PythonSessionFactory;
//! use skoll_run::Runner;
//! use std::path::Path;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let runner = Runner::new(PythonSessionFactory::new())
//!         .with_timeout(Duration::from_secs(200))
//!         .with_max_attempts(3);
//!
//!     let verification = runner
//!         .run_with_retry(Path::new("01-hybrid-computing-getting-started.ipynb"))
//!         .await?;
//!
//!     assert!(verification.is_clean(), "{:?}", verification.errors);
//!     Ok(())
//! }
//! ```

mod error;
mod report;
mod runner;

pub use error::{RunError, RunResult};
pub use report::Verification;
pub use runner::Runner;
