//! Skoll Python Session Adapter
//!
//! Drives a plain `python3` child process as the execution session. Cells go
//! down the child's stdin framed with a byte-length header; each reply comes
//! back as one JSON line whose outputs already use the nbformat shapes, so
//! they deserialize straight into [`skoll_nb::Output`] values.
//!
//! The child runs a small driver loop that executes every cell in one shared
//! namespace, captures stdout/stderr, reprs the final expression like a REPL,
//! and reports exceptions as tagged error outputs instead of dying. The
//! process is spawned with `kill_on_drop`, so a timed-out pass cannot leak
//! an interpreter.
//!
//! # Example
//!
//! ```ignore
//! use skoll_adapter_python::PythonSessionFactory;
//! use skoll_session::SessionFactory;
//! use std::path::Path;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let factory = PythonSessionFactory::new();
//! let mut session = factory.open(Path::new(".")).await?;
//! let outputs = session.run_cell("print(1 + 1)").await?;
//! assert_eq!(outputs[0].text().as_deref(), Some("2\n"));
//! session.close().await?;
//! # Ok(())
//! # }
//! ```

mod driver;
mod session;

pub use session::PythonSessionFactory;
