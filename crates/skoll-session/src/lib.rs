//! Skoll Execution Session Abstraction
//!
//! A session is the interpreter a notebook's code cells run in. The runner
//! consumes sessions as black boxes through two traits:
//!
//! - [`SessionFactory`]: opens one fresh session per execution pass,
//!   anchored to the notebook's own directory so relative resource
//!   references inside the document resolve.
//! - [`Session`]: runs one cell's source at a time and returns its outputs.
//!
//! # Contract
//!
//! - A cell-level runtime error is NOT a [`SessionError`]. It comes back as
//!   an error [`Output`](skoll_nb::Output), and the pass continues with the
//!   next cell ("collect everything, fail at the end").
//! - [`SessionError`] is reserved for harness-level failures: the interpreter
//!   could not be spawned, a pipe broke, the reply was garbled, or the pass
//!   ran out of wall-clock time.
//! - One pass owns one session exclusively and closes it on every exit path.
//!
//! # Implementing a session
//!
//! ```ignore
//! use async_trait::async_trait;
//! use skoll_nb::Output;
//! use skoll_session::{Session, SessionFactory, SessionResult};
//! use std::path::Path;
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl SessionFactory for Echo {
//!     fn name(&self) -> &str { "echo" }
//!     async fn open(&self, _workdir: &Path) -> SessionResult<Box<dyn Session>> {
//!         Ok(Box::new(EchoSession))
//!     }
//! }
//!
//! struct EchoSession;
//!
//! #[async_trait]
//! impl Session for EchoSession {
//!     async fn run_cell(&mut self, source: &str) -> SessionResult<Vec<Output>> {
//!         Ok(vec![Output::stdout(source)])
//!     }
//!     async fn close(&mut self) -> SessionResult<()> { Ok(()) }
//! }
//! ```

mod error;
mod policy;
mod session;

pub use error::{SessionError, SessionResult};
pub use policy::{EMBEDDING_FAILURE, TransientPolicy};
pub use session::{Session, SessionFactory};
