//! Skoll Scripted Session Adapter
//!
//! An in-process [`SessionFactory`] whose behavior is declared up front: a
//! sequence of [`ScriptedPass`]es, one per expected execution pass. The
//! factory replays pass N on the Nth `open` and keeps replaying the final
//! pass once the script runs out, so "fails forever" scenarios need only one
//! entry.
//!
//! This is the harness's local test backend: every retry-loop property can
//! be exercised without a real interpreter.
//!
//! # Example
//!
//! ```
//! use skoll_adapter_script::{ScriptedFactory, ScriptedPass};
//! use skoll_session::EMBEDDING_FAILURE;
//!
//! // Embedding fails once, then the notebook runs clean.
//! let factory = ScriptedFactory::new(vec![
//!     ScriptedPass::new().error_at(0, "ValueError", EMBEDDING_FAILURE),
//!     ScriptedPass::new().stdout_at(0, "-1.0\n"),
//! ]);
//! assert_eq!(factory.opened(), 0);
//! ```

mod scripted;

pub use scripted::{ScriptedFactory, ScriptedPass};
