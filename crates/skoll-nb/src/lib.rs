//! Skoll Notebook Document Model
//!
//! This crate provides the data model the Skoll harness verifies: a notebook
//! document in the nbformat v4 interchange schema, read and written through
//! its published fields only.
//!
//! # Overview
//!
//! - [`Notebook`]: an ordered sequence of [`Cell`]s plus document metadata
//! - [`Output`]: a tagged execution result attached to a code cell
//!   (stream text, display data, execute result, or error)
//! - [`CellError`]: one error output located by its cell index
//! - [`collect_errors`]: document-order scan of all error outputs
//! - [`assert_contains`]: text assertion on the first output of one cell
//!
//! # Example
//!
//! ```
//! use skoll_nb::{collect_errors, Notebook};
//!
//! let raw = r#"{
//!     "cells": [
//!         {"cell_type": "code", "source": "1 + 1", "metadata": {},
//!          "execution_count": 1,
//!          "outputs": [{"output_type": "stream", "name": "stdout", "text": "2\n"}]}
//!     ],
//!     "metadata": {}, "nbformat": 4, "nbformat_minor": 5
//! }"#;
//!
//! let notebook: Notebook = raw.parse().unwrap();
//! assert_eq!(notebook.cells.len(), 1);
//! assert!(collect_errors(&notebook).is_empty());
//! ```

mod assertions;
mod error;
mod notebook;
mod output;

pub use assertions::{assert_contains, TextCheck};
pub use error::{NbError, NbResult};
pub use notebook::{Cell, CellError, Notebook, collect_errors, output_text};
pub use output::{MultilineText, Output, StreamName};
