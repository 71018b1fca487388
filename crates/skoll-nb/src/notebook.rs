//! Notebook document and cells.
//!
//! Invariants:
//! - Cell indices are positions in [`Notebook::cells`] and stay stable for
//!   the life of the document.
//! - A fresh execution pass replaces every code cell's outputs; outputs never
//!   accumulate across passes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use std::str::FromStr;

use crate::error::{NbError, NbResult};
use crate::output::{MultilineText, Output};

/// A notebook document: ordered cells plus pass-through metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    /// Ordered cells of the document.
    pub cells: Vec<Cell>,
    /// Document-level metadata, carried through untouched.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Major schema version.
    pub nbformat: u32,
    /// Minor schema version.
    pub nbformat_minor: u32,
}

/// One cell of a notebook, tagged by its role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// Executable code.
    Code {
        /// Cell source text.
        source: MultilineText,
        /// Cell metadata, carried through untouched.
        #[serde(default)]
        metadata: Map<String, Value>,
        /// Outputs attached by the most recent execution pass.
        #[serde(default)]
        outputs: Vec<Output>,
        /// Position in the session's execution counter, if executed.
        #[serde(default)]
        execution_count: Option<u64>,
        /// Unmodeled cell fields (`id`, `attachments`, ...), carried through.
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    /// Narrative text.
    Markdown {
        /// Cell source text.
        source: MultilineText,
        /// Cell metadata, carried through untouched.
        #[serde(default)]
        metadata: Map<String, Value>,
        /// Unmodeled cell fields (`id`, `attachments`, ...), carried through.
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    /// Unrendered content.
    Raw {
        /// Cell source text.
        source: MultilineText,
        /// Cell metadata, carried through untouched.
        #[serde(default)]
        metadata: Map<String, Value>,
        /// Unmodeled cell fields (`id`, `attachments`, ...), carried through.
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl Cell {
    /// Source text of the cell, regardless of role.
    pub fn source(&self) -> &str {
        match self {
            Cell::Code { source, .. } | Cell::Markdown { source, .. } | Cell::Raw { source, .. } => {
                source.as_str()
            }
        }
    }

    /// Outputs of the cell; empty for narrative cells.
    pub fn outputs(&self) -> &[Output] {
        match self {
            Cell::Code { outputs, .. } => outputs,
            _ => &[],
        }
    }
}

impl Notebook {
    /// Load a notebook from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> NbResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| NbError::Read {
            path: path.display().to_string(),
            source,
        })?;
        raw.parse()
    }

    /// Serialize the document back to its interchange form.
    pub fn to_json(&self) -> NbResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document (with captured outputs) to a file path.
    pub fn save(&self, path: impl AsRef<Path>) -> NbResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|source| NbError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    /// The cell at `index`, or an error naming the index.
    pub fn cell(&self, index: usize) -> NbResult<&Cell> {
        self.cells.get(index).ok_or(NbError::NoSuchCell {
            index,
            len: self.cells.len(),
        })
    }
}

impl FromStr for Notebook {
    type Err = NbError;

    fn from_str(raw: &str) -> NbResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// One error output, located by the cell that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellError {
    /// Index of the cell the error was attached to.
    pub cell: usize,
    /// Error kind (exception type name).
    pub ename: String,
    /// Human-readable message.
    pub evalue: String,
    /// Formatted traceback lines.
    pub traceback: Vec<String>,
}

impl std::fmt::Display for CellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell {}: {}: {}", self.cell, self.ename, self.evalue)
    }
}

/// Collect every error output across the document, in document order.
///
/// Pure scan; calling it twice on the same document yields identical lists.
pub fn collect_errors(notebook: &Notebook) -> Vec<CellError> {
    let mut errors = Vec::new();
    for (index, cell) in notebook.cells.iter().enumerate() {
        for output in cell.outputs() {
            if let Output::Error {
                ename,
                evalue,
                traceback,
            } = output
            {
                errors.push(CellError {
                    cell: index,
                    ename: ename.clone(),
                    evalue: evalue.clone(),
                    traceback: traceback.clone(),
                });
            }
        }
    }
    errors
}

/// Text of the FIRST output of the indicated cell.
///
/// This is the assertion surface: smoke tests check literal substrings and
/// patterns against exactly this text.
pub fn output_text(notebook: &Notebook, index: usize) -> NbResult<String> {
    let cell = notebook.cell(index)?;
    let first = cell
        .outputs()
        .first()
        .ok_or(NbError::NoOutputs { index })?;
    first.text().ok_or(NbError::NoText { index })
}
