//! Text assertions over captured outputs.
//!
//! Each extraction rule lives behind a named check rather than inline
//! parsing, so individual smoke expectations stay independently testable.

use regex::Regex;

use crate::error::{NbError, NbResult};
use crate::notebook::{Notebook, output_text};

/// What a cell's first output text is expected to contain.
#[derive(Debug, Clone)]
pub enum TextCheck {
    /// Literal substring containment.
    Substring(String),
    /// Regular-expression match anywhere in the text.
    Pattern(Regex),
}

impl TextCheck {
    /// Literal substring check.
    pub fn substring(needle: impl Into<String>) -> Self {
        TextCheck::Substring(needle.into())
    }

    /// Compiled pattern check.
    pub fn pattern(re: &str) -> Result<Self, regex::Error> {
        Ok(TextCheck::Pattern(Regex::new(re)?))
    }

    fn holds(&self, text: &str) -> bool {
        match self {
            TextCheck::Substring(needle) => text.contains(needle),
            TextCheck::Pattern(re) => re.is_match(text),
        }
    }

    fn describe(&self) -> String {
        match self {
            TextCheck::Substring(needle) => format!("contain {needle:?}"),
            TextCheck::Pattern(re) => format!("match /{re}/"),
        }
    }
}

/// Assert that the first output of cell `index` satisfies `check`.
///
/// On failure the error names the cell index, the expectation, and the
/// actual captured text, so a failing smoke test reads without re-running.
pub fn assert_contains(notebook: &Notebook, index: usize, check: &TextCheck) -> NbResult<()> {
    let actual = output_text(notebook, index)?;
    if check.holds(&actual) {
        Ok(())
    } else {
        Err(NbError::AssertionFailed {
            index,
            expected: check.describe(),
            actual,
        })
    }
}
