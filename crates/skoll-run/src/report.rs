//! Verification report.

use skoll_nb::{CellError, NbResult, Notebook, TextCheck, assert_contains};

/// Outcome of [`Runner::run_with_retry`](crate::Runner::run_with_retry):
/// the final executed document, its unrecovered errors, and how many full
/// passes it took.
#[derive(Debug)]
pub struct Verification {
    /// The document after its final execution pass, outputs attached.
    pub notebook: Notebook,
    /// Errors collected from the final pass, in document order.
    pub errors: Vec<CellError>,
    /// Number of full execution passes performed (at least 1).
    pub attempts: u32,
}

impl Verification {
    /// True when the final pass produced no cell errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check the first output text of cell `index` against `check`.
    pub fn assert_contains(&self, index: usize, check: &TextCheck) -> NbResult<()> {
        assert_contains(&self.notebook, index, check)
    }
}
