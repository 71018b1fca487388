//! Transient-failure classification.
//!
//! Minor-embedding runs a randomized search inside the sampling library; on
//! an unlucky seed it gives up with one specific message. That failure is
//! worth a bounded blind retry. Nothing else is.

use skoll_nb::CellError;

/// The exact message the embedding search fails with.
pub const EMBEDDING_FAILURE: &str = "no embedding found";

/// Decides whether an execution pass's errors are worth a retry.
#[derive(Debug, Clone)]
pub struct TransientPolicy {
    message: String,
}

impl TransientPolicy {
    /// Policy matching a custom retryable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message this policy retries on.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True iff the list is non-empty and its FIRST error carries exactly
    /// the retryable message.
    ///
    /// Deliberately narrow: a non-transient first error, or an empty list,
    /// stops retrying immediately. Only the first error is inspected, so a
    /// transient error co-occurring with later errors still retries.
    pub fn is_known_transient(&self, errors: &[CellError]) -> bool {
        errors.first().is_some_and(|e| e.evalue == self.message)
    }
}

impl Default for TransientPolicy {
    fn default() -> Self {
        Self::new(EMBEDDING_FAILURE)
    }
}
