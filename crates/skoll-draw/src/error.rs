//! Error types for plotting.

use thiserror::Error;

/// Errors that can occur while rendering a plot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrawError {
    /// Nothing to draw.
    #[error("Cannot plot an empty graph")]
    EmptyGraph,

    /// A subgraph references a node the full graph does not contain.
    #[error("Subgraph {subgraph} references unknown node {node}")]
    UnknownNode {
        /// Index of the offending subgraph.
        subgraph: usize,
        /// The node id missing from the full graph.
        node: u32,
    },

    /// Supplied positions miss a node of the full graph.
    #[error("No position for node {0}")]
    MissingPosition(u32),
}

/// Result type for plotting operations.
pub type DrawResult<T> = Result<T, DrawError>;
