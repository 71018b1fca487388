//! Error types for topology construction.

use thiserror::Error;

/// Errors that can occur while building a working graph.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TopoError {
    /// Topology family name outside the fixed enumeration.
    #[error("Unknown topology family: '{0}' (expected 'chimera' or 'pegasus')")]
    UnknownFamily(String),

    /// The hardware description carries no shape.
    #[error("Topology shape is empty")]
    EmptyShape,

    /// The family cannot be built at this size.
    #[error("Invalid {family} size: {size}")]
    InvalidSize {
        /// The requested family.
        family: &'static str,
        /// The offending size.
        size: u32,
    },

    /// A node id outside the family's linear address range.
    #[error("Node {node} outside the {family} address range 0..{range}")]
    NodeOutOfRange {
        /// The offending node id.
        node: u32,
        /// The requested family.
        family: &'static str,
        /// Exclusive upper bound of valid addresses.
        range: u32,
    },

    /// An edge referencing a node missing from the node list.
    #[error("Edge ({a}, {b}) references a node missing from the node list")]
    EdgeEndpointMissing {
        /// First endpoint.
        a: u32,
        /// Second endpoint.
        b: u32,
    },
}

/// Result type for topology operations.
pub type TopoResult<T> = Result<T, TopoError>;
