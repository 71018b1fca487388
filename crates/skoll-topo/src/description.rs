//! Solver hardware description.
//!
//! Mirrors the shape the annealing SDK publishes for a QPU solver: nested
//! topology properties plus the explicit node and edge lists of the
//! calibrated working graph. Unmodeled property fields pass through.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A QPU solver's hardware description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareDescription {
    /// Solver properties, including the topology block.
    pub properties: SolverProperties,
    /// Linear ids of the calibrated qubits.
    pub nodelist: Vec<u32>,
    /// Calibrated couplers as pairs of linear ids.
    pub edgelist: Vec<(u32, u32)>,
}

/// The `properties` block of a solver description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverProperties {
    /// Topology family and shape.
    pub topology: TopologyDescription,
    /// Remaining solver properties, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `topology` block of a solver description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyDescription {
    /// Family name, e.g. `"chimera"` or `"pegasus"`.
    #[serde(rename = "type")]
    pub family: String,
    /// Family-specific shape; the leading entry is the lattice size.
    pub shape: Vec<u32>,
}
