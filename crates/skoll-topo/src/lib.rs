//! Skoll Working-Graph Topologies
//!
//! Builds the working graph of an annealing QPU from the solver's published
//! hardware description: a topology family name, a shape, and the explicit
//! node and edge lists of the qubits that actually calibrated.
//!
//! # Supported families
//!
//! | Family | Linear address range | Cell structure |
//! |---------|---------------------|----------------|
//! | `chimera` | `8·m²` | m×m grid of K4,4 unit cells |
//! | `pegasus` | `24·m·(m−1)` | offset vertical/horizontal lanes |
//!
//! Any other family name is rejected: the enumeration is fixed.
//!
//! # Example
//!
//! ```
//! use skoll_topo::{HardwareDescription, TopologyFamily, working_graph};
//!
//! let raw = r#"{
//!     "properties": {"topology": {"type": "chimera", "shape": [2, 2, 4]}},
//!     "nodelist": [0, 4, 8, 12],
//!     "edgelist": [[0, 4], [8, 12]]
//! }"#;
//! let desc: HardwareDescription = serde_json::from_str(raw).unwrap();
//!
//! let graph = working_graph(&desc).unwrap();
//! assert_eq!(graph.family(), TopologyFamily::Chimera);
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 2);
//! ```

mod description;
mod error;
mod graph;
mod layout;

pub use description::{HardwareDescription, SolverProperties, TopologyDescription};
pub use error::{TopoError, TopoResult};
pub use graph::{TopologyFamily, WorkingGraph, chimera_graph, chimera_lattice, pegasus_graph, working_graph};
pub use layout::layout;
