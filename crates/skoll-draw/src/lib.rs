//! Skoll Plot Helper
//!
//! Renders a graph, optionally with subproblem subgraphs overlaid, as a
//! side-by-side SVG comparison: one panel per subgraph (capped), full-graph
//! edges and nodes at low opacity underneath, the panel's subgraph at high
//! opacity on top.
//!
//! Node fill intensity scales linearly on a sequential red color scale
//! between a fixed 30% floor and 100%, proportional to the node's degree
//! relative to the maximum degree in the full graph. Subgraph nodes reuse
//! the full-graph color of the same node, so the overlay only changes
//! opacity, never hue.
//!
//! Positions come from the caller (e.g. a topology layout); without them a
//! seeded spring layout keeps renders deterministic.
//!
//! # Example
//!
//! ```
//! use petgraph::graph::UnGraph;
//! use skoll_draw::{PlotOptions, Subgraph, plot};
//!
//! let mut graph = UnGraph::<u32, ()>::default();
//! let a = graph.add_node(0);
//! let b = graph.add_node(1);
//! let c = graph.add_node(2);
//! graph.add_edge(a, b, ());
//! graph.add_edge(b, c, ());
//!
//! let sub = Subgraph::new(vec![0, 1], vec![(0, 1)]);
//! let svg = plot(&graph, &[sub], None, &PlotOptions::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

mod color;
mod error;
mod render;
mod spring;

pub use color::{Rgb, reds};
pub use error::{DrawError, DrawResult};
pub use render::{PlotOptions, Subgraph, plot};
pub use spring::spring_layout;
