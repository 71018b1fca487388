//! Working-graph construction.

use petgraph::graph::{NodeIndex, UnGraph};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

use crate::description::HardwareDescription;
use crate::error::{TopoError, TopoResult};

/// Chimera unit-cell shore size. Every production chimera QPU uses K4,4
/// cells, and the lookup only receives `shape[0]`.
pub(crate) const CHIMERA_T: u32 = 4;

/// The fixed enumeration of supported topology families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopologyFamily {
    /// m×m grid of K4,4 unit cells.
    Chimera,
    /// Offset vertical/horizontal qubit lanes.
    Pegasus,
}

impl TopologyFamily {
    /// Exclusive upper bound of the family's linear address range at size `m`.
    ///
    /// Zero for sizes the family has no qubits at (pegasus below 2, any
    /// family at 0); the graph constructors reject those sizes outright.
    pub fn address_range(self, m: u32) -> u32 {
        match self {
            TopologyFamily::Chimera => 2 * CHIMERA_T * m * m,
            TopologyFamily::Pegasus => 24 * m * m.saturating_sub(1),
        }
    }

    fn label(self) -> &'static str {
        match self {
            TopologyFamily::Chimera => "chimera",
            TopologyFamily::Pegasus => "pegasus",
        }
    }
}

impl FromStr for TopologyFamily {
    type Err = TopoError;

    fn from_str(s: &str) -> TopoResult<Self> {
        match s {
            "chimera" => Ok(TopologyFamily::Chimera),
            "pegasus" => Ok(TopologyFamily::Pegasus),
            other => Err(TopoError::UnknownFamily(other.to_string())),
        }
    }
}

impl fmt::Display for TopologyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The working graph of a QPU: calibrated qubits and couplers over one of
/// the fixed topology families.
#[derive(Debug, Clone)]
pub struct WorkingGraph {
    family: TopologyFamily,
    size: u32,
    graph: UnGraph<u32, ()>,
    index: FxHashMap<u32, NodeIndex>,
}

impl WorkingGraph {
    /// Topology family of the graph.
    pub fn family(&self) -> TopologyFamily {
        self.family
    }

    /// Lattice size `m` the graph was built at.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of working qubits.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of working couplers.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if the qubit with this linear id is in the working graph.
    pub fn contains(&self, node: u32) -> bool {
        self.index.contains_key(&node)
    }

    /// Degree of a qubit; zero for qubits outside the graph.
    pub fn degree(&self, node: u32) -> usize {
        self.index
            .get(&node)
            .map_or(0, |&idx| self.graph.neighbors(idx).count())
    }

    /// Linear ids of the working qubits, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.graph.node_weights().copied()
    }

    /// Working couplers as pairs of linear ids.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (self.graph[a], self.graph[b]))
    }

    /// The underlying petgraph structure.
    pub fn graph(&self) -> &UnGraph<u32, ()> {
        &self.graph
    }
}

/// Select the topology constructor named by a hardware description and build
/// the working graph from its shape and explicit node/edge lists.
pub fn working_graph(desc: &HardwareDescription) -> TopoResult<WorkingGraph> {
    let family: TopologyFamily = desc.properties.topology.family.parse()?;
    let m = *desc
        .properties
        .topology
        .shape
        .first()
        .ok_or(TopoError::EmptyShape)?;

    match family {
        TopologyFamily::Chimera => chimera_graph(m, &desc.nodelist, &desc.edgelist),
        TopologyFamily::Pegasus => pegasus_graph(m, &desc.nodelist, &desc.edgelist),
    }
}

/// Chimera working graph at size `m` from explicit node and edge lists.
pub fn chimera_graph(m: u32, nodes: &[u32], edges: &[(u32, u32)]) -> TopoResult<WorkingGraph> {
    if m == 0 {
        return Err(TopoError::InvalidSize {
            family: "chimera",
            size: m,
        });
    }
    build(TopologyFamily::Chimera, m, nodes, edges)
}

/// Pegasus working graph at size `m` from explicit node and edge lists.
pub fn pegasus_graph(m: u32, nodes: &[u32], edges: &[(u32, u32)]) -> TopoResult<WorkingGraph> {
    if m < 2 {
        return Err(TopoError::InvalidSize {
            family: "pegasus",
            size: m,
        });
    }
    build(TopologyFamily::Pegasus, m, nodes, edges)
}

fn build(
    family: TopologyFamily,
    m: u32,
    nodes: &[u32],
    edges: &[(u32, u32)],
) -> TopoResult<WorkingGraph> {
    let range = family.address_range(m);
    let mut graph = UnGraph::default();
    let mut index = FxHashMap::default();

    for &node in nodes {
        if node >= range {
            return Err(TopoError::NodeOutOfRange {
                node,
                family: family.label(),
                range,
            });
        }
        index.entry(node).or_insert_with(|| graph.add_node(node));
    }

    for &(a, b) in edges {
        let (Some(&ia), Some(&ib)) = (index.get(&a), index.get(&b)) else {
            return Err(TopoError::EdgeEndpointMissing { a, b });
        };
        graph.add_edge(ia, ib, ());
    }

    Ok(WorkingGraph {
        family,
        size: m,
        graph,
        index,
    })
}

/// Full chimera lattice at size `m`: every qubit and coupler of an ideal
/// (defect-free) m×m chimera. Useful as the node/edge lists of a synthetic
/// solver in tests and demos.
pub fn chimera_lattice(m: u32) -> (Vec<u32>, Vec<(u32, u32)>) {
    let t = CHIMERA_T;
    let id = |i: u32, j: u32, u: u32, k: u32| ((i * m + j) * 2 + u) * t + k;

    let nodes: Vec<u32> = (0..2 * t * m * m).collect();
    let mut edges = Vec::new();

    for i in 0..m {
        for j in 0..m {
            // Internal couplers: K4,4 between the two shores of the cell.
            for k1 in 0..t {
                for k2 in 0..t {
                    edges.push((id(i, j, 0, k1), id(i, j, 1, k2)));
                }
            }
            // External couplers: vertical shore down, horizontal shore right.
            for k in 0..t {
                if i + 1 < m {
                    edges.push((id(i, j, 0, k), id(i + 1, j, 0, k)));
                }
                if j + 1 < m {
                    edges.push((id(i, j, 1, k), id(i, j + 1, 1, k)));
                }
            }
        }
    }

    (nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_parse_is_a_fixed_enumeration() {
        assert_eq!("chimera".parse::<TopologyFamily>().unwrap(), TopologyFamily::Chimera);
        assert_eq!("pegasus".parse::<TopologyFamily>().unwrap(), TopologyFamily::Pegasus);
        assert!(matches!(
            "zephyr".parse::<TopologyFamily>(),
            Err(TopoError::UnknownFamily(name)) if name == "zephyr"
        ));
    }

    #[test]
    fn chimera_lattice_counts_match_the_family() {
        // C_m has 8m² qubits, m²·16 internal and 2·m(m−1)·4 external couplers.
        for m in [1u32, 2, 3] {
            let (nodes, edges) = chimera_lattice(m);
            assert_eq!(nodes.len() as u32, 8 * m * m);
            assert_eq!(edges.len() as u32, 16 * m * m + 8 * m * (m - 1));
        }
    }

    #[test]
    fn chimera_graph_builds_from_explicit_lists() {
        let (nodes, edges) = chimera_lattice(2);
        let graph = chimera_graph(2, &nodes, &edges).unwrap();
        assert_eq!(graph.node_count(), 32);
        assert_eq!(graph.edge_count(), edges.len());
        // Interior vertical qubit: 4 internal + 1 external neighbor.
        assert_eq!(graph.degree(0), 5);
    }

    #[test]
    fn defects_are_just_missing_list_entries() {
        let (nodes, edges) = chimera_lattice(1);
        let dead = 3u32;
        let nodes: Vec<u32> = nodes.into_iter().filter(|&n| n != dead).collect();
        let edges: Vec<(u32, u32)> = edges
            .into_iter()
            .filter(|&(a, b)| a != dead && b != dead)
            .collect();

        let graph = chimera_graph(1, &nodes, &edges).unwrap();
        assert_eq!(graph.node_count(), 7);
        assert!(!graph.contains(dead));
        assert_eq!(graph.edge_count(), 12);
    }

    #[test]
    fn out_of_range_nodes_and_dangling_edges_are_rejected() {
        assert!(matches!(
            chimera_graph(1, &[99], &[]),
            Err(TopoError::NodeOutOfRange { node: 99, range: 8, .. })
        ));
        assert!(matches!(
            chimera_graph(1, &[0, 4], &[(0, 5)]),
            Err(TopoError::EdgeEndpointMissing { a: 0, b: 5 })
        ));
    }

    #[test]
    fn pegasus_sizes_and_range() {
        assert!(matches!(
            pegasus_graph(1, &[], &[]),
            Err(TopoError::InvalidSize { family: "pegasus", size: 1 })
        ));
        // P16 addresses span 24·16·15 = 5760.
        assert_eq!(TopologyFamily::Pegasus.address_range(16), 5760);
        // Degenerate sizes have no addresses at all.
        assert_eq!(TopologyFamily::Pegasus.address_range(0), 0);
        assert_eq!(TopologyFamily::Pegasus.address_range(1), 0);
        let graph = pegasus_graph(16, &[30, 31, 2940], &[(30, 31)]).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.degree(2940), 0);
    }

    #[test]
    fn lookup_selects_the_constructor_by_type_name() {
        let raw = r#"{
            "properties": {"topology": {"type": "chimera", "shape": [1, 1, 4]}},
            "nodelist": [0, 1, 4, 5],
            "edgelist": [[0, 4], [0, 5], [1, 4], [1, 5]]
        }"#;
        let desc: HardwareDescription = serde_json::from_str(raw).unwrap();
        let graph = working_graph(&desc).unwrap();
        assert_eq!(graph.family(), TopologyFamily::Chimera);
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.degree(0), 2);
    }

    #[test]
    fn lookup_rejects_unknown_families_and_empty_shapes() {
        let raw = r#"{
            "properties": {"topology": {"type": "zephyr", "shape": [6]}},
            "nodelist": [], "edgelist": []
        }"#;
        let desc: HardwareDescription = serde_json::from_str(raw).unwrap();
        assert!(matches!(working_graph(&desc), Err(TopoError::UnknownFamily(_))));

        let raw = r#"{
            "properties": {"topology": {"type": "chimera", "shape": []}},
            "nodelist": [], "edgelist": []
        }"#;
        let desc: HardwareDescription = serde_json::from_str(raw).unwrap();
        assert!(matches!(working_graph(&desc), Err(TopoError::EmptyShape)));
    }
}
