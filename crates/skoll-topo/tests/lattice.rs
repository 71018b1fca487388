//! Lattice-level properties of working-graph construction.

use proptest::prelude::*;
use skoll_topo::{TopologyFamily, chimera_graph, chimera_lattice};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// A lattice with dead qubits removed still builds, loses exactly the
    /// removed qubits, and keeps every id inside the address range.
    #[test]
    fn chimera_survives_arbitrary_defects(
        m in 1u32..4,
        seed_nodes in proptest::collection::hash_set(0u32..128, 0..10),
    ) {
        let (nodes, edges) = chimera_lattice(m);
        let range = TopologyFamily::Chimera.address_range(m);
        let dead: Vec<u32> = seed_nodes.into_iter().map(|n| n % range).collect();

        let alive: Vec<u32> = nodes.into_iter().filter(|n| !dead.contains(n)).collect();
        let coupled: Vec<(u32, u32)> = edges
            .into_iter()
            .filter(|(a, b)| !dead.contains(a) && !dead.contains(b))
            .collect();

        let graph = chimera_graph(m, &alive, &coupled).unwrap();
        prop_assert_eq!(graph.node_count(), alive.len());
        prop_assert_eq!(graph.edge_count(), coupled.len());
        for node in dead {
            prop_assert!(!graph.contains(node));
        }
        for node in graph.nodes() {
            prop_assert!(node < range);
        }
    }

    /// Degrees of an ideal lattice never exceed the theoretical maximum
    /// (4 internal + 2 external couplers).
    #[test]
    fn chimera_degree_is_bounded(m in 1u32..5) {
        let (nodes, edges) = chimera_lattice(m);
        let graph = chimera_graph(m, &nodes, &edges).unwrap();
        for node in graph.nodes() {
            prop_assert!(graph.degree(node) <= 6);
        }
    }
}
