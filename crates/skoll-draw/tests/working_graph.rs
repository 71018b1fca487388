//! Rendering a real working graph with its topology layout.

use skoll_draw::{PlotOptions, Subgraph, plot};
use skoll_topo::{chimera_graph, chimera_lattice, layout};

#[test]
fn chimera_working_graph_renders_with_topology_positions() {
    let (nodes, edges) = chimera_lattice(2);
    let graph = chimera_graph(2, &nodes, &edges).unwrap();
    let positions = layout(&graph);

    // One unit cell as the highlighted subproblem.
    let cell: Vec<u32> = (0..8).collect();
    let cell_edges: Vec<(u32, u32)> = edges
        .iter()
        .copied()
        .filter(|&(a, b)| a < 8 && b < 8)
        .collect();
    let sub = Subgraph::new(cell, cell_edges);

    let svg = plot(
        graph.graph(),
        &[sub],
        Some(&positions),
        &PlotOptions::default(),
    )
    .unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    // 32 dimmed full-graph nodes plus 8 overlaid subgraph nodes.
    assert_eq!(svg.matches("<circle").count(), 40);
}
