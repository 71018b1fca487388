//! Deterministic layouts for working graphs.
//!
//! Places each qubit from its topology coordinates: chimera cells as
//! crosses (vertical shore in a column, horizontal shore in a row), pegasus
//! lanes offset by their within-lane position. Screen convention: y grows
//! downward.

use rustc_hash::FxHashMap;

use crate::graph::{CHIMERA_T, TopologyFamily, WorkingGraph};

/// Position of every working qubit, keyed by linear id.
pub fn layout(graph: &WorkingGraph) -> FxHashMap<u32, (f64, f64)> {
    let m = graph.size();
    graph
        .nodes()
        .map(|node| {
            let pos = match graph.family() {
                TopologyFamily::Chimera => chimera_pos(node, m),
                TopologyFamily::Pegasus => pegasus_pos(node, m),
            };
            (node, pos)
        })
        .collect()
}

/// Chimera linear id -> (row, col, shore, shore index).
fn chimera_coords(node: u32, m: u32) -> (u32, u32, u32, u32) {
    let t = CHIMERA_T;
    let k = node % t;
    let u = (node / t) % 2;
    let j = (node / (2 * t)) % m;
    let i = node / (2 * t * m);
    (i, j, u, k)
}

fn chimera_pos(node: u32, m: u32) -> (f64, f64) {
    let t = CHIMERA_T;
    let (i, j, u, k) = chimera_coords(node, m);
    let spread = |k: u32| (k + 1) as f64 / (t + 1) as f64;
    match u {
        // Vertical shore: one column per cell.
        0 => (j as f64 + 0.35, i as f64 + spread(k)),
        // Horizontal shore: one row per cell.
        _ => (j as f64 + spread(k), i as f64 + 0.65),
    }
}

/// Pegasus linear id -> (orientation, lane, offset, within-lane position).
fn pegasus_coords(node: u32, m: u32) -> (u32, u32, u32, u32) {
    let span = m - 1;
    let z = node % span;
    let k = (node / span) % 12;
    let w = (node / (12 * span)) % m;
    let u = node / (12 * span * m);
    (u, w, k, z)
}

fn pegasus_pos(node: u32, m: u32) -> (f64, f64) {
    let (u, w, k, z) = pegasus_coords(node, m);
    let lane = w as f64 + k as f64 / 12.0;
    let along = z as f64 + 0.5;
    match u {
        // Vertical lanes run down the lattice.
        0 => (lane, along),
        // Horizontal lanes run across it.
        _ => (along, lane),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{chimera_graph, chimera_lattice, pegasus_graph};

    #[test]
    fn chimera_coords_invert_the_linear_id() {
        let m = 3;
        // id(i, j, u, k) = ((i·m + j)·2 + u)·t + k
        let id = |i: u32, j: u32, u: u32, k: u32| ((i * m + j) * 2 + u) * CHIMERA_T + k;
        assert_eq!(chimera_coords(id(2, 1, 0, 3), m), (2, 1, 0, 3));
        assert_eq!(chimera_coords(id(0, 2, 1, 0), m), (0, 2, 1, 0));
    }

    #[test]
    fn layout_covers_every_working_qubit() {
        let (nodes, edges) = chimera_lattice(2);
        let graph = chimera_graph(2, &nodes, &edges).unwrap();
        let positions = layout(&graph);
        assert_eq!(positions.len(), graph.node_count());
        for node in graph.nodes() {
            let (x, y) = positions[&node];
            assert!((0.0..2.0).contains(&x), "x = {x}");
            assert!((0.0..2.0).contains(&y), "y = {y}");
        }
    }

    #[test]
    fn shores_of_one_cell_form_a_cross() {
        let (nodes, edges) = chimera_lattice(1);
        let graph = chimera_graph(1, &nodes, &edges).unwrap();
        let positions = layout(&graph);
        // Vertical shore qubits (0..4) share an x column.
        assert_eq!(positions[&0].0, positions[&3].0);
        // Horizontal shore qubits (4..8) share a y row.
        assert_eq!(positions[&4].1, positions[&7].1);
    }

    #[test]
    fn pegasus_layout_separates_orientations() {
        let m = 4;
        let vertical = 0u32; // u = 0, w = 0, k = 0, z = 0
        let horizontal = 12 * (m - 1) * m; // u = 1, w = 0, k = 0, z = 0
        let graph = pegasus_graph(m, &[vertical, horizontal], &[]).unwrap();
        let positions = layout(&graph);
        let (vx, vy) = positions[&vertical];
        let (hx, hy) = positions[&horizontal];
        assert_eq!((vx, vy), (hy, hx));
    }
}
