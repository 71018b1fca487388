//! Seeded Fruchterman–Reingold spring layout.
//!
//! Fallback for graphs with no precomputed positions. Seeded so the same
//! graph always renders the same way.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

const ITERATIONS: usize = 50;

/// Force-directed positions for `nodes` connected by `edges`.
pub fn spring_layout(
    nodes: &[u32],
    edges: &[(u32, u32)],
    seed: u64,
) -> FxHashMap<u32, (f64, f64)> {
    let n = nodes.len();
    if n == 0 {
        return FxHashMap::default();
    }
    if n == 1 {
        return FxHashMap::from_iter([(nodes[0], (0.5, 0.5))]);
    }

    let slot: FxHashMap<u32, usize> = nodes.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    let k = (1.0 / n as f64).sqrt();
    let mut temperature = 0.1;
    let cooling = temperature / (ITERATIONS + 1) as f64;

    for _ in 0..ITERATIONS {
        let mut disp = vec![(0.0f64, 0.0f64); n];

        // Repulsion between every pair.
        for a in 0..n {
            for b in (a + 1)..n {
                let dx = pos[a].0 - pos[b].0;
                let dy = pos[a].1 - pos[b].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[a].0 += fx;
                disp[a].1 += fy;
                disp[b].0 -= fx;
                disp[b].1 -= fy;
            }
        }

        // Attraction along edges.
        for &(u, v) in edges {
            let (Some(&a), Some(&b)) = (slot.get(&u), slot.get(&v)) else {
                continue;
            };
            let dx = pos[a].0 - pos[b].0;
            let dy = pos[a].1 - pos[b].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            let force = dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            disp[a].0 -= fx;
            disp[a].1 -= fy;
            disp[b].0 += fx;
            disp[b].1 += fy;
        }

        for (p, d) in pos.iter_mut().zip(&disp) {
            let len = (d.0 * d.0 + d.1 * d.1).sqrt().max(1e-9);
            let step = len.min(temperature);
            p.0 += d.0 / len * step;
            p.1 += d.1 / len * step;
        }
        temperature -= cooling;
    }

    nodes.iter().map(|&v| (v, pos[slot[&v]])).collect()
}
