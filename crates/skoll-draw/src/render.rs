//! SVG rendering of graphs and subproblem overlays.

use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use std::fmt::Write;

use crate::color::reds;
use crate::error::{DrawError, DrawResult};
use crate::spring::spring_layout;

// Opacity pairs: (edges, nodes) of the full graph when drawn alone, when
// drawn under an overlay, and of the overlay itself.
const ALONE: (f64, f64) = (0.2, 0.9);
const DIMMED: (f64, f64) = (0.05, 0.1);
const OVERLAY: (f64, f64) = (0.4, 0.9);

/// Intensity floor of the node color scale.
const COLOR_FLOOR: f64 = 0.3;

const NODE_RADIUS: f64 = 5.0;
const MARGIN: f64 = 40.0;

/// A subproblem over the full graph's node ids.
#[derive(Debug, Clone, Default)]
pub struct Subgraph {
    /// Nodes of the subproblem.
    pub nodes: Vec<u32>,
    /// Edges of the subproblem.
    pub edges: Vec<(u32, u32)>,
}

impl Subgraph {
    /// Subproblem from explicit node and edge lists.
    pub fn new(nodes: Vec<u32>, edges: Vec<(u32, u32)>) -> Self {
        Self { nodes, edges }
    }
}

/// Rendering options.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Cap on side-by-side subgraph panels.
    pub max_subs: usize,
    /// Title each panel "Subproblem N".
    pub subtitles: bool,
    /// Figure width in user units.
    pub width: u32,
    /// Figure height in user units.
    pub height: u32,
    /// Seed for the fallback spring layout.
    pub layout_seed: u64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            max_subs: 3,
            subtitles: false,
            width: 1500,
            height: 500,
            layout_seed: 7,
        }
    }
}

/// Render `graph` as an SVG document.
///
/// Without subgraphs: one panel. With subgraphs: one panel per subgraph up
/// to `max_subs`, the full graph dimmed underneath and the panel's subgraph
/// overlaid at high opacity. Node colors scale with degree on the red scale
/// from a 30% floor to 100%.
pub fn plot(
    graph: &UnGraph<u32, ()>,
    subgraphs: &[Subgraph],
    positions: Option<&FxHashMap<u32, (f64, f64)>>,
    options: &PlotOptions,
) -> DrawResult<String> {
    if graph.node_count() == 0 {
        return Err(DrawError::EmptyGraph);
    }

    let nodes: Vec<u32> = graph.node_weights().copied().collect();
    let edges: Vec<(u32, u32)> = graph
        .edge_references()
        .map(|e| (graph[e.source()], graph[e.target()]))
        .collect();

    let degrees: FxHashMap<u32, usize> = graph
        .node_indices()
        .map(|idx| (graph[idx], graph.neighbors(idx).count()))
        .collect();

    for (i, sub) in subgraphs.iter().enumerate() {
        for &node in sub.nodes.iter().chain(sub.edges.iter().flat_map(|(a, b)| [a, b])) {
            if !degrees.contains_key(&node) {
                return Err(DrawError::UnknownNode { subgraph: i, node });
            }
        }
    }

    let computed;
    let positions = match positions {
        Some(given) => {
            for &node in &nodes {
                if !given.contains_key(&node) {
                    return Err(DrawError::MissingPosition(node));
                }
            }
            given
        }
        None => {
            computed = spring_layout(&nodes, &edges, options.layout_seed);
            &computed
        }
    };

    let panels = if subgraphs.is_empty() {
        1
    } else {
        options.max_subs.min(subgraphs.len()).max(1)
    };
    let (graph_alpha, sub_alpha) = if subgraphs.is_empty() {
        (ALONE, None)
    } else {
        (DIMMED, Some(OVERLAY))
    };

    let panel_width = f64::from(options.width) / panels as f64;
    let place = scaler(&nodes, positions, panel_width, f64::from(options.height));

    let colors: FxHashMap<u32, String> = node_colors(&nodes, &degrees);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = options.width,
        h = options.height,
    );

    for panel in 0..panels {
        let _ = writeln!(
            svg,
            r#"  <g class="panel" transform="translate({:.1},0)">"#,
            panel as f64 * panel_width
        );
        if options.subtitles && !subgraphs.is_empty() {
            let _ = writeln!(
                svg,
                r#"    <text x="{:.1}" y="24" text-anchor="middle" font-size="16">Subproblem {}</text>"#,
                panel_width / 2.0,
                panel + 1
            );
        }

        draw_edges(&mut svg, &edges, &place, graph_alpha.0);
        if let (Some(sub), Some((edge_alpha, _))) = (subgraphs.get(panel), sub_alpha) {
            draw_edges(&mut svg, &sub.edges, &place, edge_alpha);
        }

        draw_nodes(&mut svg, &nodes, &colors, &place, graph_alpha.1);
        if let (Some(sub), Some((_, node_alpha))) = (subgraphs.get(panel), sub_alpha) {
            draw_nodes(&mut svg, &sub.nodes, &colors, &place, node_alpha);
        }

        let _ = writeln!(svg, "  </g>");
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Degree-scaled node colors: intensity in [COLOR_FLOOR, 1.0].
fn node_colors(nodes: &[u32], degrees: &FxHashMap<u32, usize>) -> FxHashMap<u32, String> {
    let max_degree = degrees.values().copied().max().unwrap_or(0);
    nodes
        .iter()
        .map(|&node| {
            let t = if max_degree == 0 {
                COLOR_FLOOR
            } else {
                COLOR_FLOOR + (1.0 - COLOR_FLOOR) * degrees[&node] as f64 / max_degree as f64
            };
            (node, reds(t).to_hex())
        })
        .collect()
}

/// Map data-space positions into one panel's box, margins included.
fn scaler<'a>(
    nodes: &[u32],
    positions: &'a FxHashMap<u32, (f64, f64)>,
    panel_width: f64,
    height: f64,
) -> impl Fn(u32) -> (f64, f64) + 'a {
    let xs = nodes.iter().map(|n| positions[n].0);
    let ys = nodes.iter().map(|n| positions[n].1);
    let (min_x, max_x) = bounds(xs);
    let (min_y, max_y) = bounds(ys);

    let fit = move |v: f64, lo: f64, hi: f64, extent: f64| {
        if hi > lo {
            MARGIN + (v - lo) / (hi - lo) * (extent - 2.0 * MARGIN)
        } else {
            extent / 2.0
        }
    };

    move |node: u32| {
        let (x, y) = positions[&node];
        (
            fit(x, min_x, max_x, panel_width),
            fit(y, min_y, max_y, height),
        )
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn draw_edges(
    svg: &mut String,
    edges: &[(u32, u32)],
    place: &impl Fn(u32) -> (f64, f64),
    alpha: f64,
) {
    for &(a, b) in edges {
        let (x1, y1) = place(a);
        let (x2, y2) = place(b);
        let _ = writeln!(
            svg,
            r##"    <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="#999999" stroke-opacity="{alpha}"/>"##,
        );
    }
}

fn draw_nodes(
    svg: &mut String,
    nodes: &[u32],
    colors: &FxHashMap<u32, String>,
    place: &impl Fn(u32) -> (f64, f64),
    alpha: f64,
) {
    for &node in nodes {
        let (cx, cy) = place(node);
        let _ = writeln!(
            svg,
            r#"    <circle cx="{cx:.1}" cy="{cy:.1}" r="{NODE_RADIUS}" fill="{fill}" fill-opacity="{alpha}"/>"#,
            fill = colors[&node],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(leaves: u32) -> UnGraph<u32, ()> {
        let mut graph = UnGraph::default();
        let hub = graph.add_node(0);
        for leaf in 1..=leaves {
            let idx = graph.add_node(leaf);
            graph.add_edge(hub, idx, ());
        }
        graph
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn lone_graph_renders_one_panel_at_full_opacity() {
        let svg = plot(&star(4), &[], None, &PlotOptions::default()).unwrap();
        assert_eq!(count(&svg, r#"<g class="panel""#), 1);
        assert!(svg.contains(r#"stroke-opacity="0.2""#));
        assert!(svg.contains(r#"fill-opacity="0.9""#));
    }

    #[test]
    fn panels_are_capped_by_max_subs() {
        let sub = Subgraph::new(vec![0, 1], vec![(0, 1)]);
        let options = PlotOptions::default();

        let two = plot(&star(4), &[sub.clone(), sub.clone()], None, &options).unwrap();
        assert_eq!(count(&two, r#"<g class="panel""#), 2);

        let five = plot(&star(4), &vec![sub; 5], None, &options).unwrap();
        assert_eq!(count(&five, r#"<g class="panel""#), 3);
    }

    #[test]
    fn overlay_dims_the_full_graph() {
        let sub = Subgraph::new(vec![0, 1], vec![(0, 1)]);
        let svg = plot(&star(4), &[sub], None, &PlotOptions::default()).unwrap();
        assert!(svg.contains(r#"stroke-opacity="0.05""#));
        assert!(svg.contains(r#"fill-opacity="0.1""#));
        assert!(svg.contains(r#"stroke-opacity="0.4""#));
        assert!(svg.contains(r#"fill-opacity="0.9""#));
    }

    #[test]
    fn node_intensity_spans_floor_to_full() {
        // Hub degree 4 maps to 1.0; leaves (degree 1) map to 0.3 + 0.7/4.
        let svg = plot(&star(4), &[], None, &PlotOptions::default()).unwrap();
        assert!(svg.contains(&reds(1.0).to_hex()));
        assert!(svg.contains(&reds(0.3 + 0.7 * 0.25).to_hex()));
        assert!(!svg.contains(&reds(0.0).to_hex()));
    }

    #[test]
    fn subtitles_number_the_subproblems() {
        let sub = Subgraph::new(vec![0], vec![]);
        let options = PlotOptions {
            subtitles: true,
            ..PlotOptions::default()
        };
        let svg = plot(&star(2), &[sub.clone(), sub], None, &options).unwrap();
        assert!(svg.contains("Subproblem 1"));
        assert!(svg.contains("Subproblem 2"));
    }

    #[test]
    fn bad_inputs_are_rejected() {
        let empty = UnGraph::<u32, ()>::default();
        assert!(matches!(
            plot(&empty, &[], None, &PlotOptions::default()),
            Err(DrawError::EmptyGraph)
        ));

        let rogue = Subgraph::new(vec![99], vec![]);
        assert!(matches!(
            plot(&star(2), &[rogue], None, &PlotOptions::default()),
            Err(DrawError::UnknownNode { subgraph: 0, node: 99 })
        ));

        let sparse: FxHashMap<u32, (f64, f64)> = FxHashMap::from_iter([(0, (0.0, 0.0))]);
        assert!(matches!(
            plot(&star(2), &[], Some(&sparse), &PlotOptions::default()),
            Err(DrawError::MissingPosition(_))
        ));
    }
}
