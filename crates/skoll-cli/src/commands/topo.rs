//! Topo command implementation.

use anyhow::{Context, Result};
use console::style;

use skoll_draw::{PlotOptions, plot};
use skoll_topo::{HardwareDescription, layout, working_graph};

/// Execute the topo command.
pub fn execute(solver: &str, svg: Option<&str>) -> Result<()> {
    let raw = std::fs::read_to_string(solver)
        .with_context(|| format!("failed to read solver description '{solver}'"))?;
    let desc: HardwareDescription =
        serde_json::from_str(&raw).with_context(|| format!("invalid solver description '{solver}'"))?;

    let graph = working_graph(&desc)?;
    println!(
        "{} {} working graph: size {}, {} qubits, {} couplers",
        style("→").cyan().bold(),
        style(graph.family().to_string()).yellow(),
        graph.size(),
        graph.node_count(),
        graph.edge_count()
    );

    if let Some(path) = svg {
        let positions = layout(&graph);
        let rendered = plot(graph.graph(), &[], Some(&positions), &PlotOptions::default())?;
        std::fs::write(path, rendered).with_context(|| format!("failed to write '{path}'"))?;
        println!("  Rendered to {}", style(path).green());
    }

    Ok(())
}
