//! `netroute table` command - Print the routing table of a node.

use std::io::Write;

use colored::Colorize;
use netroute_graph::{compute_paths, Network};

use super::name;
use crate::error::CliResult;

/// Execute the `table` command.
pub fn execute(network: &Network, from: &str, out: &mut dyn Write) -> CliResult<()> {
    let source = network.require_node(from)?;
    let paths = compute_paths(network, source)?;

    writeln!(
        out,
        "{}",
        format!("Routing table for {}", name(network, source))
            .bright_white()
            .underline()
    )?;

    let width = network
        .nodes()
        .map(|(_, label)| label.len())
        .max()
        .unwrap_or(0);

    for (node, label) in network.nodes() {
        let route = paths.path_to(node);
        if route.is_reachable() {
            writeln!(
                out,
                "  {:<width$}  {:>12}  {}",
                label,
                route.latency.to_string(),
                route.display(network).to_string().dimmed(),
                width = width
            )?;
        } else {
            writeln!(
                out,
                "  {:<width$}  {:>12}",
                label,
                "unreachable".red(),
                width = width
            )?;
        }
    }

    writeln!(
        out,
        "  {} {} of {} nodes reachable",
        "•".dimmed(),
        paths.reachable().count(),
        network.num_nodes()
    )?;
    Ok(())
}
