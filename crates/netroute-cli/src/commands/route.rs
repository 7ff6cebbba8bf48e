//! `netroute route` command - Compute the fastest route between two nodes.

use std::io::Write;

use colored::Colorize;
use netroute_graph::{compute_paths_with_config, cut_link, DijkstraConfig, Network, Route};
use tracing::info;

use super::{name, parse_link};
use crate::error::{CliError, CliResult};

/// Execute the `route` command.
pub fn execute(
    network: &mut Network,
    from: &str,
    to: &str,
    cuts: &[String],
    max_latency: Option<f64>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let source = network.require_node(from)?;
    let target = network.require_node(to)?;

    for cut in cuts {
        let (a, b) = parse_link(network, cut)?;
        let removed = cut_link(network, a, b)?;
        if removed.is_empty() {
            writeln!(
                out,
                "{} no link {} -> {} to cut",
                "Warning:".yellow(),
                name(network, a),
                name(network, b)
            )?;
        }
    }

    let mut config = DijkstraConfig::new().with_target(target);
    if let Some(max) = max_latency {
        if !max.is_finite() || max < 0.0 {
            return Err(CliError::InvalidLatency(max.to_string()));
        }
        config = config.with_max_latency(max);
    }

    info!("Routing {} -> {}", from, to);
    let route = compute_paths_with_config(network, source, &config)?.path_to(target);
    print_route(network, &route, out)
}

/// Print a route, or "no path" when it was not found.
pub fn print_route(network: &Network, route: &Route, out: &mut dyn Write) -> CliResult<()> {
    if route.is_reachable() {
        writeln!(
            out,
            "{} {}",
            "Route:".bright_white().bold(),
            route.display(network).to_string().bright_cyan()
        )?;
        writeln!(
            out,
            "  {} latency {} over {} hop(s)",
            "•".dimmed(),
            route.latency.to_string().bright_yellow(),
            route.hops()
        )?;
    } else {
        let target = route.target().map(|t| name(network, t)).unwrap_or_default();
        writeln!(
            out,
            "{} no path to {}",
            "Route:".bright_white().bold(),
            target.red()
        )?;
    }
    Ok(())
}
