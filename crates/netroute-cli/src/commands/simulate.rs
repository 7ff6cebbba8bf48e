//! `netroute simulate` command - Route before and after a link failure.

use std::io::Write;

use colored::Colorize;
use netroute_graph::{reroute, Network};

use super::route::print_route;
use super::{name, parse_link};
use crate::error::CliResult;

/// Execute the `simulate` command.
pub fn execute(
    network: &mut Network,
    from: &str,
    to: &str,
    cut: &str,
    out: &mut dyn Write,
) -> CliResult<()> {
    let source = network.require_node(from)?;
    let target = network.require_node(to)?;
    let (a, b) = parse_link(network, cut)?;

    let result = reroute(network, source, target, (a, b))?;

    writeln!(
        out,
        "{}",
        "--- Normal network conditions ---".bright_white().underline()
    )?;
    print_route(network, &result.before, out)?;
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        format!(
            "--- Link failure ({} -> {} cut) ---",
            name(network, a),
            name(network, b)
        )
        .bright_white()
        .underline()
    )?;
    if result.cut.is_empty() {
        writeln!(out, "{} link did not exist", "Warning:".yellow())?;
    }
    print_route(network, &result.after, out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use netroute_graph::demo_network;

    #[test]
    fn test_simulate_demo_scenario() {
        colored::control::set_override(false);
        let mut net = demo_network().unwrap();
        let mut out = Vec::new();
        execute(&mut net, "Ottawa", "Toronto", "Ottawa:Kingston", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let (before, after) = text.split_once("Link failure").unwrap();
        assert!(before.contains("Ottawa -> Kingston -> Toronto"));
        assert!(after.contains("Ottawa -> Montreal -> Toronto"));
        assert!(after.contains("55ms"));
    }

    #[test]
    fn test_simulate_partition() {
        colored::control::set_override(false);
        let mut net = demo_network().unwrap();
        let mut out = Vec::new();
        execute(&mut net, "Kingston", "Toronto", "Kingston:Toronto", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("no path to Toronto"));
    }
}
