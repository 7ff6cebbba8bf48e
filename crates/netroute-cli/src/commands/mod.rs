//! CLI command implementations.

pub mod route;
pub mod simulate;
pub mod table;

use netroute_graph::{demo_network, Network, NodeId, TopologySpec};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Load the topology file, or the built-in demonstration network.
pub fn load_network(topology: Option<&str>) -> CliResult<Network> {
    let network = match topology {
        Some(path) => {
            debug!("Loading topology from {}", path);
            Network::from_spec(&TopologySpec::from_file(path)?)?
        }
        None => demo_network()?,
    };
    debug!(
        "Network has {} nodes and {} links",
        network.num_nodes(),
        network.num_edges()
    );
    Ok(network)
}

/// Parse a `FROM:TO` link argument into node ids.
pub fn parse_link(network: &Network, link: &str) -> CliResult<(NodeId, NodeId)> {
    let (from, to) = link
        .split_once(':')
        .map(|(a, b)| (a.trim(), b.trim()))
        .filter(|(a, b)| !a.is_empty() && !b.is_empty())
        .ok_or_else(|| CliError::InvalidLink(link.to_string()))?;
    Ok((network.require_node(from)?, network.require_node(to)?))
}

/// Display name of a node.
pub fn name(network: &Network, node: NodeId) -> String {
    network
        .label(node)
        .map_or_else(|| node.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netroute_graph::GraphError;

    #[test]
    fn test_parse_link() {
        let net = demo_network().unwrap();
        let (from, to) = parse_link(&net, "Ottawa:Kingston").unwrap();
        assert_eq!(net.label(from), Some("Ottawa"));
        assert_eq!(net.label(to), Some("Kingston"));

        let (from, _) = parse_link(&net, " Montreal : Toronto ").unwrap();
        assert_eq!(net.label(from), Some("Montreal"));
    }

    #[test]
    fn test_parse_link_errors() {
        let net = demo_network().unwrap();
        assert!(matches!(
            parse_link(&net, "Ottawa"),
            Err(CliError::InvalidLink(_))
        ));
        assert!(matches!(
            parse_link(&net, ":Toronto"),
            Err(CliError::InvalidLink(_))
        ));
        assert!(matches!(
            parse_link(&net, "Ottawa:Paris"),
            Err(CliError::Graph(GraphError::UnknownNode(_)))
        ));
    }

    #[test]
    fn test_load_demo_network() {
        let net = load_network(None).unwrap();
        assert_eq!(net.num_nodes(), 4);
    }

    #[test]
    fn test_load_topology_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("lab.toml");
        std::fs::write(
            &path,
            "nodes = [\"a\", \"b\"]\n\n[[links]]\nfrom = \"a\"\nto = \"b\"\nlatency = 2.0\n",
        )
        .unwrap();

        let net = load_network(path.to_str()).unwrap();
        assert_eq!(net.num_nodes(), 2);
        assert_eq!(net.num_edges(), 1);
    }

    #[test]
    fn test_load_missing_topology() {
        assert!(matches!(
            load_network(Some("/nonexistent/topology.toml")),
            Err(CliError::Graph(GraphError::Topology(_)))
        ));
    }
}
