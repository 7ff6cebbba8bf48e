//! Serializable topology descriptions.
//!
//! A [`TopologySpec`] names the nodes of a network and the links between
//! them. It is the on-disk format used by the CLI:
//!
//! ```toml
//! nodes = ["Ottawa", "Montreal"]
//!
//! [[links]]
//! from = "Ottawa"
//! to = "Montreal"
//! latency = 5.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::network::Network;
use crate::{GraphError, Result};

/// A single link in a topology description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSpec {
    /// Source node name.
    pub from: String,
    /// Target node name.
    pub to: String,
    /// Link latency in milliseconds.
    pub latency: f64,
    /// Also add the reverse link with the same latency.
    #[serde(default)]
    pub bidirectional: bool,
}

/// Network topology description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologySpec {
    /// Node names, in id order.
    #[serde(default)]
    pub nodes: Vec<String>,
    /// Directed links.
    #[serde(default)]
    pub links: Vec<LinkSpec>,
}

impl TopologySpec {
    /// Parse a topology from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| GraphError::Topology(e.to_string()))
    }

    /// Load a topology from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GraphError::Topology(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Render the topology as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GraphError::Topology(e.to_string()))
    }

    /// Describe an existing network.
    pub fn from_network(network: &Network) -> Self {
        let nodes = network.nodes().map(|(_, name)| name.to_string()).collect();
        let links = network
            .edges()
            .filter_map(|(source, edge)| {
                Some(LinkSpec {
                    from: network.label(source)?.to_string(),
                    to: network.label(edge.target)?.to_string(),
                    latency: edge.weight.get(),
                    bidirectional: false,
                })
            })
            .collect();
        Self { nodes, links }
    }
}

impl Network {
    /// Build a network from a topology description.
    ///
    /// Every link endpoint must be listed in `nodes`.
    pub fn from_spec(spec: &TopologySpec) -> Result<Self> {
        let mut network = Network::with_nodes(spec.nodes.iter().cloned())?;
        for link in &spec.links {
            let from = network.require_node(&link.from)?;
            let to = network.require_node(&link.to)?;
            network.add_edge(from, to, link.latency)?;
            if link.bidirectional {
                network.add_edge(to, from, link.latency)?;
            }
        }
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        nodes = ["A", "B", "C"]

        [[links]]
        from = "A"
        to = "B"
        latency = 5.0

        [[links]]
        from = "B"
        to = "C"
        latency = 2.5
        bidirectional = true
    "#;

    #[test]
    fn test_parse_toml() {
        let spec = TopologySpec::from_toml_str(SAMPLE).unwrap();
        assert_eq!(spec.nodes, vec!["A", "B", "C"]);
        assert_eq!(spec.links.len(), 2);
        assert!(!spec.links[0].bidirectional);
        assert!(spec.links[1].bidirectional);
    }

    #[test]
    fn test_network_from_spec() {
        let spec = TopologySpec::from_toml_str(SAMPLE).unwrap();
        let net = Network::from_spec(&spec).unwrap();

        let a = net.node_index("A").unwrap();
        let b = net.node_index("B").unwrap();
        let c = net.node_index("C").unwrap();
        assert_eq!(net.num_edges(), 3);
        assert!(net.has_edge(a, b));
        assert!(net.has_edge(b, c));
        assert!(net.has_edge(c, b));
    }

    #[test]
    fn test_unknown_link_endpoint() {
        let spec = TopologySpec {
            nodes: vec!["A".into()],
            links: vec![LinkSpec {
                from: "A".into(),
                to: "Z".into(),
                latency: 1.0,
                bidirectional: false,
            }],
        };
        assert!(matches!(
            Network::from_spec(&spec),
            Err(GraphError::UnknownNode(ref n)) if n == "Z"
        ));
    }

    #[test]
    fn test_negative_latency_in_spec() {
        let spec = TopologySpec::from_toml_str(
            r#"
            nodes = ["A", "B"]
            [[links]]
            from = "A"
            to = "B"
            latency = -3.0
            "#,
        )
        .unwrap();
        assert!(matches!(
            Network::from_spec(&spec),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let result = TopologySpec::from_toml_str("nodes = [1, 2");
        assert!(matches!(result, Err(GraphError::Topology(_))));
    }

    #[test]
    fn test_spec_from_network_reparses() {
        let spec = TopologySpec::from_toml_str(SAMPLE).unwrap();
        let net = Network::from_spec(&spec).unwrap();

        let text = TopologySpec::from_network(&net).to_toml_string().unwrap();
        let rebuilt = Network::from_spec(&TopologySpec::from_toml_str(&text).unwrap()).unwrap();
        assert_eq!(rebuilt.num_nodes(), net.num_nodes());
        assert_eq!(rebuilt.num_edges(), net.num_edges());
    }
}
