//! Adjacency-list network of named nodes joined by directed latency links.
//!
//! Nodes live in a dense registry indexed by [`NodeId`]; every node owns its
//! outgoing [`Edge`]s in insertion order. Edges reference their target by id,
//! so many edges may point at the same node and none of them own it.
//!
//! The network holds topology only. Per-run routing state (tentative latency
//! and predecessor) lives in [`ShortestPaths`](crate::ShortestPaths).

use std::collections::HashMap;

use tracing::debug;

use super::node::{Latency, NodeId};
use crate::{GraphError, Result};

/// A directed link from an implicit source node to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Node this link leads to.
    pub target: NodeId,
    /// Link cost (latency in milliseconds).
    pub weight: Latency,
}

impl Edge {
    /// Create a new edge.
    pub fn new(target: NodeId, weight: impl Into<Latency>) -> Self {
        Self {
            target,
            weight: weight.into(),
        }
    }
}

/// Directed, weighted network.
#[derive(Debug, Clone, Default)]
pub struct Network {
    labels: Vec<String>,
    adjacency: Vec<Vec<Edge>>,
    index: HashMap<String, NodeId>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a network with the given node names and no links.
    ///
    /// # Example
    ///
    /// ```
    /// use netroute_graph::Network;
    ///
    /// let mut net = Network::with_nodes(["A", "B"]).unwrap();
    /// let (a, b) = (net.node_index("A").unwrap(), net.node_index("B").unwrap());
    /// net.add_edge(a, b, 5.0).unwrap();
    /// assert_eq!(net.num_edges(), 1);
    /// ```
    pub fn with_nodes<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut network = Self::new();
        for name in names {
            network.add_node(name)?;
        }
        Ok(network)
    }

    /// Register a node and return its id.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }

        let id = NodeId::from(self.labels.len());
        self.index.insert(name.clone(), id);
        self.labels.push(name);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Look up a node by name.
    pub fn node_index(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Look up a node by name, failing with [`GraphError::UnknownNode`].
    pub fn require_node(&self, name: &str) -> Result<NodeId> {
        self.node_index(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// Name of a node, if it exists.
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node.index()).map(String::as_str)
    }

    /// Check whether `node` belongs to this network.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.labels.len()
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Number of links across all nodes.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Check if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(id, name)` pairs in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, name)| (NodeId::from(i), name.as_str()))
    }

    /// Iterate over every link as `(source, edge)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, edges)| edges.iter().map(move |e| (NodeId::from(i), e)))
    }

    /// Outgoing links of a node (empty for unknown ids).
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of outgoing links of a node.
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Check if at least one link from `source` to `target` exists.
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.neighbors(source).iter().any(|e| e.target == target)
    }

    /// Append a directed link `source -> target`.
    ///
    /// Fails with [`GraphError::InvalidWeight`] for negative, NaN or infinite
    /// weights, leaving the adjacency untouched. `target`'s own links are not
    /// affected.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: impl Into<Latency>,
    ) -> Result<()> {
        let edge = Edge::new(target, weight);
        self.check_edge(source, &edge)?;
        self.adjacency[source.index()].push(edge);
        Ok(())
    }

    /// Remove every outgoing link of `node`.
    pub fn clear_edges(&mut self, node: NodeId) -> Result<()> {
        self.check_node(node)?;
        let removed = std::mem::take(&mut self.adjacency[node.index()]);
        debug!(node = %node, removed = removed.len(), "cleared adjacency");
        Ok(())
    }

    /// Replace the adjacency of `node` wholesale.
    ///
    /// All edges are validated before anything is replaced.
    pub fn replace_edges(&mut self, node: NodeId, edges: Vec<Edge>) -> Result<()> {
        self.check_node(node)?;
        for edge in &edges {
            self.check_edge(node, edge)?;
        }
        debug!(node = %node, edges = edges.len(), "replaced adjacency");
        self.adjacency[node.index()] = edges;
        Ok(())
    }

    /// Remove every `source -> target` link, returning how many were removed.
    pub fn remove_edges(&mut self, source: NodeId, target: NodeId) -> Result<usize> {
        self.check_node(source)?;
        self.check_node(target)?;
        let edges = &mut self.adjacency[source.index()];
        let before = edges.len();
        edges.retain(|e| e.target != target);
        Ok(before - edges.len())
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::InvalidNodeId(u64::from(node.get())))
        }
    }

    fn check_edge(&self, source: NodeId, edge: &Edge) -> Result<()> {
        self.check_node(source)?;
        self.check_node(edge.target)?;
        if !edge.weight.is_valid_weight() {
            return Err(GraphError::InvalidWeight {
                from: source,
                to: edge.target,
                weight: edge.weight.get(),
            });
        }
        Ok(())
    }
}

/// Builder for networks given by name.
///
/// Links may reference nodes that have not been declared yet; they are
/// registered on first use, in order of appearance.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<String>,
    links: Vec<(String, String, f64)>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node.
    pub fn node(mut self, name: impl Into<String>) -> Self {
        self.nodes.push(name.into());
        self
    }

    /// Add a directed link.
    pub fn link(mut self, from: impl Into<String>, to: impl Into<String>, latency: f64) -> Self {
        self.links.push((from.into(), to.into(), latency));
        self
    }

    /// Add a link in both directions.
    pub fn duplex(self, a: impl Into<String>, b: impl Into<String>, latency: f64) -> Self {
        let (a, b) = (a.into(), b.into());
        self.link(a.clone(), b.clone(), latency).link(b, a, latency)
    }

    /// Build the network.
    pub fn build(self) -> Result<Network> {
        let mut network = Network::with_nodes(self.nodes)?;
        for (from, to, latency) in self.links {
            let source = intern(&mut network, from)?;
            let target = intern(&mut network, to)?;
            network.add_edge(source, target, latency)?;
        }
        Ok(network)
    }
}

fn intern(network: &mut Network, name: String) -> Result<NodeId> {
    match network.node_index(&name) {
        Some(id) => Ok(id),
        None => network.add_node(name),
    }
}
