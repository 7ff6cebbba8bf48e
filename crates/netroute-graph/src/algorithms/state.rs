//! Per-run routing state.
//!
//! [`ShortestPaths`] holds the scratch data one Dijkstra run writes: the
//! tentative latency and predecessor of every node, keyed by [`NodeId`].
//! It is kept apart from the [`Network`](crate::Network) so that topology
//! edits never see stale routing data, and a fresh state can be allocated
//! per run instead of resetting nodes by hand.

use crate::models::{Latency, NodeId};
use crate::{GraphError, Result};

/// Routing state for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeState {
    /// Shortest latency found so far from the source.
    pub min_distance: Latency,
    /// Predecessor on the best known path.
    pub previous: Option<NodeId>,
}

impl NodeState {
    /// Unreached node.
    pub const UNREACHED: NodeState = NodeState {
        min_distance: Latency::INFINITY,
        previous: None,
    };
}

impl Default for NodeState {
    fn default() -> Self {
        Self::UNREACHED
    }
}

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Nodes removed from the frontier with a final latency.
    pub settled: usize,
    /// Successful relaxations (tentative latency improved).
    pub relaxations: usize,
    /// Stale frontier entries skipped on extraction.
    pub stale_skips: usize,
}

/// Distances and predecessors produced by a shortest-path run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    pub(crate) nodes: Vec<NodeState>,
    pub(crate) source: Option<NodeId>,
    pub(crate) stats: RunStats,
}

impl ShortestPaths {
    /// Create a state with `num_nodes` unreached entries.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            nodes: vec![NodeState::UNREACHED; num_nodes],
            source: None,
            stats: RunStats::default(),
        }
    }

    /// Number of tracked nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no nodes are tracked.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Source of the last run, if any.
    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    /// Counters from the last run.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Number of nodes settled by the last run.
    pub fn settled_count(&self) -> usize {
        self.stats.settled
    }

    /// Number of successful relaxations in the last run.
    pub fn relaxations(&self) -> usize {
        self.stats.relaxations
    }

    /// Full state of a node.
    pub fn state(&self, node: NodeId) -> Option<&NodeState> {
        self.nodes.get(node.index())
    }

    /// Latency from the source ([`Latency::INFINITY`] if unreached or unknown).
    pub fn distance_to(&self, node: NodeId) -> Latency {
        self.state(node)
            .map_or(Latency::INFINITY, |s| s.min_distance)
    }

    /// Predecessor of a node on its shortest path.
    pub fn previous_of(&self, node: NodeId) -> Option<NodeId> {
        self.state(node).and_then(|s| s.previous)
    }

    /// Check if the last run reached `node`.
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance_to(node).is_reachable()
    }

    /// Iterate over `(node, latency)` for every reached node.
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, Latency)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, s)| s.min_distance.is_reachable())
            .map(|(i, s)| (NodeId::from(i), s.min_distance))
    }

    /// All latencies, indexed by node.
    pub fn distances(&self) -> Vec<Latency> {
        self.nodes.iter().map(|s| s.min_distance).collect()
    }

    /// Reset the given nodes to unreached.
    ///
    /// Callers reusing a state for another run must reset every node the
    /// previous run touched; the engine only initialises the source.
    pub fn reset_state(&mut self, nodes: &[NodeId]) -> Result<()> {
        if let Some(bad) = nodes.iter().find(|n| n.index() >= self.nodes.len()) {
            return Err(GraphError::InvalidNodeId(u64::from(bad.get())));
        }
        for node in nodes {
            self.nodes[node.index()] = NodeState::UNREACHED;
            if self.source == Some(*node) {
                self.source = None;
            }
        }
        self.stats = RunStats::default();
        Ok(())
    }

    /// Reset every node to unreached.
    pub fn reset_all(&mut self) {
        self.nodes.fill(NodeState::UNREACHED);
        self.source = None;
        self.stats = RunStats::default();
    }

    /// Grow to `num_nodes` entries, new ones unreached.
    pub(crate) fn ensure_len(&mut self, num_nodes: usize) {
        if self.nodes.len() < num_nodes {
            self.nodes.resize(num_nodes, NodeState::UNREACHED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_unreached() {
        let state = ShortestPaths::new(3);
        assert_eq!(state.len(), 3);
        assert_eq!(state.source(), None);
        for i in 0..3u32 {
            assert_eq!(state.distance_to(NodeId(i)), Latency::INFINITY);
            assert_eq!(state.previous_of(NodeId(i)), None);
            assert!(!state.is_reachable(NodeId(i)));
        }
        assert_eq!(state.reachable().count(), 0);
    }

    #[test]
    fn test_unknown_node_is_unreached() {
        let state = ShortestPaths::new(1);
        assert!(state.state(NodeId(5)).is_none());
        assert_eq!(state.distance_to(NodeId(5)), Latency::INFINITY);
    }

    #[test]
    fn test_reset_state() {
        let mut state = ShortestPaths::new(3);
        state.source = Some(NodeId(0));
        state.nodes[0].min_distance = Latency::ZERO;
        state.nodes[1] = NodeState {
            min_distance: Latency::new(4.0),
            previous: Some(NodeId(0)),
        };
        state.nodes[2] = NodeState {
            min_distance: Latency::new(6.0),
            previous: Some(NodeId(1)),
        };

        state.reset_state(&[NodeId(0), NodeId(1)]).unwrap();
        assert_eq!(state.source(), None);
        assert_eq!(state.state(NodeId(0)), Some(&NodeState::UNREACHED));
        assert_eq!(state.state(NodeId(1)), Some(&NodeState::UNREACHED));
        // Untouched by the reset.
        assert_eq!(state.distance_to(NodeId(2)), Latency::new(6.0));
    }

    #[test]
    fn test_reset_state_invalid_node() {
        let mut state = ShortestPaths::new(2);
        state.nodes[0].min_distance = Latency::ZERO;

        let result = state.reset_state(&[NodeId(0), NodeId(9)]);
        assert!(matches!(result, Err(GraphError::InvalidNodeId(9))));
        // Nothing was reset.
        assert_eq!(state.distance_to(NodeId(0)), Latency::ZERO);
    }

    #[test]
    fn test_reset_all() {
        let mut state = ShortestPaths::new(2);
        state.source = Some(NodeId(1));
        state.nodes[1].min_distance = Latency::ZERO;
        state.stats.settled = 1;

        state.reset_all();
        assert_eq!(state, ShortestPaths::new(2));
    }

    #[test]
    fn test_ensure_len() {
        let mut state = ShortestPaths::new(1);
        state.ensure_len(3);
        assert_eq!(state.len(), 3);
        state.ensure_len(2);
        assert_eq!(state.len(), 3);
    }
}
