//! Dijkstra's single-source shortest-path algorithm.
//!
//! The frontier is a binary min-heap keyed explicitly by tentative latency.
//! A node whose latency improves is pushed again rather than re-positioned;
//! outdated entries are skipped on extraction (lazy deletion). A node is
//! settled the first time it is extracted with its current latency, and its
//! latency never changes after that because link weights are non-negative.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::state::{RunStats, ShortestPaths};
use crate::models::{Latency, Network, NodeId};
use crate::{GraphError, Result};

/// Dijkstra configuration.
#[derive(Debug, Clone)]
pub struct DijkstraConfig {
    /// Nodes farther than this are left unreached.
    pub max_latency: Latency,
    /// Stop as soon as this node is settled.
    pub target: Option<NodeId>,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        Self {
            max_latency: Latency::INFINITY,
            target: None,
        }
    }
}

impl DijkstraConfig {
    /// Create new Dijkstra configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exploration radius.
    pub fn with_max_latency(mut self, max: impl Into<Latency>) -> Self {
        self.max_latency = max.into();
        self
    }

    /// Stop once `target` is settled.
    ///
    /// Nodes settled before the target hold final latencies; anything still
    /// in the frontier keeps a tentative value.
    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }
}

/// Frontier entry ordered by latency, then node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    latency: Latency,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.latency
            .cmp(&other.latency)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute shortest paths from `source` into a fresh state.
///
/// # Example
///
/// ```
/// use netroute_graph::{compute_paths, Latency, NetworkBuilder};
///
/// let net = NetworkBuilder::new()
///     .link("A", "B", 5.0)
///     .link("B", "C", 1.0)
///     .build()
///     .unwrap();
/// let a = net.node_index("A").unwrap();
/// let c = net.node_index("C").unwrap();
///
/// let paths = compute_paths(&net, a).unwrap();
/// assert_eq!(paths.distance_to(c), Latency::new(6.0));
/// ```
pub fn compute_paths(network: &Network, source: NodeId) -> Result<ShortestPaths> {
    compute_paths_with_config(network, source, &DijkstraConfig::default())
}

/// Compute shortest paths from `source` into a fresh state, with configuration.
pub fn compute_paths_with_config(
    network: &Network,
    source: NodeId,
    config: &DijkstraConfig,
) -> Result<ShortestPaths> {
    let mut state = ShortestPaths::new(network.num_nodes());
    run(network, source, &mut state, config)?;
    Ok(state)
}

/// Compute shortest paths from `source` into a caller-owned state.
///
/// The state must be new or reset (see [`ShortestPaths::reset_state`]) for
/// every node reachable from `source`. Only the source and the nodes it
/// reaches are written; other entries keep whatever they held.
pub fn compute_paths_into(
    network: &Network,
    source: NodeId,
    state: &mut ShortestPaths,
) -> Result<()> {
    run(network, source, state, &DijkstraConfig::default())
}

/// Compute shortest paths into a caller-owned state, with configuration.
pub fn compute_paths_into_with_config(
    network: &Network,
    source: NodeId,
    state: &mut ShortestPaths,
    config: &DijkstraConfig,
) -> Result<()> {
    run(network, source, state, config)
}

fn run(
    network: &Network,
    source: NodeId,
    state: &mut ShortestPaths,
    config: &DijkstraConfig,
) -> Result<()> {
    if !network.contains(source) {
        return Err(GraphError::InvalidNodeId(u64::from(source.get())));
    }

    state.ensure_len(network.num_nodes());
    state.source = Some(source);
    state.stats = RunStats::default();

    let mut settled = vec![false; state.nodes.len()];
    let mut frontier = BinaryHeap::new();

    debug!(source = %source, nodes = network.num_nodes(), "computing shortest paths");

    state.nodes[source.index()].min_distance = Latency::ZERO;
    frontier.push(Reverse(FrontierEntry {
        latency: Latency::ZERO,
        node: source,
    }));

    while let Some(Reverse(FrontierEntry { latency, node: u })) = frontier.pop() {
        let ui = u.index();
        if settled[ui] || latency > state.nodes[ui].min_distance {
            state.stats.stale_skips += 1;
            continue;
        }
        settled[ui] = true;
        state.stats.settled += 1;

        if config.target == Some(u) {
            break;
        }

        for edge in network.neighbors(u) {
            let vi = edge.target.index();
            let candidate = latency + edge.weight;

            if candidate > config.max_latency {
                continue;
            }

            if candidate < state.nodes[vi].min_distance {
                trace!(from = %u, to = %edge.target, latency = candidate.get(), "relaxed");
                state.nodes[vi].min_distance = candidate;
                state.nodes[vi].previous = Some(u);
                state.stats.relaxations += 1;
                frontier.push(Reverse(FrontierEntry {
                    latency: candidate,
                    node: edge.target,
                }));
            }
        }
    }

    debug!(
        source = %source,
        settled = state.stats.settled,
        relaxations = state.stats.relaxations,
        stale = state.stats.stale_skips,
        "shortest paths computed"
    );

    Ok(())
}
