//! Link failure and recovery on a live network.
//!
//! A cut removes every link between an ordered pair of nodes and remembers
//! them so the link can be restored later. [`reroute`] runs a route, cuts a
//! link, resets the routing state and runs the route again.

use tracing::info;

use crate::algorithms::{compute_paths_into, Route, ShortestPaths};
use crate::models::{Edge, Network, NetworkBuilder, NodeId};
use crate::{GraphError, Result};

/// Links removed by [`cut_link`].
#[derive(Debug, Clone, PartialEq)]
pub struct LinkCut {
    /// Node the removed links started from.
    pub source: NodeId,
    /// Removed links, in their original order.
    pub removed: Vec<Edge>,
}

impl LinkCut {
    /// Check if the cut removed anything.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    /// Put the removed links back at the end of the source's adjacency.
    pub fn restore(self, network: &mut Network) -> Result<()> {
        let mut edges = network.neighbors(self.source).to_vec();
        let restored = self.removed.len();
        edges.extend(self.removed);
        network.replace_edges(self.source, edges)?;
        info!(source = %self.source, restored, "link restored");
        Ok(())
    }
}

/// Remove every `from -> to` link.
pub fn cut_link(network: &mut Network, from: NodeId, to: NodeId) -> Result<LinkCut> {
    if !network.contains(to) {
        return Err(GraphError::InvalidNodeId(u64::from(to.get())));
    }
    let (removed, kept): (Vec<Edge>, Vec<Edge>) = network
        .neighbors(from)
        .iter()
        .copied()
        .partition(|e| e.target == to);
    network.replace_edges(from, kept)?;

    info!(from = %from, to = %to, removed = removed.len(), "link cut");
    Ok(LinkCut {
        source: from,
        removed,
    })
}

/// Routes before and after a link failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Reroute {
    /// Route with the full topology.
    pub before: Route,
    /// Route after the cut.
    pub after: Route,
    /// What the cut removed.
    pub cut: LinkCut,
}

/// Route `source -> target`, cut `cut.0 -> cut.1`, and route again.
///
/// One routing state is reused for both runs and reset in between. The
/// network is left with the link cut; call [`LinkCut::restore`] to undo it.
pub fn reroute(
    network: &mut Network,
    source: NodeId,
    target: NodeId,
    cut: (NodeId, NodeId),
) -> Result<Reroute> {
    let mut state = ShortestPaths::new(network.num_nodes());

    compute_paths_into(network, source, &mut state)?;
    let before = state.path_to(target);

    let cut = cut_link(network, cut.0, cut.1)?;

    let all: Vec<NodeId> = network.nodes().map(|(id, _)| id).collect();
    state.reset_state(&all)?;
    compute_paths_into(network, source, &mut state)?;
    let after = state.path_to(target);

    Ok(Reroute { before, after, cut })
}

/// Four-city demonstration network.
///
/// ```text
/// Ottawa --5--> Montreal --50--> Toronto
///   |                              ^
///   +---10--> Kingston ----10------+
/// ```
///
/// Ottawa to Toronto is 20ms through Kingston, or 55ms through Montreal once
/// the Ottawa-Kingston link is cut.
pub fn demo_network() -> Result<Network> {
    NetworkBuilder::new()
        .node("Ottawa")
        .node("Montreal")
        .node("Toronto")
        .node("Kingston")
        .link("Ottawa", "Montreal", 5.0)
        .link("Ottawa", "Kingston", 10.0)
        .link("Kingston", "Toronto", 10.0)
        .link("Montreal", "Toronto", 50.0)
        .build()
}
