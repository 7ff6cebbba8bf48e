//! Route reconstruction from predecessor links.

use std::fmt;

use super::state::ShortestPaths;
use crate::models::{Latency, Network, NodeId};
use crate::{GraphError, Result};

/// An ordered route from a source to a target, both inclusive.
///
/// An unreached target yields the single-node route `[target]` with
/// [`Latency::INFINITY`]; use [`Route::is_reachable`] to tell it apart from
/// the genuine one-node route of a source to itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Nodes in travel order.
    pub nodes: Vec<NodeId>,
    /// Total latency of the route.
    pub latency: Latency,
}

impl Route {
    /// "No path found" result for `target`.
    pub fn unreachable(target: NodeId) -> Self {
        Self {
            nodes: vec![target],
            latency: Latency::INFINITY,
        }
    }

    /// Check whether this route was actually found.
    pub fn is_reachable(&self) -> bool {
        self.latency.is_reachable()
    }

    /// Number of links traversed (0 for a one-node route).
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// First node.
    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node.
    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Render with node names from `network`.
    pub fn display<'a>(&'a self, network: &'a Network) -> RouteDisplay<'a> {
        RouteDisplay {
            route: self,
            network,
        }
    }
}

/// Node names joined by `" -> "`.
pub struct RouteDisplay<'a> {
    route: &'a Route,
    network: &'a Network,
}

impl fmt::Display for RouteDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.route.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            match self.network.label(*node) {
                Some(name) => f.write_str(name)?,
                None => write!(f, "{}", node)?,
            }
        }
        Ok(())
    }
}

impl ShortestPaths {
    /// Route from the last run's source to `target`.
    ///
    /// Follows predecessors back from `target` and reverses the chain. When
    /// `target` was never reached the result is [`Route::unreachable`].
    pub fn path_to(&self, target: NodeId) -> Route {
        self.walk(target)
            .unwrap_or_else(|_| Route::unreachable(target))
    }

    /// Like [`path_to`](Self::path_to) but fails with
    /// [`GraphError::UnreachableTarget`] when there is no route.
    pub fn try_path_to(&self, target: NodeId) -> Result<Route> {
        if target.index() >= self.len() {
            return Err(GraphError::InvalidNodeId(u64::from(target.get())));
        }
        self.walk(target)
    }

    fn walk(&self, target: NodeId) -> Result<Route> {
        let latency = self.distance_to(target);
        if !latency.is_reachable() {
            return Err(GraphError::UnreachableTarget(target));
        }

        let mut nodes = vec![target];
        let mut current = target;
        while let Some(prev) = self.previous_of(current) {
            // A chain longer than the node count means the state was reused
            // without a reset and now contains a cycle.
            if nodes.len() > self.len() {
                return Err(GraphError::AlgorithmError(format!(
                    "predecessor chain from {} does not terminate",
                    target
                )));
            }
            nodes.push(prev);
            current = prev;
        }

        nodes.reverse();
        Ok(Route { nodes, latency })
    }
}
