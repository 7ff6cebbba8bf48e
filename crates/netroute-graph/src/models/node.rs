//! Node types for routing computations.
//!
//! This module provides strongly-typed wrappers for graph concepts:
//! - [`NodeId`]: Index of a node in a [`Network`](super::Network)
//! - [`Latency`]: Link weight and accumulated path cost

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Node identifier (index into the network's node registry).
///
/// Using a newtype prevents mixing up node IDs with other integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Index into per-node vectors.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id as u32)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Link latency or accumulated path cost.
///
/// Values are compared with [`f64::total_cmp`], so `Latency` is totally
/// ordered and can key a priority queue. Valid link weights are finite and
/// non-negative; [`Latency::INFINITY`] marks an unreached node.
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Latency(pub f64);

impl Latency {
    /// Infinity (unreachable).
    pub const INFINITY: Latency = Latency(f64::INFINITY);

    /// Zero latency (source node).
    pub const ZERO: Latency = Latency(0.0);

    /// Create a new latency.
    pub const fn new(ms: f64) -> Self {
        Latency(ms)
    }

    /// Get the inner value.
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Check if node is reachable.
    pub fn is_reachable(&self) -> bool {
        self.0.is_finite()
    }

    /// Check if this is usable as a link weight (finite and non-negative).
    pub fn is_valid_weight(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl From<f64> for Latency {
    fn from(ms: f64) -> Self {
        Latency(ms)
    }
}

impl From<u32> for Latency {
    fn from(ms: u32) -> Self {
        Latency(f64::from(ms))
    }
}

impl Add for Latency {
    type Output = Latency;

    fn add(self, rhs: Latency) -> Latency {
        Latency(self.0 + rhs.0)
    }
}

impl PartialEq for Latency {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Latency {}

impl PartialOrd for Latency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Latency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "{}ms", self.0)
        } else {
            f.write_str("unreachable")
        }
    }
}
