//! Network data models.
//!
//! This module provides the core data structures for representing networks:
//! - [`Network`]: Node registry with directed latency links
//! - [`NodeId`], [`Latency`]: Node and cost types
//! - [`TopologySpec`]: Serializable topology description

pub mod network;
pub mod node;
pub mod topology;

pub use network::{Edge, Network, NetworkBuilder};
pub use node::{Latency, NodeId};
pub use topology::{LinkSpec, TopologySpec};
