//! Shortest-path routing over latency-weighted networks.
//!
//! This crate simulates how packets find the fastest route through a network
//! of routers. It includes:
//!
//! - **Network**: Named nodes joined by directed latency links
//! - **Dijkstra**: Single-source shortest paths with a latency-keyed frontier
//! - **Routes**: Path reconstruction with explicit "no path" reporting
//! - **Simulation**: Link failure and recovery between runs
//!
//! # Example
//!
//! ```
//! use netroute_graph::{compute_paths, Latency, NetworkBuilder};
//!
//! let mut net = NetworkBuilder::new()
//!     .link("Ottawa", "Kingston", 10.0)
//!     .link("Kingston", "Toronto", 10.0)
//!     .link("Ottawa", "Montreal", 5.0)
//!     .link("Montreal", "Toronto", 50.0)
//!     .build()
//!     .unwrap();
//! let ottawa = net.node_index("Ottawa").unwrap();
//! let kingston = net.node_index("Kingston").unwrap();
//! let toronto = net.node_index("Toronto").unwrap();
//!
//! let route = compute_paths(&net, ottawa).unwrap().path_to(toronto);
//! assert_eq!(route.latency, Latency::new(20.0));
//!
//! // Link failure: a fresh run sees only the new topology.
//! net.remove_edges(ottawa, kingston).unwrap();
//! let route = compute_paths(&net, ottawa).unwrap().path_to(toronto);
//! assert_eq!(route.latency, Latency::new(55.0));
//! ```

pub mod algorithms;
pub mod models;
pub mod simulation;

// Re-export main types
pub use algorithms::dijkstra::{
    compute_paths, compute_paths_into, compute_paths_into_with_config, compute_paths_with_config,
    DijkstraConfig,
};
pub use algorithms::path::{Route, RouteDisplay};
pub use algorithms::state::{NodeState, RunStats, ShortestPaths};
pub use models::network::{Edge, Network, NetworkBuilder};
pub use models::node::{Latency, NodeId};
pub use models::topology::{LinkSpec, TopologySpec};
pub use simulation::{cut_link, demo_network, reroute, LinkCut, Reroute};

/// Routing error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Link weight is negative, NaN or infinite.
    #[error("Invalid weight {weight} on link {from} -> {to}")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    /// Target was not reached from the source.
    #[error("No path to node {0}")]
    UnreachableTarget(NodeId),

    /// Invalid node ID.
    #[error("Invalid node ID: {0}")]
    InvalidNodeId(u64),

    /// Node name registered twice.
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    /// Node name not found.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Topology description could not be read or parsed.
    #[error("Topology error: {0}")]
    Topology(String),

    /// Algorithm error.
    #[error("Algorithm error: {0}")]
    AlgorithmError(String),
}

/// Result type for routing operations.
pub type Result<T> = std::result::Result<T, GraphError>;
