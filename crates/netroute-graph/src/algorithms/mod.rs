//! Routing algorithms.
//!
//! This module provides single-source shortest-path routing:
//! - [`dijkstra`]: Priority-ordered relaxation from a source node
//! - [`state`]: Per-run latencies and predecessors
//! - [`path`]: Route reconstruction from predecessors

pub mod dijkstra;
pub mod path;
pub mod state;

pub use dijkstra::{
    compute_paths, compute_paths_into, compute_paths_into_with_config, compute_paths_with_config,
    DijkstraConfig,
};
pub use path::{Route, RouteDisplay};
pub use state::{NodeState, RunStats, ShortestPaths};
