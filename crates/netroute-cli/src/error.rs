//! Error types for the netroute CLI.

use netroute_graph::GraphError;
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// Routing or topology error from the library.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed link argument.
    #[error("Invalid link '{0}': expected FROM:TO")]
    InvalidLink(String),

    /// Invalid numeric argument.
    #[error("Invalid latency: {0}")]
    InvalidLatency(String),
}
