//! Error types for solver operations

use dialectic_domain::GraphError;
use thiserror::Error;

/// Errors that can occur while configuring or running a solve
///
/// Failing to converge is not an error; see
/// [`SolveStatus`](crate::SolveStatus).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver parameters that cannot drive an integration
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),

    /// Configuration (de)serialization error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph layer error
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}
