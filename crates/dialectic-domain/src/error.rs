//! Error types for graph operations

use crate::ArgumentId;
use thiserror::Error;

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An operation referenced an argument id that is not in the graph
    #[error("Unknown argument: {0}")]
    UnknownArgument(ArgumentId),

    /// A base score was outside [0, 1] or not a number
    #[error("Invalid base score {score} for argument {id}: must be in [0, 1]")]
    InvalidScore {
        /// Argument the score was supplied for
        id: ArgumentId,
        /// The rejected value
        score: f64,
    },

    /// A relation label other than `support` or `attack`
    #[error("Unknown relation kind: {0:?}")]
    UnknownRelationKind(String),

    /// Snapshot (de)serialization failed
    #[error("Snapshot serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::Serialization(e.to_string())
    }
}
