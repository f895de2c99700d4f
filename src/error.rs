//! Engine error types

use crate::embedding::EmbeddingError;
use crate::graph::{EntityId, GraphError};
use thiserror::Error;

/// Errors that abort a scoring run
#[derive(Error, Debug)]
pub enum ScoringError {
    /// Graph document could not be loaded or an entity lookup failed
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Embedding map could not be loaded or lacks an entry
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// A distance reference entity is not part of the graph
    #[error("Reference entity {0} is not in the graph")]
    UnreachableReference(EntityId),

    /// A raw score overflowed, typically from extreme embedding coordinates
    #[error("Raw score of entity {0} is not finite")]
    NonFiniteScore(EntityId),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type ScoringResult<T> = Result<T, ScoringError>;
