//! Precomputed node embeddings and distance features
//!
//! The embedding map is produced upstream (structural embedding reduced to
//! 2-D) and consumed here as an opaque `{ "<id>": [x, y] }` document.

pub mod map;
pub mod oracle;

pub use map::EmbeddingMap;
pub use oracle::{euclidean, EmbeddingDistanceOracle, Reference};

use thiserror::Error;

/// Embedding errors
#[derive(Error, Debug, PartialEq)]
pub enum EmbeddingError {
    #[error("No embedding for entity {0}")]
    Missing(String),

    #[error("Dimension mismatch for {key}: expected {expected}, got {got}")]
    DimensionMismatch {
        key: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid coordinates for {key}: {reason}")]
    InvalidCoordinate { key: String, reason: String },

    #[error("Malformed embedding document: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type EmbeddingResult<T> = Result<T, EmbeddingError>;
