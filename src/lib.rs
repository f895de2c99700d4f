//! Sentinel
//!
//! Anomaly scoring over typed, directed relationship graphs. Entities
//! (vessels, companies, persons, political organizations, ...) are scored
//! by their structural and embedding-space association with a small set of
//! known-illicit seed entities, for investigative triage.
//!
//! # Features per node
//!
//! - Rv: vessel ratio of the node's weakly connected component, against the
//!   node-level mean r̂
//! - F12: family relationship edges leaving the 2-hop neighborhood
//! - P12: political organizations in the 2-hop neighborhood
//! - C: simple directed cycles of bounded length through the node that touch
//!   a seed entity
//! - distances to two reference entities in a precomputed 2-D embedding
//!
//! Raw scores are min-max normalized to [0, 100] over the whole batch.
//!
//! ## Example Usage
//!
//! ```rust
//! use sentinel::{AnomalyEngine, EmbeddingMap, EntityGraph, ScoringConfig};
//!
//! let mut graph = EntityGraph::new();
//! let vessel = graph.add_node(979893388i64, "vessel").unwrap();
//! let carrier = graph.add_node("Oceanfront Oasis Inc Carriers", "company").unwrap();
//! graph.add_edge(carrier, vessel, "ownership").unwrap();
//!
//! let embeddings = EmbeddingMap::from_json_str(
//!     r#"{"979893388": [0.0, 0.0], "Oceanfront Oasis Inc Carriers": [3.0, 4.0]}"#,
//! ).unwrap();
//!
//! let report = AnomalyEngine::new(&graph, &embeddings, ScoringConfig::default())
//!     .run()
//!     .unwrap();
//! assert_eq!(report.records.len(), 2);
//! assert_eq!(report.records[0].norm_score, 100.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod features;
pub mod graph;
pub mod scoring;

// Re-export main types for convenience
pub use graph::{
    from_node_link_str, load_node_link, Edge, EdgeId, EdgeType, EntityGraph, EntityId,
    EntityType, GraphError, GraphResult, LoadReport, Node, NodeId,
};

pub use config::{DegeneratePolicy, ScoringConfig};
pub use embedding::{EmbeddingDistanceOracle, EmbeddingError, EmbeddingMap, Reference};
pub use engine::{AnomalyEngine, ScoreReport};
pub use error::{ScoringError, ScoringResult};
pub use features::{CommunityRatios, FlaggedCycleCounter, IllegalEntitySet, NeighborhoodFeatures};
pub use scoring::{ExplainedRecord, FeatureVector, ResultExporter, ScoreRecord};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
