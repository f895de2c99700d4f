//! Directed, typed edge
//!
//! Multiple edges between the same ordered pair are separate edges.

use super::types::{EdgeId, EdgeType, NodeId};
use serde::{Deserialize, Serialize};

/// A directed edge in the entity graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Type of relationship (e.g., "ownership", "family_relationship")
    pub edge_type: EdgeType,

    /// Edge weight, 1.0 when the source record has none
    pub weight: f64,
}

impl Edge {
    /// Create a new directed edge with unit weight
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, edge_type: impl Into<EdgeType>) -> Self {
        Self::new_weighted(id, source, target, edge_type, 1.0)
    }

    /// Create a new directed edge with an explicit weight
    pub fn new_weighted(
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        edge_type: impl Into<EdgeType>,
        weight: f64,
    ) -> Self {
        Edge {
            id,
            source,
            target,
            edge_type: edge_type.into(),
            weight,
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}
