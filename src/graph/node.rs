//! Entity node
//!
//! Nodes are immutable once the graph is loaded.

use super::types::{EntityId, EntityType, NodeId};
use serde::{Deserialize, Serialize};

/// A node in the entity graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Dense identifier inside this graph
    pub id: NodeId,

    /// Identifier from the source data
    pub entity: EntityId,

    /// Category of the entity
    pub entity_type: EntityType,

    /// Node was created because an edge referenced it, not declared
    pub implicit: bool,
}

impl Node {
    /// Create a declared node
    pub fn new(id: NodeId, entity: impl Into<EntityId>, entity_type: impl Into<EntityType>) -> Self {
        Node {
            id,
            entity: entity.into(),
            entity_type: entity_type.into(),
            implicit: false,
        }
    }

    /// Create a node for an edge endpoint that was never declared
    pub fn new_implicit(id: NodeId, entity: EntityId) -> Self {
        Node {
            id,
            entity,
            entity_type: EntityType::unknown(),
            implicit: true,
        }
    }

    /// Check the node's category
    pub fn is_type(&self, category: &str) -> bool {
        self.entity_type.is(category)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}
