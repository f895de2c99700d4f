//! Core type definitions for the entity graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense identifier of a node inside one graph (0..node_count)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Dense identifier of an edge inside one graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

/// External identifier of an entity, as found in the source data.
///
/// Source datasets mix numeric registry numbers and names, so both are
/// accepted and compared by value. `Int(7)` and `Str("7")` are different
/// entities even though they share the same [`EntityId::key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl EntityId {
    /// Textual key used by keyed side inputs such as the embedding map
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Interpret a JSON scalar as an entity id.
    ///
    /// Integers that fit in `i64` become `Int`; other numbers keep their
    /// textual form. Non-scalar values are rejected.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => Some(match n.as_i64() {
                Some(i) => EntityId::Int(i),
                None => EntityId::Str(n.to_string()),
            }),
            serde_json::Value::String(s) => Some(EntityId::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(i) => write!(f, "{}", i),
            EntityId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Int(id)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Str(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId::Str(s)
    }
}

/// Entity category (e.g., "vessel", "company", "person")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EntityType(String);

impl EntityType {
    pub const VESSEL: &'static str = "vessel";
    pub const COMPANY: &'static str = "company";
    pub const PERSON: &'static str = "person";
    pub const POLITICAL_ORGANIZATION: &'static str = "political_organization";
    pub const LOCATION: &'static str = "location";
    pub const UNKNOWN: &'static str = "unknown";

    pub fn new(entity_type: impl Into<String>) -> Self {
        EntityType(entity_type.into())
    }

    /// Category given to nodes whose record carries no usable type
    pub fn unknown() -> Self {
        EntityType::new(Self::UNKNOWN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is(&self, category: &str) -> bool {
        self.0 == category
    }

    pub fn is_vessel(&self) -> bool {
        self.is(Self::VESSEL)
    }

    pub fn is_political_organization(&self) -> bool {
        self.is(Self::POLITICAL_ORGANIZATION)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityType {
    fn from(s: &str) -> Self {
        EntityType(s.to_string())
    }
}

impl From<String> for EntityType {
    fn from(s: String) -> Self {
        EntityType(s)
    }
}

/// Relationship type (e.g., "ownership", "family_relationship")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeType(String);

impl EdgeType {
    pub const FAMILY_RELATIONSHIP: &'static str = "family_relationship";
    pub const OWNERSHIP: &'static str = "ownership";
    pub const MEMBERSHIP: &'static str = "membership";
    pub const PARTNERSHIP: &'static str = "partnership";
    pub const UNKNOWN: &'static str = "unknown";

    pub fn new(edge_type: impl Into<String>) -> Self {
        EdgeType(edge_type.into())
    }

    pub fn unknown() -> Self {
        EdgeType::new(Self::UNKNOWN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is(&self, relationship: &str) -> bool {
        self.0 == relationship
    }

    pub fn is_family(&self) -> bool {
        self.is(Self::FAMILY_RELATIONSHIP)
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EdgeType {
    fn from(s: String) -> Self {
        EdgeType(s)
    }
}

impl From<&str> for EdgeType {
    fn from(s: &str) -> Self {
        EdgeType(s.to_string())
    }
}
