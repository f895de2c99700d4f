//! Entity graph model
//!
//! Typed directed multigraph of entities (vessels, companies, persons, ...)
//! linked by typed relationships, plus the node-link loader.

pub mod edge;
pub mod loader;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use loader::{from_node_link_str, from_node_link_value, load_node_link, LoadReport};
pub use node::Node;
pub use store::{EntityGraph, GraphError, GraphResult};
pub use types::{EdgeId, EdgeType, EntityId, EntityType, NodeId};
