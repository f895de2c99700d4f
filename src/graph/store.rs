//! In-memory entity graph storage
//!
//! A typed, directed multigraph held in arenas indexed by dense ids.
//! Node order is insertion order and is the iteration order used everywhere
//! downstream, including the exported score records.

use super::edge::Edge;
use super::node::Node;
use super::types::{EdgeId, EdgeType, EntityId, EntityType, NodeId};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("Entity {0} already exists")]
    EntityAlreadyExists(EntityId),

    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),

    #[error("Malformed graph document: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory entity graph
///
/// - nodes: NodeId -> Node (arena, dense)
/// - edges: EdgeId -> Edge (arena, dense)
/// - outgoing / incoming: NodeId -> Vec<EdgeId> (adjacency lists)
/// - entity_index: EntityId -> NodeId
#[derive(Debug, Default)]
pub struct EntityGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
    entity_index: FxHashMap<EntityId, NodeId>,
}

impl EntityGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declared entity
    pub fn add_node(
        &mut self,
        entity: impl Into<EntityId>,
        entity_type: impl Into<EntityType>,
    ) -> GraphResult<NodeId> {
        let entity = entity.into();
        if self.entity_index.contains_key(&entity) {
            return Err(GraphError::EntityAlreadyExists(entity));
        }
        let id = self.next_node_id();
        Ok(self.insert_node(Node::new(id, entity, entity_type)))
    }

    /// Look up an entity, creating an implicit `unknown` node if it is missing.
    ///
    /// Returns the node and whether it was created.
    pub fn ensure_node(&mut self, entity: EntityId) -> (NodeId, bool) {
        if let Some(&id) = self.entity_index.get(&entity) {
            return (id, false);
        }
        let id = self.next_node_id();
        (self.insert_node(Node::new_implicit(id, entity)), true)
    }

    fn next_node_id(&self) -> NodeId {
        NodeId::new(self.nodes.len() as u64)
    }

    fn insert_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.entity_index.insert(node.entity.clone(), id);
        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Add a directed edge with unit weight
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        edge_type: impl Into<EdgeType>,
    ) -> GraphResult<EdgeId> {
        self.add_weighted_edge(source, target, edge_type, 1.0)
    }

    /// Add a directed edge. Parallel edges are allowed.
    pub fn add_weighted_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        edge_type: impl Into<EdgeType>,
        weight: f64,
    ) -> GraphResult<EdgeId> {
        if !self.has_node(source) {
            return Err(GraphError::InvalidEdgeSource(source));
        }
        if !self.has_node(target) {
            return Err(GraphError::InvalidEdgeTarget(target));
        }

        let id = EdgeId::new(self.edges.len() as u64);
        self.edges
            .push(Edge::new_weighted(id, source, target, edge_type, weight));
        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);
        Ok(id)
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Resolve an external identifier
    pub fn node_id(&self, entity: &EntityId) -> Option<NodeId> {
        self.entity_index.get(entity).copied()
    }

    /// Resolve an external identifier or fail with `EntityNotFound`
    pub fn require(&self, entity: &EntityId) -> GraphResult<NodeId> {
        self.node_id(entity)
            .ok_or_else(|| GraphError::EntityNotFound(entity.clone()))
    }

    pub fn contains_entity(&self, entity: &EntityId) -> bool {
        self.entity_index.contains_key(entity)
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Replace the category of an existing node
    pub fn set_entity_type(
        &mut self,
        id: NodeId,
        entity_type: impl Into<EntityType>,
    ) -> GraphResult<()> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(GraphError::NodeNotFound(id))?;
        node.entity_type = entity_type.into();
        Ok(())
    }

    /// Outgoing edges of a node, one entry per edge
    pub fn outgoing_edges(&self, id: NodeId) -> Vec<&Edge> {
        self.outgoing
            .get(id.index())
            .map(|ids| ids.iter().map(|e| &self.edges[e.index()]).collect())
            .unwrap_or_default()
    }

    /// Incoming edges of a node, one entry per edge
    pub fn incoming_edges(&self, id: NodeId) -> Vec<&Edge> {
        self.incoming
            .get(id.index())
            .map(|ids| ids.iter().map(|e| &self.edges[e.index()]).collect())
            .unwrap_or_default()
    }

    /// Distinct successor nodes in first-seen order
    pub fn successors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for edge in self.outgoing_edges(id) {
            if !out.contains(&edge.target) {
                out.push(edge.target);
            }
        }
        out
    }

    /// Distinct predecessor nodes in first-seen order
    pub fn predecessors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for edge in self.incoming_edges(id) {
            if !out.contains(&edge.source) {
                out.push(edge.source);
            }
        }
        out
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
