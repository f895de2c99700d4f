//! Node-link JSON loader
//!
//! Reads the `{"nodes": [...], "links": [...]}` document written by the
//! cleaning stage. Individual bad records are repaired or skipped and
//! counted in a [`LoadReport`]; only an unreadable document is an error.

use super::store::{EntityGraph, GraphError, GraphResult};
use super::types::{EdgeType, EntityId, EntityType};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// Repairs applied while loading
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Declared nodes that were kept
    pub nodes: usize,
    /// Edges that were kept
    pub edges: usize,
    /// Nodes without a usable `type`, loaded as `unknown`
    pub untyped_nodes: usize,
    /// Edges without a usable `type`, loaded as `unknown`
    pub untyped_edges: usize,
    /// Node records without a usable `id`
    pub skipped_nodes: usize,
    /// Repeated node declarations, merged into the first
    pub duplicate_nodes: usize,
    /// Edge records without `source` or `target`
    pub skipped_edges: usize,
    /// Endpoints never declared as nodes, created as `unknown`
    pub implicit_nodes: usize,
}

impl LoadReport {
    /// Any record needed repair
    pub fn has_repairs(&self) -> bool {
        self.untyped_nodes
            + self.untyped_edges
            + self.skipped_nodes
            + self.duplicate_nodes
            + self.skipped_edges
            + self.implicit_nodes
            > 0
    }
}

/// Load a node-link document from disk
pub fn load_node_link(path: impl AsRef<Path>) -> GraphResult<(EntityGraph, LoadReport)> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| GraphError::Io(format!("{}: {}", path.display(), e)))?;
    info!("Loading graph from {}", path.display());
    from_node_link_str(&text)
}

/// Parse a node-link document
pub fn from_node_link_str(text: &str) -> GraphResult<(EntityGraph, LoadReport)> {
    let doc: Value =
        serde_json::from_str(text).map_err(|e| GraphError::Malformed(e.to_string()))?;
    from_node_link_value(&doc)
}

/// Build a graph from an already parsed node-link document
pub fn from_node_link_value(doc: &Value) -> GraphResult<(EntityGraph, LoadReport)> {
    let obj = doc
        .as_object()
        .ok_or_else(|| GraphError::Malformed("document is not a JSON object".to_string()))?;
    let nodes = obj
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or_else(|| GraphError::Malformed("missing `nodes` array".to_string()))?;
    let links: &[Value] = match obj.get("links").or_else(|| obj.get("edges")) {
        Some(Value::Array(links)) => links.as_slice(),
        Some(_) => return Err(GraphError::Malformed("`links` is not an array".to_string())),
        None => &[],
    };

    let mut graph = EntityGraph::new();
    let mut report = LoadReport::default();

    for (pos, record) in nodes.iter().enumerate() {
        let Some(entity) = record.get("id").and_then(EntityId::from_json) else {
            warn!("Skipping node record #{}: no usable id", pos);
            report.skipped_nodes += 1;
            continue;
        };
        let entity_type = record
            .get("type")
            .and_then(Value::as_str)
            .map(EntityType::new);

        // A repeated declaration merges into the existing node; a later type wins
        if let Some(existing) = graph.node_id(&entity) {
            warn!("Node {} declared more than once, merging records", entity);
            report.duplicate_nodes += 1;
            if let Some(entity_type) = entity_type {
                graph.set_entity_type(existing, entity_type)?;
            }
            continue;
        }

        let entity_type = entity_type.unwrap_or_else(|| {
            debug!("Node {} has no type, using unknown", entity);
            report.untyped_nodes += 1;
            EntityType::unknown()
        });
        graph.add_node(entity, entity_type)?;
        report.nodes += 1;
    }

    for (pos, record) in links.iter().enumerate() {
        let source = record.get("source").and_then(EntityId::from_json);
        let target = record.get("target").and_then(EntityId::from_json);
        let (Some(source), Some(target)) = (source, target) else {
            warn!("Skipping edge record #{}: missing source or target", pos);
            report.skipped_edges += 1;
            continue;
        };

        let edge_type = match record.get("type").and_then(Value::as_str) {
            Some(t) => EdgeType::new(t),
            None => {
                report.untyped_edges += 1;
                EdgeType::unknown()
            }
        };
        let weight = record.get("weight").and_then(Value::as_f64).unwrap_or(1.0);

        let mut endpoint = |entity: EntityId| {
            let (id, created) = graph.ensure_node(entity.clone());
            if created {
                warn!("Edge endpoint {} was not declared, added as unknown", entity);
                report.implicit_nodes += 1;
            }
            id
        };
        let s = endpoint(source);
        let t = endpoint(target);

        graph.add_weighted_edge(s, t, edge_type, weight)?;
        report.edges += 1;
    }

    info!(
        "Graph loaded: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    if report.has_repairs() {
        warn!("Graph input needed repairs: {:?}", report);
    }

    Ok((graph, report))
}
