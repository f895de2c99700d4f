//! Graph algorithms module
//!
//! Algorithms are implemented in the `sentinel-graph-algorithms` crate.
//! This module provides the integration/adapter layer.

use crate::graph::{Edge, EntityGraph, Node};
use sentinel_graph_algorithms::{GraphView, NodeId as AlgoNodeId};
use std::collections::HashMap;

// Re-export algorithms
pub use sentinel_graph_algorithms::{
    component_fraction, count_flagged_cycles, weakly_connected_components, CycleCount,
    CycleSearchConfig, NeighborhoodIndex, WccResult,
};

/// Build a CSR GraphView of the whole graph.
///
/// Dense index `i` is the node with `NodeId(i)`, and each node's CSR slots
/// follow its outgoing edges in insertion order, so [`out_edge_mask`] lines
/// up with the view.
pub fn build_view(graph: &EntityGraph) -> GraphView {
    let node_count = graph.node_count();

    // 1. Build index mappings
    let index_to_node: Vec<AlgoNodeId> = graph.nodes().iter().map(|n| n.id.as_u64()).collect();
    let node_to_index: HashMap<AlgoNodeId, usize> = index_to_node
        .iter()
        .enumerate()
        .map(|(idx, &id)| (id, idx))
        .collect();

    // 2. Build adjacency lists (Intermediate step)
    let mut temp_outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut temp_incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];

    for node in graph.nodes() {
        let u_idx = node.id.index();
        for edge in graph.outgoing_edges(node.id) {
            let v_idx = edge.target.index();
            temp_outgoing[u_idx].push(v_idx);
            temp_incoming[v_idx].push(u_idx);
        }
    }

    // 3. Convert to CSR
    GraphView::from_adjacency_list(
        node_count,
        index_to_node,
        node_to_index,
        temp_outgoing,
        temp_incoming,
    )
}

/// Per-node mask in node order
pub fn node_mask(graph: &EntityGraph, predicate: impl Fn(&Node) -> bool) -> Vec<bool> {
    graph.nodes().iter().map(predicate).collect()
}

/// Per-edge mask aligned with the CSR slots of [`build_view`]
pub fn out_edge_mask(graph: &EntityGraph, predicate: impl Fn(&Edge) -> bool) -> Vec<bool> {
    graph
        .nodes()
        .iter()
        .flat_map(|node| graph.outgoing_edges(node.id))
        .map(predicate)
        .collect()
}
