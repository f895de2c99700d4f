//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use std::collections::HashMap;
use std::ops::Range;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Parallel edges are kept: a multigraph with two `a -> b` edges has `b` twice
/// in the successor slice of `a`.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Positions of a node's outgoing edges inside `out_targets`.
    ///
    /// Callers use this to line up per-edge data they keep outside the view.
    pub fn out_range(&self, idx: usize) -> Range<usize> {
        self.out_offsets[idx]..self.out_offsets[idx + 1]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.out_targets[self.out_range(idx)]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Distinct neighbors of a node ignoring edge direction, sorted, without the node itself.
    pub fn undirected_neighbors(&self, idx: usize) -> Vec<usize> {
        let mut neighbors: Vec<usize> = self
            .successors(idx)
            .iter()
            .chain(self.predecessors(idx).iter())
            .copied()
            .filter(|&v| v != idx)
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// Copy of this view where each ordered pair keeps at most one edge.
    ///
    /// The first occurrence of a pair wins, so successor order is preserved.
    pub fn collapse_parallel_edges(&self) -> GraphView {
        let mut outgoing = Vec::with_capacity(self.node_count);
        let mut incoming = vec![Vec::new(); self.node_count];

        for u in 0..self.node_count {
            let mut targets: Vec<usize> = Vec::with_capacity(self.out_degree(u));
            for &v in self.successors(u) {
                if targets.contains(&v) {
                    continue;
                }
                targets.push(v);
                incoming[v].push(u);
            }
            outgoing.push(targets);
        }

        GraphView::from_adjacency_list(
            self.node_count,
            self.index_to_node.clone(),
            self.node_to_index.clone(),
            outgoing,
            incoming,
        )
    }

    /// Helper to create GraphView from adjacency lists (legacy/test support)
    pub fn from_adjacency_list(
        node_count: usize,
        index_to_node: Vec<NodeId>,
        node_to_index: HashMap<NodeId, usize>,
        outgoing: Vec<Vec<usize>>,
        incoming: Vec<Vec<usize>>,
    ) -> Self {
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();

        out_offsets.push(0);
        for neighbors in outgoing {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());
        }

        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        }
    }

    /// Build a view from an edge list over dense indices `0..node_count`.
    ///
    /// NodeIds are the indices themselves. Edge order is preserved per source.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut outgoing = vec![Vec::new(); node_count];
        let mut incoming = vec![Vec::new(); node_count];
        for &(u, v) in edges {
            outgoing[u].push(v);
            incoming[v].push(u);
        }
        let index_to_node: Vec<NodeId> = (0..node_count as NodeId).collect();
        let node_to_index = index_to_node.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        Self::from_adjacency_list(node_count, index_to_node, node_to_index, outgoing, incoming)
    }
}
