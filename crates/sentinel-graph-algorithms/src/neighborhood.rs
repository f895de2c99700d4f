//! Undirected k-hop neighborhoods (k = 1, 2)

use super::common::GraphView;
use rayon::prelude::*;

/// Precomputed 1-hop undirected neighbor lists for every node.
///
/// Lists are sorted and deduplicated and never contain the node itself,
/// so self loops do not make a node its own neighbor.
#[derive(Debug, Clone)]
pub struct NeighborhoodIndex {
    one_hop: Vec<Vec<usize>>,
}

impl NeighborhoodIndex {
    /// Build the 1-hop lists for the whole view
    pub fn build(view: &GraphView) -> Self {
        let one_hop = (0..view.node_count)
            .into_par_iter()
            .map(|idx| view.undirected_neighbors(idx))
            .collect();
        Self { one_hop }
    }

    pub fn node_count(&self) -> usize {
        self.one_hop.len()
    }

    /// Direct neighbors of a node (either direction)
    pub fn one_hop(&self, idx: usize) -> &[usize] {
        &self.one_hop[idx]
    }

    /// Neighbors of neighbors, without the node itself.
    ///
    /// May overlap with `one_hop`.
    pub fn two_hop(&self, idx: usize) -> Vec<usize> {
        let mut reached: Vec<usize> = self.one_hop[idx]
            .iter()
            .flat_map(|&v| self.one_hop[v].iter().copied())
            .filter(|&w| w != idx)
            .collect();
        reached.sort_unstable();
        reached.dedup();
        reached
    }

    /// Union of the 1-hop and 2-hop sets, sorted
    pub fn within_two_hops(&self, idx: usize) -> Vec<usize> {
        let mut all = self.two_hop(idx);
        all.extend_from_slice(&self.one_hop[idx]);
        all.sort_unstable();
        all.dedup();
        all
    }
}
