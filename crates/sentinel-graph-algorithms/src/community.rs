//! Community detection algorithms
//!
//! Weakly connected components plus per-component membership fractions.

use super::common::GraphView;
use std::collections::HashMap;

/// Result of WCC algorithm
#[derive(Debug, Clone)]
pub struct WccResult {
    /// Members of each component as dense indices.
    /// Components are numbered in order of their first member's index.
    pub components: Vec<Vec<usize>>,
    /// Component number of every dense index
    pub node_component: Vec<usize>,
}

impl WccResult {
    /// Number of components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Component number of a dense index
    pub fn component_of(&self, idx: usize) -> usize {
        self.node_component[idx]
    }
}

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        // Iterative with path halving; recursion overflows on long chains.
        let mut i = i;
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Weakly Connected Components (WCC)
///
/// Finds all disjoint subgraphs in the graph.
/// Ignores edge direction.
pub fn weakly_connected_components(view: &GraphView) -> WccResult {
    let n = view.node_count;
    let mut uf = UnionFind::new(n);

    // Iterate all edges and Union connected nodes
    for u_idx in 0..n {
        for &v_idx in view.successors(u_idx) {
            uf.union(u_idx, v_idx);
        }
    }

    // Number components by first appearance so the result does not depend on root choice
    let mut root_to_component: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut node_component = Vec::with_capacity(n);

    for i in 0..n {
        let root = uf.find(i);
        let next = components.len();
        let component = *root_to_component.entry(root).or_insert(next);
        if component == next {
            components.push(Vec::new());
        }
        components[component].push(i);
        node_component.push(component);
    }

    WccResult {
        components,
        node_component,
    }
}

/// Fraction of each component's members for which `mask` is true.
///
/// Indexed by component number. Components are never empty, so no
/// division by zero can occur.
pub fn component_fraction(wcc: &WccResult, mask: &[bool]) -> Vec<f64> {
    wcc.components
        .iter()
        .map(|members| {
            let hits = members.iter().filter(|&&i| mask[i]).count();
            hits as f64 / members.len() as f64
        })
        .collect()
}
