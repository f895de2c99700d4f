//! Two-hop neighborhood counts
//!
//! For a node u with nbrs(u) = 1-hop ∪ 2-hop undirected neighbors:
//! - F12: outgoing `family_relationship` edges whose source is in nbrs(u),
//!   each parallel edge counted on its own
//! - P12: members of nbrs(u) typed `political_organization`

use crate::algo::{node_mask, out_edge_mask, NeighborhoodIndex};
use crate::graph::EntityGraph;
use sentinel_graph_algorithms::GraphView;

/// Neighborhood counts of one node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborhoodCounts {
    /// F12
    pub family_edges: u64,
    /// P12
    pub political_orgs: u64,
}

/// Precomputed inputs for neighborhood counts
#[derive(Debug, Clone)]
pub struct NeighborhoodFeatures {
    index: NeighborhoodIndex,
    /// Outgoing family edges per node
    family_out: Vec<u64>,
    political: Vec<bool>,
}

impl NeighborhoodFeatures {
    /// `view` must come from `build_view(graph)`
    pub fn build(graph: &EntityGraph, view: &GraphView) -> Self {
        let index = NeighborhoodIndex::build(view);

        let family = out_edge_mask(graph, |e| e.edge_type.is_family());
        let family_out = (0..view.node_count)
            .map(|idx| view.out_range(idx).filter(|&slot| family[slot]).count() as u64)
            .collect();

        let political = node_mask(graph, |n| n.entity_type.is_political_organization());

        Self {
            index,
            family_out,
            political,
        }
    }

    pub fn index(&self) -> &NeighborhoodIndex {
        &self.index
    }

    /// F12 and P12 of the node at dense index `idx`
    pub fn counts(&self, idx: usize) -> NeighborhoodCounts {
        let nbrs = self.index.within_two_hops(idx);
        nbrs.iter().fold(NeighborhoodCounts::default(), |mut acc, &v| {
            acc.family_edges += self.family_out[v];
            if self.political[v] {
                acc.political_orgs += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::build_view;

    #[test]
    fn test_family_and_political_counts() {
        // p -> a -> b, b -family-> c (twice), c -family-> x, org - a, x isolated from u's 2-hop
        let mut graph = EntityGraph::new();
        let u = graph.add_node("u", "person").unwrap();
        let a = graph.add_node("a", "company").unwrap();
        let b = graph.add_node("b", "person").unwrap();
        let c = graph.add_node("c", "person").unwrap();
        let org = graph.add_node("org", "political_organization").unwrap();
        let far = graph.add_node("far", "political_organization").unwrap();

        graph.add_edge(u, a, "ownership").unwrap();
        graph.add_edge(a, b, "ownership").unwrap();
        graph.add_edge(b, c, "family_relationship").unwrap();
        graph.add_edge(b, c, "family_relationship").unwrap();
        graph.add_edge(c, far, "family_relationship").unwrap();
        graph.add_edge(org, a, "membership").unwrap();
        graph.add_edge(u, u, "family_relationship").unwrap();

        let view = build_view(&graph);
        let features = NeighborhoodFeatures::build(&graph, &view);

        // nbrs(u) = {a, b, org}; b owns two family edges; u's own self loop is not counted
        let counts = features.counts(u.index());
        assert_eq!(counts.family_edges, 2);
        assert_eq!(counts.political_orgs, 1);

        // nbrs(c) = {b, far, a}: b has 2 family edges, far none
        let counts = features.counts(c.index());
        assert_eq!(counts.family_edges, 2);
        assert_eq!(counts.political_orgs, 1);

        // nbrs(b) = {a, c, u, org, far}: c -> far (1) + u self loop (1)
        let counts = features.counts(b.index());
        assert_eq!(counts.family_edges, 2);
        assert_eq!(counts.political_orgs, 2);
    }

    #[test]
    fn test_isolated_node_has_zero_counts() {
        let mut graph = EntityGraph::new();
        graph.add_node("solo", "political_organization").unwrap();
        let view = build_view(&graph);
        let features = NeighborhoodFeatures::build(&graph, &view);
        assert_eq!(features.counts(0), NeighborhoodCounts::default());
    }
}
