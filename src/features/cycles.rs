//! Flagged cycle participation
//!
//! Counts bounded simple directed cycles through a node that touch at least
//! one seed entity.

use crate::algo::{count_flagged_cycles, node_mask, CycleCount, CycleSearchConfig};
use crate::config::ScoringConfig;
use crate::graph::{EntityGraph, EntityId};
use rustc_hash::FxHashSet;
use sentinel_graph_algorithms::GraphView;
use tracing::warn;

/// Fixed set of seed entities known to be associated with illicit activity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IllegalEntitySet {
    entities: FxHashSet<EntityId>,
}

impl IllegalEntitySet {
    pub fn new(entities: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            entities: entities.into_iter().collect(),
        }
    }

    pub fn contains(&self, entity: &EntityId) -> bool {
        self.entities.contains(entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Flag per node, in node order
    pub fn mask(&self, graph: &EntityGraph) -> Vec<bool> {
        node_mask(graph, |n| self.contains(&n.entity))
    }

    /// Seeds that do not occur in the graph, sorted
    pub fn absent_from(&self, graph: &EntityGraph) -> Vec<&EntityId> {
        let mut absent: Vec<&EntityId> = self
            .entities
            .iter()
            .filter(|e| !graph.contains_entity(e))
            .collect();
        absent.sort();
        absent
    }
}

impl FromIterator<EntityId> for IllegalEntitySet {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Per-node flagged cycle counter over a read-only view
#[derive(Debug)]
pub struct FlaggedCycleCounter<'a> {
    view: std::borrow::Cow<'a, GraphView>,
    flagged: Vec<bool>,
    search: CycleSearchConfig,
}

impl<'a> FlaggedCycleCounter<'a> {
    /// `view` must come from `build_view(graph)`.
    ///
    /// With `count_parallel_edges` off the view is collapsed to one edge per
    /// ordered pair first.
    pub fn new(
        graph: &EntityGraph,
        view: &'a GraphView,
        illegal: &IllegalEntitySet,
        config: &ScoringConfig,
    ) -> Self {
        for seed in illegal.absent_from(graph) {
            warn!("Illegal entity {} does not occur in the graph", seed);
        }

        let view = if config.count_parallel_edges {
            std::borrow::Cow::Borrowed(view)
        } else {
            std::borrow::Cow::Owned(view.collapse_parallel_edges())
        };

        Self {
            view,
            flagged: illegal.mask(graph),
            search: CycleSearchConfig {
                max_length: config.max_cycle_length,
                budget: config.cycle_budget,
            },
        }
    }

    /// C(u) for the node at dense index `idx`
    pub fn count(&self, idx: usize) -> CycleCount {
        count_flagged_cycles(&self.view, idx, &self.flagged, &self.search)
    }

    pub fn is_flagged(&self, idx: usize) -> bool {
        self.flagged[idx]
    }
}
