//! Component vessel density
//!
//! Every node inherits the vessel ratio of its weakly connected component.

use crate::algo::{component_fraction, node_mask, weakly_connected_components, WccResult};
use crate::graph::EntityGraph;
use sentinel_graph_algorithms::GraphView;
use tracing::debug;

/// Vessel ratio per component, broadcast to nodes, plus the node-level mean
#[derive(Debug, Clone)]
pub struct CommunityRatios {
    wcc: WccResult,
    component_ratios: Vec<f64>,
    node_ratios: Vec<f64>,
    mean: f64,
}

impl CommunityRatios {
    pub fn analyze(graph: &EntityGraph, view: &GraphView) -> Self {
        let wcc = weakly_connected_components(view);
        let vessels = node_mask(graph, |n| n.entity_type.is_vessel());
        let component_ratios = component_fraction(&wcc, &vessels);

        let node_ratios: Vec<f64> = wcc
            .node_component
            .iter()
            .map(|&c| component_ratios[c])
            .collect();

        // Mean over nodes, i.e. component ratios weighted by component size
        let mean = if node_ratios.is_empty() {
            0.0
        } else {
            node_ratios.iter().sum::<f64>() / node_ratios.len() as f64
        };

        debug!(
            "{} components, mean vessel ratio {:.6}",
            wcc.component_count(),
            mean
        );

        Self {
            wcc,
            component_ratios,
            node_ratios,
            mean,
        }
    }

    /// Rv of a node
    pub fn ratio(&self, idx: usize) -> f64 {
        self.node_ratios[idx]
    }

    /// Reference mean r̂
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn component_of(&self, idx: usize) -> usize {
        self.wcc.component_of(idx)
    }

    pub fn component_count(&self) -> usize {
        self.wcc.component_count()
    }

    pub fn component_ratio(&self, component: usize) -> f64 {
        self.component_ratios[component]
    }

    pub fn components(&self) -> &[Vec<usize>] {
        &self.wcc.components
    }
}
