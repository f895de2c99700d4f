//! Output records

use super::weights;
use crate::graph::EntityId;
use serde::{Deserialize, Serialize};

/// Final score of one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: EntityId,
    pub raw_score: f64,
    /// Min-max normalized score in [0, 100]
    pub norm_score: f64,
}

/// Feature values behind a raw score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Rv: vessel ratio of the node's component
    pub vessel_ratio: f64,
    /// F12: family edges leaving the 2-hop neighborhood
    pub family_edges: u64,
    /// P12: political organizations in the 2-hop neighborhood
    pub political_orgs: u64,
    /// C: flagged bounded cycles through the node
    pub cycles: u64,
    /// Embedding distance to the primary reference entity
    pub dist_primary: f64,
    /// Embedding distance to the secondary reference entity
    pub dist_secondary: f64,
    /// The cycle search hit its budget, so `cycles` is a lower bound
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cycles_truncated: bool,
}

impl FeatureVector {
    /// S(u) given the mean vessel ratio r̂.
    ///
    /// Terms are added left to right in a fixed order so the result is
    /// reproducible bit for bit.
    pub fn raw_score(&self, mean_vessel_ratio: f64) -> f64 {
        weights::VESSEL_RATIO * self.vessel_ratio - mean_vessel_ratio
            + weights::FAMILY_EDGES * self.family_edges as f64
            + weights::POLITICAL_ORGS * self.political_orgs as f64
            + weights::PRIMARY_DISTANCE * self.dist_primary
            + weights::SECONDARY_DISTANCE * self.dist_secondary
            + weights::CYCLES * self.cycles as f64
    }
}

/// Score record with its feature breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainedRecord {
    #[serde(flatten)]
    pub record: ScoreRecord,
    pub features: FeatureVector,
}
