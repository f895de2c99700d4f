//! Raw score aggregation
//!
//! S(u) = Rv(u) - r̂ + 0.1·F12(u) + P12(u) - 0.5·d(u, r1) + d(u, r2) + C(u)

use super::record::FeatureVector;
use crate::embedding::{EmbeddingDistanceOracle, Reference};
use crate::features::{CommunityRatios, FlaggedCycleCounter, NeighborhoodFeatures};
use rayon::prelude::*;

/// Fixed feature weights of the raw score
pub mod weights {
    pub const VESSEL_RATIO: f64 = 1.0;
    pub const FAMILY_EDGES: f64 = 0.1;
    pub const POLITICAL_ORGS: f64 = 1.0;
    pub const PRIMARY_DISTANCE: f64 = -0.5;
    pub const SECONDARY_DISTANCE: f64 = 1.0;
    pub const CYCLES: f64 = 1.0;
}

/// Combines precomputed features into one raw score per node.
///
/// Holds only shared references to read-only structures; every node's
/// score depends on nothing but its own index.
pub struct ScoreAggregator<'a> {
    community: &'a CommunityRatios,
    neighborhood: &'a NeighborhoodFeatures,
    cycles: &'a FlaggedCycleCounter<'a>,
    distances: &'a EmbeddingDistanceOracle<'a>,
}

impl<'a> ScoreAggregator<'a> {
    pub fn new(
        community: &'a CommunityRatios,
        neighborhood: &'a NeighborhoodFeatures,
        cycles: &'a FlaggedCycleCounter<'a>,
        distances: &'a EmbeddingDistanceOracle<'a>,
    ) -> Self {
        Self {
            community,
            neighborhood,
            cycles,
            distances,
        }
    }

    /// Features of the node at dense index `idx`
    pub fn features(&self, idx: usize) -> FeatureVector {
        let counts = self.neighborhood.counts(idx);
        let cycles = self.cycles.count(idx);

        FeatureVector {
            vessel_ratio: self.community.ratio(idx),
            family_edges: counts.family_edges,
            political_orgs: counts.political_orgs,
            cycles: cycles.cycles,
            dist_primary: self.distances.distance(idx, Reference::Primary),
            dist_secondary: self.distances.distance(idx, Reference::Secondary),
            cycles_truncated: cycles.truncated,
        }
    }

    /// Raw score of one node
    pub fn score(&self, idx: usize) -> (f64, FeatureVector) {
        let features = self.features(idx);
        (features.raw_score(self.community.mean()), features)
    }

    /// Raw scores of nodes `0..node_count`, in index order.
    ///
    /// The parallel path fans out over the rayon pool; each worker writes
    /// only its own slot of the collected vector, so both paths return
    /// identical results.
    pub fn score_all(&self, node_count: usize, parallel: bool) -> Vec<(f64, FeatureVector)> {
        if parallel {
            (0..node_count)
                .into_par_iter()
                .map(|idx| self.score(idx))
                .collect()
        } else {
            (0..node_count).map(|idx| self.score(idx)).collect()
        }
    }
}
