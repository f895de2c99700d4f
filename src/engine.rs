//! Scoring engine
//!
//! Build phase (single threaded, once): CSR view, components, 1-hop lists,
//! seed mask, embedding rows. Scoring phase: one independent computation per
//! node. Normalization phase: a sequential pass over all raw scores.

use crate::algo::build_view;
use crate::config::ScoringConfig;
use crate::embedding::{EmbeddingDistanceOracle, EmbeddingMap};
use crate::error::{ScoringError, ScoringResult};
use crate::features::{CommunityRatios, FlaggedCycleCounter, IllegalEntitySet, NeighborhoodFeatures};
use crate::graph::{EntityGraph, EntityId};
use crate::scoring::{
    min_max_normalize, top_records, ExplainedRecord, FeatureVector, NormalizationStats,
    ScoreAggregator, ScoreRecord,
};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Everything a run produced, in node order
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub records: Vec<ScoreRecord>,
    pub features: Vec<FeatureVector>,
    pub normalization: NormalizationStats,
    /// Mean vessel ratio r̂
    pub mean_vessel_ratio: f64,
    pub component_count: usize,
    /// Nodes whose cycle search stopped at the budget
    pub truncated_searches: usize,
}

impl ScoreReport {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records joined with their features
    pub fn explained(&self) -> Vec<ExplainedRecord> {
        self.records
            .iter()
            .zip(&self.features)
            .map(|(record, features)| ExplainedRecord {
                record: record.clone(),
                features: *features,
            })
            .collect()
    }

    /// Record and features of one entity
    pub fn explain(&self, entity: &EntityId) -> Option<ExplainedRecord> {
        let pos = self.records.iter().position(|r| &r.id == entity)?;
        Some(ExplainedRecord {
            record: self.records[pos].clone(),
            features: self.features[pos],
        })
    }

    /// Highest normalized scores first
    pub fn top(&self, n: usize) -> Vec<&ScoreRecord> {
        top_records(&self.records, n)
    }
}

/// Anomaly scoring engine over one graph and one embedding map
pub struct AnomalyEngine<'a> {
    graph: &'a EntityGraph,
    embeddings: &'a EmbeddingMap,
    config: ScoringConfig,
}

impl<'a> AnomalyEngine<'a> {
    pub fn new(graph: &'a EntityGraph, embeddings: &'a EmbeddingMap, config: ScoringConfig) -> Self {
        Self {
            graph,
            embeddings,
            config,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score every node.
    ///
    /// Fails before any scoring if a reference entity is not in the graph or
    /// if any node or reference entity has no embedding, and before
    /// normalization if a raw score is not finite.
    pub fn run(&self) -> ScoringResult<ScoreReport> {
        let graph = self.graph;
        let config = &self.config;
        let started = Instant::now();

        for reference in [&config.primary_reference, &config.secondary_reference] {
            graph
                .require(reference)
                .map_err(|_| ScoringError::UnreachableReference(reference.clone()))?;
        }

        let view = build_view(graph);
        let community = CommunityRatios::analyze(graph, &view);
        let neighborhood = NeighborhoodFeatures::build(graph, &view);
        let distances = EmbeddingDistanceOracle::new(
            self.embeddings,
            graph,
            &config.primary_reference,
            &config.secondary_reference,
        )?;
        let illegal: IllegalEntitySet = config.illegal_entities.iter().cloned().collect();
        let cycles = FlaggedCycleCounter::new(graph, &view, &illegal, config);
        info!(
            "Prepared features for {} nodes / {} edges in {:?}",
            graph.node_count(),
            graph.edge_count(),
            started.elapsed()
        );

        let aggregator = ScoreAggregator::new(&community, &neighborhood, &cycles, &distances);
        let scored = aggregator.score_all(graph.node_count(), config.parallel);
        let (raw, features): (Vec<f64>, Vec<FeatureVector>) = scored.into_iter().unzip();

        let truncated_searches = features.iter().filter(|f| f.cycles_truncated).count();
        if truncated_searches > 0 {
            warn!(
                "Cycle search hit the budget for {} nodes; their cycle counts are lower bounds",
                truncated_searches
            );
        }

        // Barrier: every raw score exists and is finite before min/max are taken
        if let Some(pos) = raw.iter().position(|s| !s.is_finite()) {
            let entity = graph.nodes()[pos].entity.clone();
            return Err(ScoringError::NonFiniteScore(entity));
        }
        let (normalized, normalization) = min_max_normalize(&raw, config.degenerate_policy);
        if normalization.degenerate && !raw.is_empty() {
            warn!(
                "All raw scores equal {}; normalized scores set to {}",
                normalization.min,
                config.degenerate_policy.value()
            );
        }
        debug!(
            "Raw score range [{}, {}]",
            normalization.min, normalization.max
        );

        let records = graph
            .nodes()
            .iter()
            .zip(raw.iter().zip(&normalized))
            .map(|(node, (&raw_score, &norm_score))| ScoreRecord {
                id: node.entity.clone(),
                raw_score,
                norm_score,
            })
            .collect();

        info!("Scored {} nodes in {:?}", graph.node_count(), started.elapsed());

        Ok(ScoreReport {
            records,
            features,
            normalization,
            mean_vessel_ratio: community.mean(),
            component_count: community.component_count(),
            truncated_searches,
        })
    }
}
