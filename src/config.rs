//! Scoring configuration
//!
//! Loadable from YAML. Every field has a default, so a partial file only
//! overrides what it names.

use crate::error::{ScoringError, ScoringResult};
use crate::graph::EntityId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Registry number of the primary seed vessel
pub const DEFAULT_PRIMARY_REFERENCE: i64 = 979893388;
/// Name of the secondary seed carrier
pub const DEFAULT_SECONDARY_REFERENCE: &str = "Oceanfront Oasis Inc Carriers";

/// What normalized scores become when every raw score is identical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Every node gets 0.0
    #[default]
    Zero,
    /// Every node gets 50.0
    Midpoint,
}

impl DegeneratePolicy {
    pub fn value(&self) -> f64 {
        match self {
            DegeneratePolicy::Zero => 0.0,
            DegeneratePolicy::Midpoint => 50.0,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Seed entities known to be associated with illicit activity
    pub illegal_entities: Vec<EntityId>,
    /// Reference entity whose embedding distance lowers the score (weight -0.5)
    pub primary_reference: EntityId,
    /// Reference entity whose embedding distance raises the score (weight +1)
    pub secondary_reference: EntityId,
    /// Maximum cycle length in hops for the flagged cycle count
    pub max_cycle_length: usize,
    /// Per-node cap on cycle search path extensions (None = exact search)
    pub cycle_budget: Option<usize>,
    /// Count cycles per edge sequence rather than per node sequence
    pub count_parallel_edges: bool,
    /// Normalization fallback when all raw scores are equal
    pub degenerate_policy: DegeneratePolicy,
    /// Score nodes on the rayon thread pool
    pub parallel: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            illegal_entities: vec![
                EntityId::Int(DEFAULT_PRIMARY_REFERENCE),
                EntityId::from(DEFAULT_SECONDARY_REFERENCE),
            ],
            primary_reference: EntityId::Int(DEFAULT_PRIMARY_REFERENCE),
            secondary_reference: EntityId::from(DEFAULT_SECONDARY_REFERENCE),
            max_cycle_length: 4,
            cycle_budget: None,
            count_parallel_edges: true,
            degenerate_policy: DegeneratePolicy::Zero,
            parallel: true,
        }
    }
}

impl ScoringConfig {
    /// Parse YAML text
    pub fn from_yaml_str(text: &str) -> ScoringResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a YAML file
    pub fn load(path: impl AsRef<Path>) -> ScoringResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScoringError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn to_yaml(&self) -> ScoringResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builder-style override of the cycle length bound
    pub fn with_max_cycle_length(mut self, max_cycle_length: usize) -> Self {
        self.max_cycle_length = max_cycle_length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_seed_entities() {
        let config = ScoringConfig::default();
        assert_eq!(config.max_cycle_length, 4);
        assert_eq!(config.primary_reference, EntityId::Int(979893388));
        assert_eq!(
            config.secondary_reference,
            EntityId::from("Oceanfront Oasis Inc Carriers")
        );
        assert_eq!(config.illegal_entities.len(), 2);
        assert!(config.count_parallel_edges);
        assert_eq!(config.degenerate_policy, DegeneratePolicy::Zero);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
illegal_entities: [42, "Shady Shipping"]
max_cycle_length: 3
degenerate_policy: midpoint
"#;
        let config = ScoringConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.illegal_entities,
            vec![EntityId::Int(42), EntityId::from("Shady Shipping")]
        );
        assert_eq!(config.max_cycle_length, 3);
        assert_eq!(config.degenerate_policy.value(), 50.0);
        assert_eq!(config.primary_reference, EntityId::Int(979893388));
        assert!(config.parallel);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = ScoringConfig::default().with_max_cycle_length(2);
        let yaml = config.to_yaml().unwrap();
        assert_eq!(ScoringConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(matches!(
            ScoringConfig::from_yaml_str("max_cycle_length: lots"),
            Err(ScoringError::Config(_))
        ));
    }
}
