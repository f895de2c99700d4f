//! Global min-max normalization to [0, 100]

use crate::config::DegeneratePolicy;
use serde::{Deserialize, Serialize};

/// Batch statistics of a normalization pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationStats {
    pub min: f64,
    pub max: f64,
    /// All raw scores were equal and the fallback policy was applied
    pub degenerate: bool,
}

/// Rescale `raw` so the minimum maps to 0 and the maximum to 100.
///
/// When every score is equal (including a single score) the range is empty
/// and every node gets `policy.value()`. An empty batch yields no scores.
pub fn min_max_normalize(raw: &[f64], policy: DegeneratePolicy) -> (Vec<f64>, NormalizationStats) {
    if raw.is_empty() {
        let stats = NormalizationStats {
            min: 0.0,
            max: 0.0,
            degenerate: true,
        };
        return (Vec::new(), stats);
    }

    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range > 0.0 {
        let normalized = raw.iter().map(|&s| (s - min) / range * 100.0).collect();
        let stats = NormalizationStats {
            min,
            max,
            degenerate: false,
        };
        (normalized, stats)
    } else {
        let stats = NormalizationStats {
            min,
            max,
            degenerate: true,
        };
        (vec![policy.value(); raw.len()], stats)
    }
}
