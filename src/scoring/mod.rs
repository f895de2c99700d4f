//! Score aggregation, normalization and export

pub mod aggregator;
pub mod export;
pub mod normalize;
pub mod record;

pub use aggregator::{weights, ScoreAggregator};
pub use export::{top_records, ResultExporter};
pub use normalize::{min_max_normalize, NormalizationStats};
pub use record::{ExplainedRecord, FeatureVector, ScoreRecord};
