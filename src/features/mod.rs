//! Per-node structural features
//!
//! Whole-graph structures (components, 1-hop lists, flag masks) are built
//! once and then only read, so per-node lookups are safe to run in parallel.

pub mod community;
pub mod cycles;
pub mod neighborhood;

pub use community::CommunityRatios;
pub use cycles::{FlaggedCycleCounter, IllegalEntitySet};
pub use neighborhood::{NeighborhoodCounts, NeighborhoodFeatures};
