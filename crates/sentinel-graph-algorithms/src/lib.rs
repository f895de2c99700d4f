pub mod common;
pub mod community;
pub mod cycles;
pub mod neighborhood;

pub use common::{GraphView, NodeId};
pub use community::{component_fraction, weakly_connected_components, WccResult};
pub use cycles::{count_flagged_cycles, CycleCount, CycleSearchConfig};
pub use neighborhood::NeighborhoodIndex;
