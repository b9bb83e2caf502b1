// src/bsp/mod.rs
pub mod bsp_node;
pub mod bsp_partition;
pub mod bsp_rng;
pub mod bsp_util;

pub use bsp_node::SpaceNode;
pub use bsp_partition::{PartitionError, SpacePartitioner};
pub use bsp_rng::SplitRng;
pub use bsp_util::{Axis, Point3, Space}; // Re-export geometry types

/// Margin reserved on each side of a split point under the fixed-unit policy.
pub const SPLIT_MARGIN: f64 = 1.0;
pub const EPSILON: f64 = 1e-6; // For floating-point comparisons
