// src/bsp/bsp_partition.rs

use log::debug;
use thiserror::Error;

use crate::bsp::{Axis, Space, SpaceNode, SplitRng, SPLIT_MARGIN};
use crate::config::{PartitionConfig, SplitMargin};

#[derive(Debug, Error, PartialEq)]
pub enum PartitionError {
    #[error("space must have positive dimensions, got {length} x {width}")]
    InvalidSpace { length: f64, width: f64 },
}

/// Recursively divides a rectangular space into smaller spaces along
/// randomly chosen horizontal axes until every leaf is at or below the
/// configured maximum area. The result is a binary tree of spaces; the
/// leaves are the terminal rooms a map builder carves geometry from.
pub struct SpacePartitioner {
    config: PartitionConfig,
}

impl SpacePartitioner {
    pub fn new(config: PartitionConfig) -> Self {
        SpacePartitioner { config }
    }

    /// Build the partition tree rooted at `area`.
    ///
    /// Randomness comes entirely from `rng`, so a seeded generator
    /// reproduces the same tree. A space whose axes are both too small to
    /// keep the split margin on each side of a cut stays a leaf even when
    /// its area is over the threshold.
    pub fn partition<R>(&self, area: Space, rng: &mut R) -> Result<SpaceNode, PartitionError>
    where
        R: SplitRng + ?Sized,
    {
        if area.length <= 0.0 || area.width <= 0.0 {
            return Err(PartitionError::InvalidSpace {
                length: area.length,
                width: area.width,
            });
        }

        debug!(
            "partitioning {} x {} space down to leaf area {}",
            area.length, area.width, self.config.max_leaf_area
        );

        Ok(self.split_space(area, rng))
    }

    fn margin(&self) -> f64 {
        match self.config.margin {
            SplitMargin::FixedUnit => SPLIT_MARGIN,
            SplitMargin::MinRoomSize => self.config.min_room_size,
        }
    }

    fn split_space<R>(&self, area: Space, rng: &mut R) -> SpaceNode
    where
        R: SplitRng + ?Sized,
    {
        // If this space is below the max room size don't subdivide.
        if area.area() <= self.config.max_leaf_area {
            return SpaceNode::leaf(area);
        }

        let margin = self.margin();
        let axis = match self.choose_axis(&area, margin, rng) {
            Some(axis) => axis,
            // Neither axis has room for the margins, so the split interval
            // would be empty. The space stays a leaf.
            None => return SpaceNode::leaf(area),
        };

        let extent = area.extent(axis);
        let split_point = rng.split_point(margin, extent - margin);
        let (near, far) = area.split(axis, split_point);

        let left = self.split_space(near, rng);
        let right = self.split_space(far, rng);
        SpaceNode::branch(area, left, right)
    }

    /// Pick the split axis among those wide enough to keep `margin` on both
    /// sides of the split point. The axis draw is only consumed when both
    /// axes qualify.
    fn choose_axis<R>(&self, area: &Space, margin: f64, rng: &mut R) -> Option<Axis>
    where
        R: SplitRng + ?Sized,
    {
        let x_ok = area.length > 2.0 * margin;
        let z_ok = area.width > 2.0 * margin;
        match (x_ok, z_ok) {
            (true, true) => Some(rng.split_axis()),
            (true, false) => Some(Axis::X),
            (false, true) => Some(Axis::Z),
            (false, false) => None,
        }
    }
}
