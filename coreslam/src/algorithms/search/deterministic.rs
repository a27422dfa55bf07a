//! Odometry-only pose search.

use super::PoseSearch;
use crate::algorithms::mapping::OccupancyGrid;
use crate::core::types::{Pose2D, ScanPointSet};

/// Returns the starting pose unchanged.
///
/// Useful for dead-reckoning baselines and for mapping with an external
/// pose source.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicSearch;

impl DeterministicSearch {
    /// Create a new deterministic search.
    pub fn new() -> Self {
        Self
    }
}

impl PoseSearch for DeterministicSearch {
    fn refine(&mut self, start: Pose2D, _scan: &ScanPointSet, _grid: &OccupancyGrid) -> Pose2D {
        start
    }

    fn name(&self) -> &'static str {
        "deterministic"
    }
}
