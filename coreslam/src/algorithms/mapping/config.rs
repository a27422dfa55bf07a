//! Occupancy grid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CoreSlamError, Result};

/// Configuration for the occupancy grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Cells along each side of the square grid
    pub size_pixels: usize,

    /// Physical length of each side in meters
    pub size_meters: f64,

    /// Belief at or above which a cell counts as an obstacle for scoring
    pub occupied_threshold: u8,

    /// Distance field truncation radius, in cells
    pub max_distance_cells: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            size_pixels: 800, // 4 cm cells
            size_meters: 32.0,
            occupied_threshold: 150, // one full-strength hit at quality 50
            max_distance_cells: 10.0,
        }
    }
}

impl MapConfig {
    /// Reject unusable geometry.
    pub fn validate(&self) -> Result<()> {
        if self.size_pixels == 0 {
            return Err(CoreSlamError::InvalidMap("size_pixels must be positive".into()));
        }
        if self.size_pixels > i32::MAX as usize / 2 {
            return Err(CoreSlamError::InvalidMap(format!(
                "size_pixels {} is too large",
                self.size_pixels
            )));
        }
        if !(self.size_meters.is_finite() && self.size_meters > 0.0) {
            return Err(CoreSlamError::InvalidMap(format!(
                "size_meters must be positive, got {}",
                self.size_meters
            )));
        }
        if !(self.max_distance_cells.is_finite() && self.max_distance_cells > 0.0) {
            return Err(CoreSlamError::InvalidMap(format!(
                "max_distance_cells must be positive, got {}",
                self.max_distance_cells
            )));
        }
        Ok(())
    }

    /// Pixels per millimeter.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.size_pixels as f64 / (self.size_meters * 1000.0)
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size_pixels * self.size_pixels
    }
}
