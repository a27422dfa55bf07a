//! Belief occupancy grid.
//!
//! Square grid of `u8` beliefs, row-major, cell `(cx, cy)` at index
//! `cy * size + cx`. World positions in millimeters map to cells by
//! `round_half_up(mm × scale)`, with `scale = size_pixels / (size_meters × 1000)`.
//!
//! # Integration profile
//!
//! Each ray is traced from the sensor cell past the hit by half the hole
//! width. Cells are blended towards a target belief that follows a tent
//! around the hit:
//!
//! ```text
//! target
//!   255 ┤                       ╱╲
//!       │                      ╱  ╲
//!     0 ┼━━━━━━━━━━━━━━━━━━━━━╱    ╲
//!       sensor            hit−w  hit  hit+w (end)
//! ```
//!
//! where `w` is half the hole width in pixels. The blend is
//! `((256 − quality) × old + quality × target) >> 8`.

use crate::core::math::round_half_up;
use crate::core::types::{GridCoord, Pose2D, ScanPointSet};
use crate::error::{CoreSlamError, Result};

use super::config::MapConfig;
use super::distance_field::DistanceField;
use super::raycaster::BresenhamLine;

/// Belief of a certainly free cell.
pub const FREE: u8 = 0;
/// Belief of a certainly occupied cell.
pub const OCCUPIED: u8 = 255;
/// Belief of a cell never observed.
pub const PRIOR: u8 = 127;

/// Occupancy grid with a derived distance field.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    config: MapConfig,
    scale: f64,
    cells: Vec<u8>,
    distance: DistanceField,
}

impl OccupancyGrid {
    /// Create a grid with every cell at the prior.
    pub fn new(config: MapConfig) -> Result<Self> {
        config.validate()?;
        let size = config.size_pixels;
        Ok(Self {
            scale: config.scale(),
            cells: vec![PRIOR; config.cell_count()],
            distance: DistanceField::new(size, config.max_distance_cells),
            config,
        })
    }

    /// Create a grid from previously exported bytes.
    pub fn from_bytes(config: MapConfig, bytes: &[u8]) -> Result<Self> {
        let mut grid = Self::new(config)?;
        grid.import(bytes)?;
        Ok(grid)
    }

    /// Grid configuration.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Cells along each side.
    #[inline]
    pub fn size_pixels(&self) -> usize {
        self.config.size_pixels
    }

    /// Side length in meters.
    #[inline]
    pub fn size_meters(&self) -> f64 {
        self.config.size_meters
    }

    /// Pixels per millimeter.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Millimeters per cell.
    #[inline]
    pub fn mm_per_cell(&self) -> f64 {
        1.0 / self.scale
    }

    /// Raw row-major beliefs.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Distance field derived from the current beliefs.
    #[inline]
    pub fn distance_field(&self) -> &DistanceField {
        &self.distance
    }

    /// Check if coordinates are inside the grid.
    #[inline]
    pub fn is_valid_cell(&self, coord: GridCoord) -> bool {
        let size = self.config.size_pixels;
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < size && (coord.y as usize) < size
    }

    #[inline]
    fn cell_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_cell(coord) {
            Some(coord.y as usize * self.config.size_pixels + coord.x as usize)
        } else {
            None
        }
    }

    /// Belief at a cell, `None` outside the grid.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<u8> {
        self.cell_index(coord).map(|i| self.cells[i])
    }

    /// Cell containing a world position in millimeters.
    #[inline]
    pub fn world_to_cell(&self, x_mm: f64, y_mm: f64) -> GridCoord {
        GridCoord::new(round_half_up(x_mm * self.scale), round_half_up(y_mm * self.scale))
    }

    /// Centre of the map in millimeters.
    pub fn center_mm(&self) -> (f64, f64) {
        let half = self.config.size_meters * 500.0;
        (half, half)
    }

    /// Integrate a scan observed from `pose` into the grid.
    ///
    /// Points no farther than half the hole width are skipped, as are all
    /// rays when the pose lies outside the grid. Cells outside the grid are
    /// clipped. A quality of 0 or an empty scan leaves the grid untouched.
    pub fn integrate(
        &mut self,
        scan: &ScanPointSet,
        pose: &Pose2D,
        quality: u8,
        hole_width_mm: f64,
    ) {
        if quality == 0 || scan.is_empty() {
            return;
        }

        let start = self.world_to_cell(pose.x_mm, pose.y_mm);
        if !self.is_valid_cell(start) {
            log::warn!("Sensor pose {} lies outside the map, scan ignored", pose);
            return;
        }

        let half_hole = (hole_width_mm / 2.0).max(0.0);
        let (sin_t, cos_t) = pose.theta_radians().sin_cos();
        let origin_x = pose.x_mm * self.scale;
        let origin_y = pose.y_mm * self.scale;

        let mut rays = 0usize;
        for p in scan {
            if p.distance_mm <= half_hole || p.distance_mm <= 0.0 {
                continue;
            }
            let dx = p.x_mm * cos_t - p.y_mm * sin_t;
            let dy = p.x_mm * sin_t + p.y_mm * cos_t;

            let hit = self.world_to_cell(pose.x_mm + dx, pose.y_mm + dy);
            let stretch = self.scale * (1.0 + half_hole / p.distance_mm);
            let end = GridCoord::new(
                round_half_up(origin_x + dx * stretch),
                round_half_up(origin_y + dy * stretch),
            );

            self.trace_ray(start, hit, end, quality);
            rays += 1;
        }

        if rays > 0 {
            self.distance
                .rebuild(&self.cells, self.config.occupied_threshold);
        }
        log::trace!("Integrated {} rays at {}", rays, pose);
    }

    /// Blend every cell on `start → end` towards its tent target.
    fn trace_ray(&mut self, start: GridCoord, hit: GridCoord, end: GridCoord, quality: u8) {
        let along_x = (end.x - start.x).abs() > (end.y - start.y).abs();
        let (peak, width) = if along_x {
            ((hit.x - start.x).abs(), (end.x - hit.x).abs())
        } else {
            ((hit.y - start.y).abs(), (end.y - hit.y).abs())
        };
        // The hit cell always gets the full target, even with no smear
        let (peak, width) = (peak as i64, (width as i64).max(1));
        let q = quality as u32;

        for (t, cell) in BresenhamLine::new(start, end).enumerate() {
            let Some(idx) = self.cell_index(cell) else {
                continue;
            };
            let target = tent_target(t as i64, peak, width) as u32;
            let old = self.cells[idx] as u32;
            self.cells[idx] = (((256 - q) * old + q * target) >> 8) as u8;
        }
    }

    /// Cost of observing `scan` from `pose`; lower is a better fit.
    ///
    /// Sums, over all points, the truncated distance in millimeters from the
    /// point's cell to the nearest occupied cell. Points projecting outside
    /// the grid are clamped to its border. Does not modify the grid.
    pub fn score(&self, scan: &ScanPointSet, pose: &Pose2D) -> f64 {
        let (sin_t, cos_t) = pose.theta_radians().sin_cos();
        let size = self.config.size_pixels;

        let total: f64 = scan
            .iter()
            .map(|p| {
                let x = pose.x_mm + p.x_mm * cos_t - p.y_mm * sin_t;
                let y = pose.y_mm + p.x_mm * sin_t + p.y_mm * cos_t;
                let cell = self.world_to_cell(x, y).clamped(size);
                self.distance.get(cell) as f64
            })
            .sum();

        total * self.mm_per_cell()
    }

    /// Copy the beliefs out, row-major, one byte per cell.
    pub fn export(&self) -> Vec<u8> {
        self.cells.clone()
    }

    /// Copy the beliefs into a caller-provided buffer.
    pub fn export_into(&self, buffer: &mut [u8]) -> Result<()> {
        self.check_buffer(buffer.len())?;
        buffer.copy_from_slice(&self.cells);
        Ok(())
    }

    /// Replace the beliefs with previously exported bytes.
    pub fn import(&mut self, bytes: &[u8]) -> Result<()> {
        self.check_buffer(bytes.len())?;
        self.cells.copy_from_slice(bytes);
        self.distance
            .rebuild(&self.cells, self.config.occupied_threshold);
        Ok(())
    }

    /// Forget everything observed.
    pub fn reset(&mut self) {
        self.cells.fill(PRIOR);
        self.distance
            .rebuild(&self.cells, self.config.occupied_threshold);
    }

    fn check_buffer(&self, len: usize) -> Result<()> {
        if len != self.cells.len() {
            return Err(CoreSlamError::MapSizeMismatch {
                expected: self.cells.len(),
                actual: len,
            });
        }
        Ok(())
    }
}

/// Target belief at step `t` of a ray peaking at step `peak`.
#[inline]
fn tent_target(t: i64, peak: i64, width: i64) -> u8 {
    let full = OCCUPIED as i64;
    let rise = peak - width;
    let value = if t <= rise {
        0
    } else if t <= peak {
        full * (t - rise) / width
    } else {
        full * (width - (t - peak)).max(0) / width
    };
    value.clamp(FREE as i64, full) as u8
}
