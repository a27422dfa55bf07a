//! Laser scanner profiles.
//!
//! A [`SensorProfile`] describes how a scanner lays out its rays. Rays are
//! spread evenly over the field of view, first ray at `-fov/2` and last ray
//! at `+fov/2`, sweeping counter-clockwise:
//!
//! ```text
//!                 +x (forward)
//!                  ▲
//!         last ray │ first ray
//!            +fov/2 ╲│╱ -fov/2
//!                   ●  sensor, mount_offset_mm ahead of the robot centre
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreSlamError, Result};

/// Raw range value that marks a ray without a return.
pub const NO_DETECTION: i32 = 0;

/// Laser rangefinder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorProfile {
    /// Rays per scan
    pub ray_count: usize,
    /// Full revolutions per second
    pub scan_rate_hz: f64,
    /// Angular extent covered by the rays, in degrees
    pub field_of_view_degrees: f64,
    /// Ranges at or beyond this are dropped (mm)
    pub max_range_mm: f64,
    /// Rays dropped at each edge of the field of view
    pub edge_margin_ray_count: usize,
    /// Distance of the sensor ahead of the robot centre (mm)
    pub mount_offset_mm: f64,
}

impl Default for SensorProfile {
    fn default() -> Self {
        // URG-04LX as mounted on the Mines rover
        Self::urg04lx(70, 145.0)
    }
}

impl SensorProfile {
    /// Hokuyo URG-04LX.
    pub fn urg04lx(edge_margin_ray_count: usize, mount_offset_mm: f64) -> Self {
        Self {
            ray_count: 682,
            scan_rate_hz: 10.0,
            field_of_view_degrees: 240.0,
            max_range_mm: 4000.0,
            edge_margin_ray_count,
            mount_offset_mm,
        }
    }

    /// GetSurreal XV Lidar.
    pub fn xv_lidar(edge_margin_ray_count: usize, mount_offset_mm: f64) -> Self {
        Self {
            ray_count: 360,
            scan_rate_hz: 5.5,
            field_of_view_degrees: 360.0,
            max_range_mm: 6000.0,
            edge_margin_ray_count,
            mount_offset_mm,
        }
    }

    /// SLAMTEC RPLidar A1.
    pub fn rplidar_a1(edge_margin_ray_count: usize, mount_offset_mm: f64) -> Self {
        Self {
            ray_count: 360,
            scan_rate_hz: 5.5,
            field_of_view_degrees: 360.0,
            max_range_mm: 12000.0,
            edge_margin_ray_count,
            mount_offset_mm,
        }
    }

    /// Reject profiles that cannot describe a real scanner.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(CoreSlamError::InvalidSensorProfile(msg));

        if self.ray_count < 2 {
            return invalid(format!("ray_count must be at least 2, got {}", self.ray_count));
        }
        if !(self.scan_rate_hz.is_finite() && self.scan_rate_hz > 0.0) {
            return invalid(format!("scan_rate_hz must be positive, got {}", self.scan_rate_hz));
        }
        if !(self.field_of_view_degrees > 0.0 && self.field_of_view_degrees <= 360.0) {
            return invalid(format!(
                "field_of_view_degrees must be in (0, 360], got {}",
                self.field_of_view_degrees
            ));
        }
        if !(self.max_range_mm.is_finite() && self.max_range_mm > 0.0) {
            return invalid(format!("max_range_mm must be positive, got {}", self.max_range_mm));
        }
        if self.edge_margin_ray_count.saturating_mul(2) >= self.ray_count {
            return invalid(format!(
                "edge margin of {} rays leaves nothing of {} rays",
                self.edge_margin_ray_count, self.ray_count
            ));
        }
        if !self.mount_offset_mm.is_finite() {
            return invalid("mount_offset_mm must be finite".to_string());
        }
        Ok(())
    }

    /// Angle of ray `index` in degrees, without motion correction.
    #[inline]
    pub fn ray_angle_degrees(&self, index: usize) -> f64 {
        -self.field_of_view_degrees / 2.0
            + index as f64 * self.field_of_view_degrees / (self.ray_count - 1) as f64
    }

    /// Degrees swept per second by the rotating head.
    #[inline]
    pub fn degrees_per_second(&self) -> f64 {
        self.scan_rate_hz * 360.0
    }

    /// Rays kept after edge trimming.
    #[inline]
    pub fn usable_rays(&self) -> std::ops::Range<usize> {
        let end = self.ray_count.saturating_sub(self.edge_margin_ray_count);
        self.edge_margin_ray_count.min(end)..end
    }
}
