//! Shared fixtures: a rectangular room and a simulated scanner.

#![allow(dead_code)]

use coreslam::{MapConfig, Pose2D, SensorProfile};

/// Axis-aligned room in world millimeters.
#[derive(Debug, Clone, Copy)]
pub struct Room {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Room {
    /// Room of the given size centred on `(cx, cy)`.
    pub fn centred(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            min_x: cx - width / 2.0,
            min_y: cy - height / 2.0,
            max_x: cx + width / 2.0,
            max_y: cy + height / 2.0,
        }
    }

    /// Distance from `(x, y)` to the first wall along `angle_degrees`.
    pub fn cast(&self, x: f64, y: f64, angle_degrees: f64) -> f64 {
        let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();
        let mut best = f64::INFINITY;

        if cos_a > 1e-12 {
            best = best.min((self.max_x - x) / cos_a);
        } else if cos_a < -1e-12 {
            best = best.min((self.min_x - x) / cos_a);
        }
        if sin_a > 1e-12 {
            best = best.min((self.max_y - y) / sin_a);
        } else if sin_a < -1e-12 {
            best = best.min((self.min_y - y) / sin_a);
        }
        best
    }

    /// Raw ranges a scanner at `sensor_pose` would report.
    ///
    /// Ranges beyond the profile's maximum come back as no detection.
    pub fn scan(&self, profile: &SensorProfile, sensor_pose: &Pose2D) -> Vec<i32> {
        (0..profile.ray_count)
            .map(|i| {
                let angle = sensor_pose.theta_degrees + profile.ray_angle_degrees(i);
                let range = self.cast(sensor_pose.x_mm, sensor_pose.y_mm, angle);
                if range.is_finite() && range < profile.max_range_mm {
                    range.round() as i32
                } else {
                    0
                }
            })
            .collect()
    }
}

/// 10 m map at 5 cm per cell.
pub fn small_map() -> MapConfig {
    MapConfig {
        size_pixels: 200,
        size_meters: 10.0,
        ..MapConfig::default()
    }
}

/// 360° scanner at the robot centre, no trimmed rays.
pub fn centred_scanner() -> SensorProfile {
    SensorProfile {
        ray_count: 361,
        scan_rate_hz: 10.0,
        field_of_view_degrees: 360.0,
        max_range_mm: 8000.0,
        edge_margin_ray_count: 0,
        mount_offset_mm: 0.0,
    }
}

/// A 4 m × 3 m room around the centre of [`small_map`].
pub fn test_room() -> Room {
    Room::centred(5000.0, 5000.0, 4000.0, 3000.0)
}
