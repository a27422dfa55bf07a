//! Pose type for CoreSLAM.

use serde::{Deserialize, Serialize};

use crate::core::math::normalize_degrees;

/// Pose of the robot (or of its laser) in the map frame.
///
/// Position is in millimeters measured from the map corner, heading in
/// degrees with 0° along +x, growing counter-clockwise. The heading is
/// normalized to (-180, 180] by every constructor and operation here.
///
/// `Pose2D` is `Copy`: a search or a trajectory always holds its own
/// snapshot, never a reference into the estimator's state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in millimeters
    pub x_mm: f64,
    /// Y position in millimeters
    pub y_mm: f64,
    /// Heading in degrees, normalized to (-180, 180]
    pub theta_degrees: f64,
}

impl Pose2D {
    /// Create a new pose with the heading normalized.
    #[inline]
    pub fn new(x_mm: f64, y_mm: f64, theta_degrees: f64) -> Self {
        Self {
            x_mm,
            y_mm,
            theta_degrees: normalize_degrees(theta_degrees),
        }
    }

    /// Pose at the origin facing +x.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x_mm: 0.0,
            y_mm: 0.0,
            theta_degrees: 0.0,
        }
    }

    /// Heading in radians.
    #[inline]
    pub fn theta_radians(&self) -> f64 {
        self.theta_degrees.to_radians()
    }

    /// Move `distance_mm` along the current heading, keeping the heading.
    #[inline]
    pub fn advanced(&self, distance_mm: f64) -> Pose2D {
        let (sin_t, cos_t) = self.theta_radians().sin_cos();
        Pose2D {
            x_mm: self.x_mm + distance_mm * cos_t,
            y_mm: self.y_mm + distance_mm * sin_t,
            theta_degrees: self.theta_degrees,
        }
    }

    /// Same position, heading rotated by `delta_degrees`.
    #[inline]
    pub fn rotated(&self, delta_degrees: f64) -> Pose2D {
        Pose2D::new(self.x_mm, self.y_mm, self.theta_degrees + delta_degrees)
    }

    /// Transform a point from this pose's local frame to the map frame.
    #[inline]
    pub fn transform_point(&self, x_mm: f64, y_mm: f64) -> (f64, f64) {
        let (sin_t, cos_t) = self.theta_radians().sin_cos();
        (
            self.x_mm + x_mm * cos_t - y_mm * sin_t,
            self.y_mm + x_mm * sin_t + y_mm * cos_t,
        )
    }

    /// Euclidean distance between the positions of two poses.
    #[inline]
    pub fn distance_to(&self, other: &Pose2D) -> f64 {
        (self.x_mm - other.x_mm).hypot(self.y_mm - other.y_mm)
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Display for Pose2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x = {:8.0} mm  y = {:8.0} mm  theta = {:+7.2} deg",
            self.x_mm, self.y_mm, self.theta_degrees
        )
    }
}
