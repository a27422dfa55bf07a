//! Incremental motion between two cycles.

use serde::{Deserialize, Serialize};

/// Motion increment reported by odometry.
///
/// `translation_mm` is the forward travel, `rotation_degrees` the heading
/// change and `elapsed_seconds` the time it took. A delta with no positive
/// elapsed time carries no motion: the constructor zeroes translation and
/// rotation in that case.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseDelta {
    /// Forward travel in millimeters
    pub translation_mm: f64,
    /// Heading change in degrees
    pub rotation_degrees: f64,
    /// Time between the two readings in seconds
    pub elapsed_seconds: f64,
}

impl PoseDelta {
    /// Create a delta. Motion is dropped when `elapsed_seconds <= 0`.
    pub fn new(translation_mm: f64, rotation_degrees: f64, elapsed_seconds: f64) -> Self {
        if elapsed_seconds > 0.0 && elapsed_seconds.is_finite() {
            Self {
                translation_mm,
                rotation_degrees,
                elapsed_seconds,
            }
        } else {
            Self {
                translation_mm: 0.0,
                rotation_degrees: 0.0,
                elapsed_seconds: elapsed_seconds.max(0.0),
            }
        }
    }

    /// Re-apply the elapsed-time rule to a delta built by struct literal
    /// or deserialization.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::new(self.translation_mm, self.rotation_degrees, self.elapsed_seconds)
    }

    /// No motion.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// True when the delta carries neither translation nor rotation.
    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.translation_mm == 0.0 && self.rotation_degrees == 0.0
    }

    /// Rate-normalized motion as `(mm/s, deg/s)`, zero without elapsed time.
    pub fn velocities(&self) -> (f64, f64) {
        if self.elapsed_seconds > 0.0 {
            (
                self.translation_mm / self.elapsed_seconds,
                self.rotation_degrees / self.elapsed_seconds,
            )
        } else {
            (0.0, 0.0)
        }
    }
}
