//! Differential-drive odometry from wheel encoders.
//!
//! Raw readings are first converted to wheel rotation angles and seconds by
//! an [`EncoderCalibration`], then differenced against the previous reading:
//!
//! ```text
//! translation = r × (Δleft + Δright)            (Δ in radians)
//! rotation    = (r / half_axle) × (Δright − Δleft)
//! elapsed     = t − t_prev
//! ```
//!
//! The deltas are raw, not divided by the elapsed time; rate normalization
//! is left to the consumer (see [`PoseDelta::velocities`]).

use serde::{Deserialize, Serialize};

use crate::core::types::PoseDelta;
use crate::error::{CoreSlamError, Result};

/// Wheel geometry of a differential-drive robot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotKinematicProfile {
    /// Radius of each odometry wheel (mm)
    pub wheel_radius_mm: f64,
    /// Half the distance between the two wheels (mm)
    pub half_axle_length_mm: f64,
}

impl Default for RobotKinematicProfile {
    fn default() -> Self {
        // Mines rover
        Self {
            wheel_radius_mm: 77.0,
            half_axle_length_mm: 165.0,
        }
    }
}

impl RobotKinematicProfile {
    /// Reject non-positive dimensions.
    pub fn validate(&self) -> Result<()> {
        if !(self.wheel_radius_mm.is_finite() && self.wheel_radius_mm > 0.0) {
            return Err(CoreSlamError::InvalidKinematics(format!(
                "wheel_radius_mm must be positive, got {}",
                self.wheel_radius_mm
            )));
        }
        if !(self.half_axle_length_mm.is_finite() && self.half_axle_length_mm > 0.0) {
            return Err(CoreSlamError::InvalidKinematics(format!(
                "half_axle_length_mm must be positive, got {}",
                self.half_axle_length_mm
            )));
        }
        Ok(())
    }
}

/// Conversion from raw encoder units to degrees and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderCalibration {
    /// Encoder ticks per half wheel revolution
    pub ticks_per_cycle: f64,
    /// Raw timestamp units per second
    pub timestamp_units_per_second: f64,
}

impl Default for EncoderCalibration {
    fn default() -> Self {
        // Mines rover: 2000 ticks per half turn, microsecond timestamps
        Self {
            ticks_per_cycle: 2000.0,
            timestamp_units_per_second: 1_000_000.0,
        }
    }
}

impl EncoderCalibration {
    /// Identity conversion: readings are already degrees and seconds.
    pub fn degrees_and_seconds() -> Self {
        Self {
            ticks_per_cycle: 180.0,
            timestamp_units_per_second: 1.0,
        }
    }

    /// Reject non-positive scale factors.
    pub fn validate(&self) -> Result<()> {
        if !(self.ticks_per_cycle.is_finite() && self.ticks_per_cycle > 0.0) {
            return Err(CoreSlamError::InvalidKinematics(format!(
                "ticks_per_cycle must be positive, got {}",
                self.ticks_per_cycle
            )));
        }
        if !(self.timestamp_units_per_second.is_finite() && self.timestamp_units_per_second > 0.0)
        {
            return Err(CoreSlamError::InvalidKinematics(format!(
                "timestamp_units_per_second must be positive, got {}",
                self.timestamp_units_per_second
            )));
        }
        Ok(())
    }

    /// Raw ticks to wheel rotation in degrees.
    #[inline]
    pub fn ticks_to_degrees(&self, ticks: f64) -> f64 {
        ticks * (180.0 / self.ticks_per_cycle)
    }

    /// Raw timestamp to seconds.
    #[inline]
    pub fn timestamp_to_seconds(&self, timestamp: f64) -> f64 {
        timestamp / self.timestamp_units_per_second
    }
}

#[derive(Debug, Clone, Copy)]
struct Reading {
    seconds: f64,
    left_degrees: f64,
    right_degrees: f64,
}

/// Wheel odometry integrator.
///
/// Holds the previous reading as per-session state; create one instance per
/// robot and session.
#[derive(Debug, Clone)]
pub struct WheelOdometry {
    profile: RobotKinematicProfile,
    calibration: EncoderCalibration,
    last: Option<Reading>,
}

impl WheelOdometry {
    /// Create a new integrator, rejecting invalid geometry or calibration.
    pub fn new(profile: RobotKinematicProfile, calibration: EncoderCalibration) -> Result<Self> {
        profile.validate()?;
        calibration.validate()?;
        Ok(Self {
            profile,
            calibration,
            last: None,
        })
    }

    /// Wheel geometry in use.
    pub fn profile(&self) -> &RobotKinematicProfile {
        &self.profile
    }

    /// Integrate one raw reading.
    ///
    /// Returns a zero delta on the first call. The stored baseline is always
    /// replaced by this reading before returning.
    pub fn integrate(&mut self, timestamp: f64, left: f64, right: f64) -> PoseDelta {
        let current = Reading {
            seconds: self.calibration.timestamp_to_seconds(timestamp),
            left_degrees: self.calibration.ticks_to_degrees(left),
            right_degrees: self.calibration.ticks_to_degrees(right),
        };

        let delta = match self.last {
            Some(prev) => self.delta_between(&prev, &current),
            None => PoseDelta::zero(),
        };

        self.last = Some(current);
        delta
    }

    /// Forget the baseline; the next reading starts a new one.
    pub fn reset(&mut self) {
        self.last = None;
    }

    fn delta_between(&self, prev: &Reading, current: &Reading) -> PoseDelta {
        let d_left = current.left_degrees - prev.left_degrees;
        let d_right = current.right_degrees - prev.right_degrees;

        let translation =
            self.profile.wheel_radius_mm * (d_left.to_radians() + d_right.to_radians());
        let rotation =
            (self.profile.wheel_radius_mm / self.profile.half_axle_length_mm) * (d_right - d_left);

        PoseDelta::new(translation, rotation, current.seconds - prev.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Readings in degrees and seconds, 100 mm wheels on a 200 mm half axle
    fn test_odometry() -> WheelOdometry {
        WheelOdometry::new(
            RobotKinematicProfile {
                wheel_radius_mm: 100.0,
                half_axle_length_mm: 200.0,
            },
            EncoderCalibration::degrees_and_seconds(),
        )
        .unwrap()
    }

    #[test]
    fn test_first_call_returns_zero() {
        let mut odom = test_odometry();
        let delta = odom.integrate(5.0, 1234.0, -99.0);
        assert_eq!(delta, PoseDelta::zero());
    }

    #[test]
    fn test_identical_readings_are_stationary() {
        let mut odom = test_odometry();
        odom.integrate(1.0, 90.0, 90.0);
        let delta = odom.integrate(3.0, 90.0, 90.0);
        assert!(delta.is_stationary());
        assert_relative_eq!(delta.elapsed_seconds, 2.0);
    }

    #[test]
    fn test_straight_forward() {
        let mut odom = test_odometry();
        odom.integrate(0.0, 0.0, 0.0);

        // Both wheels turn 180 degrees: r × (π + π)
        let delta = odom.integrate(1.0, 180.0, 180.0);
        assert_relative_eq!(delta.translation_mm, 200.0 * std::f64::consts::PI, epsilon = 1e-9);
        assert_relative_eq!(delta.rotation_degrees, 0.0);
        assert_relative_eq!(delta.elapsed_seconds, 1.0);
    }

    #[test]
    fn test_rotation_in_place_ccw() {
        let mut odom = test_odometry();
        odom.integrate(0.0, 0.0, 0.0);

        // Right forward, left back: (100 / 200) × (90 − (−90)) = 90°
        let delta = odom.integrate(1.0, -90.0, 90.0);
        assert_relative_eq!(delta.translation_mm, 0.0, epsilon = 1e-9);
        assert_relative_eq!(delta.rotation_degrees, 90.0);
    }

    #[test]
    fn test_rotation_in_place_cw() {
        let mut odom = test_odometry();
        odom.integrate(0.0, 0.0, 0.0);
        let delta = odom.integrate(1.0, 45.0, -45.0);
        assert_relative_eq!(delta.rotation_degrees, -45.0);
    }

    #[test]
    fn test_baseline_always_advances() {
        let mut odom = test_odometry();
        odom.integrate(0.0, 0.0, 0.0);
        odom.integrate(1.0, 10.0, 10.0);
        let delta = odom.integrate(2.0, 20.0, 20.0);
        assert_relative_eq!(delta.translation_mm, 100.0 * 2.0 * 10f64.to_radians(), epsilon = 1e-9);
    }

    #[test]
    fn test_mines_calibration() {
        let mut odom = WheelOdometry::new(
            RobotKinematicProfile::default(),
            EncoderCalibration::default(),
        )
        .unwrap();
        odom.integrate(0.0, 0.0, 0.0);

        // 2000 ticks is half a turn of each 77 mm wheel, 100 ms later
        let delta = odom.integrate(100_000.0, 2000.0, 2000.0);
        assert_relative_eq!(delta.translation_mm, 77.0 * 2.0 * std::f64::consts::PI, epsilon = 1e-9);
        assert_relative_eq!(delta.elapsed_seconds, 0.1, epsilon = 1e-12);
    }

    // ========================================================================
    // Edge Case Tests
    // ========================================================================

    #[test]
    fn test_non_positive_elapsed_is_no_motion() {
        let mut odom = test_odometry();
        odom.integrate(5.0, 0.0, 0.0);
        let delta = odom.integrate(5.0, 180.0, 360.0);
        assert!(delta.is_stationary());

        let delta = odom.integrate(4.0, 360.0, 720.0);
        assert!(delta.is_stationary());
    }

    #[test]
    fn test_reset_restarts_baseline() {
        let mut odom = test_odometry();
        odom.integrate(0.0, 0.0, 0.0);
        odom.reset();
        assert_eq!(odom.integrate(1.0, 500.0, 500.0), PoseDelta::zero());
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let profile = RobotKinematicProfile {
            wheel_radius_mm: 0.0,
            half_axle_length_mm: 165.0,
        };
        assert!(matches!(
            WheelOdometry::new(profile, EncoderCalibration::default()),
            Err(CoreSlamError::InvalidKinematics(_))
        ));

        let calibration = EncoderCalibration {
            ticks_per_cycle: -1.0,
            timestamp_units_per_second: 1.0,
        };
        assert!(WheelOdometry::new(RobotKinematicProfile::default(), calibration).is_err());
    }
}
