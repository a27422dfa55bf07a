//! Odometry integration.
//!
//! Converts raw wheel encoder readings into [`PoseDelta`] motion priors.
//!
//! # Example
//!
//! ```
//! use coreslam::sensors::odometry::{EncoderCalibration, RobotKinematicProfile, WheelOdometry};
//!
//! let mut odom = WheelOdometry::new(
//!     RobotKinematicProfile::default(),
//!     EncoderCalibration::default(),
//! )
//! .unwrap();
//!
//! // First reading only sets the baseline
//! assert!(odom.integrate(0.0, 0.0, 0.0).is_stationary());
//!
//! // Subsequent readings return motion since the previous one
//! let delta = odom.integrate(100_000.0, 500.0, 500.0);
//! assert!(delta.translation_mm > 0.0);
//! ```
//!
//! [`PoseDelta`]: crate::core::types::PoseDelta

mod wheel_odometry;

pub use wheel_odometry::{EncoderCalibration, RobotKinematicProfile, WheelOdometry};
