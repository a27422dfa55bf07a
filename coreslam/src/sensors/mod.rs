//! Sensor processing layer.
//!
//! Turns raw sensor readings into the inputs of a SLAM cycle.
//!
//! # Contents
//!
//! - [`lidar`]: Laser scanner profiles and common presets
//! - [`preprocessing`]: Raw range arrays to sensor-frame point sets
//! - [`odometry`]: Wheel encoder readings to pose deltas

pub mod lidar;
pub mod odometry;
pub mod preprocessing;
