//! Core foundation layer.
//!
//! This is the bottom layer of the SLAM stack with no internal dependencies.
//! All other layers depend on core.
//!
//! # Contents
//!
//! - [`types`]: Core data types (poses, pose deltas, scan points, grid cells)
//! - [`math`]: Angle normalization and pixel rounding

pub mod math;
pub mod types;
