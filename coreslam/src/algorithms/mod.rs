//! Algorithms layer.
//!
//! # Contents
//!
//! - [`mapping`]: Occupancy grid with ray-cast integration and scan scoring
//! - [`search`]: Pose refinement strategies (deterministic, RMHC)

pub mod mapping;
pub mod search;
