//! CoreSLAM - single-hypothesis laser SLAM for 2D rangefinders
//!
//! Estimates a robot's pose and builds an occupancy map from consecutive
//! laser scans and optional wheel odometry, following the CoreSLAM
//! (tinySLAM) family of algorithms.
//!
//! # Architecture
//!
//! The crate is organized into 5 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      bin/                           │  ← coreslam-replay
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                      io/                            │  ← Log readers
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    engine/                          │  ← Cycle orchestration
//! │                 (PoseEstimator)                     │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                  algorithms/                        │  ← Core algorithms
//! │              (mapping, search)                      │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   sensors/                          │  ← Sensor processing
//! │        (lidar profiles, preprocessing, odometry)    │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                (types, math)                        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # One cycle
//!
//! 1. Build a `span = 3` point set for mapping and a `span = 1` set for scoring.
//! 2. Apply the odometry delta and the laser mount offset to the last pose.
//! 3. Refine that prior against the map (deterministic or RMHC).
//! 4. Integrate the mapping set at the refined pose.
//! 5. Remove the mount offset and commit the robot-centre pose.
//!
//! Units: millimeters and degrees for poses and ranges, meters for the map's
//! physical size.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Sensor processing (depends on core)
// ============================================================================
pub mod sensors;

// ============================================================================
// Layer 3: Algorithms (depends on core)
// ============================================================================
pub mod algorithms;

// ============================================================================
// Layer 4: Engine (depends on core, sensors, algorithms)
// ============================================================================
pub mod engine;

// ============================================================================
// Layer 5: I/O infrastructure
// ============================================================================
pub mod io;

// ============================================================================
// Cross-cutting
// ============================================================================
pub mod config;
pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

// Core types
pub use crate::core::math;
pub use crate::core::types::{GridCoord, Pose2D, PoseDelta, ScanPoint, ScanPointSet};

// Sensors
pub use sensors::lidar::{NO_DETECTION, SensorProfile};
pub use sensors::odometry::{EncoderCalibration, RobotKinematicProfile, WheelOdometry};
pub use sensors::preprocessing::ScanBuilder;

// Algorithms
pub use algorithms::mapping::{MapConfig, OccupancyGrid};
pub use algorithms::search::{
    DeterministicSearch, PoseSearch, RmhcSearch, SearchParameters, SearchResult,
};

// Engine
pub use engine::{CycleState, EstimatorConfig, PoseEstimator, SearchStrategy};

// Config and errors
pub use config::{ConfigLoadError, CoreSlamConfig};
pub use error::{CoreSlamError, Result};
