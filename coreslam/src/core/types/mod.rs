//! Core data types for CoreSLAM.
//!
//! - [`Pose2D`]: Robot or sensor pose (x, y in millimeters, heading in degrees)
//! - [`PoseDelta`]: Incremental motion between two cycles
//! - [`ScanPoint`], [`ScanPointSet`]: Sensor-frame points derived from a raw scan
//! - [`GridCoord`]: Integer cell coordinates

mod grid;
mod pose;
mod pose_delta;
mod scan;

pub use grid::GridCoord;
pub use pose::Pose2D;
pub use pose_delta::PoseDelta;
pub use scan::{ScanPoint, ScanPointSet};
