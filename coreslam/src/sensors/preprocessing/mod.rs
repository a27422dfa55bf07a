//! Scan preprocessing.
//!
//! Turns a raw range array into a [`ScanPointSet`] ready to be projected
//! through a candidate pose.
//!
//! # Pipeline
//!
//! ```text
//! raw ranges → edge trimming → no-detection / max-range gating
//!            → ray angles (+ sub-ray motion correction when span > 1)
//!            → ScanPointSet (sensor frame)
//! ```
//!
//! Each cycle builds two sets from the same raw scan: a `span = 3` set for
//! map integration and a `span = 1` set for pose scoring.
//!
//! [`ScanPointSet`]: crate::core::types::ScanPointSet

mod scan_builder;

pub use scan_builder::{ScanBuilder, build};
