//! I/O infrastructure.
//!
//! Readers for recorded sessions. The core consumes plain range arrays and
//! odometry triples; everything here only produces those.

pub mod mines_log;

pub use mines_log::{MinesLog, MinesRecord};
