//! Error types for CoreSLAM.
//!
//! Every error here is raised while building or feeding a session with
//! invalid data. Degenerate sensor input (empty scans, zero elapsed time)
//! is not an error: it degrades to a no-op inside the cycle.

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, CoreSlamError>;

/// CoreSLAM error types
#[derive(Debug, thiserror::Error)]
pub enum CoreSlamError {
    /// Sensor profile cannot describe a real scanner
    #[error("Invalid sensor profile: {0}")]
    InvalidSensorProfile(String),

    /// Wheel geometry or encoder calibration is unusable
    #[error("Invalid kinematic profile: {0}")]
    InvalidKinematics(String),

    /// Map dimensions are unusable
    #[error("Invalid map geometry: {0}")]
    InvalidMap(String),

    /// Search parameters are unusable
    #[error("Invalid search parameters: {0}")]
    InvalidSearch(String),

    /// Raw scan length does not match the sensor profile
    #[error("Scan length mismatch: expected {expected} rays, got {actual}")]
    ScanLengthMismatch {
        /// Ray count of the sensor profile
        expected: usize,
        /// Length of the supplied scan
        actual: usize,
    },

    /// Map byte buffer does not match the grid size
    #[error("Map buffer size mismatch: expected {expected} bytes, got {actual}")]
    MapSizeMismatch {
        /// Cell count of the grid
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// Log line could not be parsed
    #[error("Log parse error at line {line}: {message}")]
    LogParse {
        /// 1-based line number
        line: usize,
        /// What was wrong
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigLoadError),
}
