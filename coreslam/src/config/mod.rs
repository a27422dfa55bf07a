//! Unified configuration loading for CoreSLAM.
//!
//! Loads every tunable from a single TOML file. Missing sections and missing
//! keys fall back to the classic CoreSLAM defaults.
//!
//! ## Example TOML
//!
//! ```toml
//! [map]
//! size_pixels = 800
//! size_meters = 32.0
//!
//! [sensor]                   # Hokuyo URG-04LX on the Mines rover
//! ray_count = 682
//! scan_rate_hz = 10.0
//! field_of_view_degrees = 240.0
//! max_range_mm = 4000.0
//! edge_margin_ray_count = 70
//! mount_offset_mm = 145.0
//!
//! [robot]
//! wheel_radius_mm = 77.0
//! half_axle_length_mm = 165.0
//!
//! [encoder]
//! ticks_per_cycle = 2000.0
//! timestamp_units_per_second = 1000000.0
//!
//! [search]
//! sigma_xy_mm = 100.0
//! sigma_theta_degrees = 20.0
//! max_iterations = 1000
//! seed = 9999
//!
//! [estimator]
//! quality = 50
//! hole_width_mm = 600.0
//! ```

mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithms::mapping::MapConfig;
use crate::algorithms::search::SearchParameters;
use crate::engine::EstimatorConfig;
use crate::sensors::lidar::SensorProfile;
use crate::sensors::odometry::{EncoderCalibration, RobotKinematicProfile};

pub use error::ConfigLoadError;

/// Full CoreSLAM configuration loaded from TOML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CoreSlamConfig {
    /// Grid geometry and distance field settings
    #[serde(default)]
    pub map: MapConfig,

    /// Laser scanner description
    #[serde(default)]
    pub sensor: SensorProfile,

    /// Wheel geometry
    #[serde(default)]
    pub robot: RobotKinematicProfile,

    /// Raw encoder conversion
    #[serde(default)]
    pub encoder: EncoderCalibration,

    /// RMHC search settings
    #[serde(default)]
    pub search: SearchParameters,

    /// Map update and cycle settings
    #[serde(default)]
    pub estimator: EstimatorConfig,
}

impl CoreSlamConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_toml(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigLoadError> {
        basic_toml::from_str(toml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigLoadError> {
        basic_toml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CoreSlamConfig::default();
        assert_eq!(config.map.size_pixels, 800);
        assert_eq!(config.sensor.ray_count, 682);
        assert_eq!(config.estimator.quality, 50);
        assert_eq!(config.search.max_iterations, 1000);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = CoreSlamConfig::from_toml("").unwrap();
        assert_eq!(config.estimator.hole_width_mm, 600.0);
        assert_eq!(config.search.sigma_xy_mm, 100.0);
    }

    #[test]
    fn test_partial_section() {
        let config = CoreSlamConfig::from_toml(
            r#"
            [search]
            max_iterations = 50
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.search.max_iterations, 50);
        assert_eq!(config.search.seed, Some(7));
        assert_eq!(config.search.sigma_theta_degrees, 20.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = CoreSlamConfig::default();
        config.map.size_pixels = 400;
        config.search.seed = Some(42);
        let toml = config.to_toml().unwrap();
        let parsed = CoreSlamConfig::from_toml(&toml).unwrap();
        assert_eq!(parsed.map.size_pixels, 400);
        assert_eq!(parsed.search.seed, Some(42));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = CoreSlamConfig::from_toml(include_str!("../../configs/coreslam.toml")).unwrap();
        assert_eq!(config.map, MapConfig::default());
        assert_eq!(config.sensor, SensorProfile::default());
        assert_eq!(config.estimator, EstimatorConfig::default());
        assert_eq!(config.search.seed, Some(9999));
    }

    #[test]
    fn test_parse_error() {
        let err = CoreSlamConfig::from_toml("[map\nsize_pixels = ").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[estimator]\nquality = 80").unwrap();
        let config = CoreSlamConfig::load(file.path()).unwrap();
        assert_eq!(config.estimator.quality, 80);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CoreSlamConfig::load(Path::new("/nonexistent/coreslam.toml")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io(_)));
    }
}
