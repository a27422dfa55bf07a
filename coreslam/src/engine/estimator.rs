//! CoreSLAM pose estimator.

use serde::{Deserialize, Serialize};

use crate::algorithms::mapping::{MapConfig, OccupancyGrid};
use crate::algorithms::search::{DeterministicSearch, PoseSearch, RmhcSearch, SearchParameters};
use crate::config::CoreSlamConfig;
use crate::core::types::{Pose2D, PoseDelta};
use crate::error::{CoreSlamError, Result};
use crate::sensors::lidar::SensorProfile;
use crate::sensors::preprocessing::ScanBuilder;

/// Which refinement the estimator runs between prior and map update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Trust the motion prior
    Deterministic,
    /// Random-mutation hill climbing
    #[default]
    Rmhc,
}

/// Configuration for the pose estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Integration blend rate, 0-255
    pub quality: u8,
    /// Obstacle smear width (mm)
    pub hole_width_mm: f64,
    /// Sub-rays per ray for map integration
    pub map_span: usize,
    /// Sub-rays per ray for pose scoring
    pub score_span: usize,
    /// Search used by [`PoseEstimator::from_config`]
    pub strategy: SearchStrategy,
    /// Starting robot pose; the map centre when unset
    pub initial_pose: Option<Pose2D>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            quality: 50,
            hole_width_mm: 600.0,
            map_span: 3,
            score_span: 1,
            strategy: SearchStrategy::Rmhc,
            initial_pose: None,
        }
    }
}

impl EstimatorConfig {
    /// Reject unusable settings.
    pub fn validate(&self) -> Result<()> {
        if !(self.hole_width_mm.is_finite() && self.hole_width_mm >= 0.0) {
            return Err(CoreSlamError::InvalidMap(format!(
                "hole_width_mm must be non-negative, got {}",
                self.hole_width_mm
            )));
        }
        if self.map_span == 0 || self.score_span == 0 {
            return Err(CoreSlamError::InvalidSensorProfile(
                "scan spans must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Phase of the current update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Waiting for a scan
    Idle,
    /// Motion prior applied to the previous pose
    PriorComputed,
    /// Search finished
    Searched,
    /// Scan integrated, pose committed
    MapUpdated,
}

/// Single-hypothesis CoreSLAM.
///
/// Owns the map, the previous-pose baseline and the search strategy; two
/// estimators never share state. One call to [`update`](Self::update) runs a
/// complete cycle before returning.
pub struct PoseEstimator {
    config: EstimatorConfig,
    scans: ScanBuilder,
    grid: OccupancyGrid,
    search: Box<dyn PoseSearch>,
    initial_pose: Pose2D,
    pose: Pose2D,
    trajectory: Vec<Pose2D>,
    state: CycleState,
}

impl PoseEstimator {
    /// Create an estimator with a custom search strategy.
    pub fn new(
        map: MapConfig,
        sensor: SensorProfile,
        config: EstimatorConfig,
        search: Box<dyn PoseSearch>,
    ) -> Result<Self> {
        config.validate()?;
        let scans = ScanBuilder::new(sensor)?;
        let grid = OccupancyGrid::new(map)?;

        let initial_pose = config.initial_pose.unwrap_or_else(|| {
            let (x, y) = grid.center_mm();
            Pose2D::new(x, y, 0.0)
        });

        log::info!(
            "CoreSLAM: {}x{} px over {} m, {} search, quality {}, hole width {} mm",
            grid.size_pixels(),
            grid.size_pixels(),
            grid.size_meters(),
            search.name(),
            config.quality,
            config.hole_width_mm
        );

        Ok(Self {
            config,
            scans,
            grid,
            search,
            initial_pose,
            pose: initial_pose,
            trajectory: Vec::new(),
            state: CycleState::Idle,
        })
    }

    /// Create an estimator that trusts odometry.
    pub fn deterministic(
        map: MapConfig,
        sensor: SensorProfile,
        config: EstimatorConfig,
    ) -> Result<Self> {
        Self::new(map, sensor, config, Box::new(DeterministicSearch::new()))
    }

    /// Create an estimator refining poses with RMHC.
    pub fn rmhc(
        map: MapConfig,
        sensor: SensorProfile,
        config: EstimatorConfig,
        params: SearchParameters,
    ) -> Result<Self> {
        Self::new(map, sensor, config, Box::new(RmhcSearch::new(params)?))
    }

    /// Create an estimator from a full configuration.
    pub fn from_config(config: &CoreSlamConfig) -> Result<Self> {
        let map = config.map.clone();
        let sensor = config.sensor.clone();
        let estimator = config.estimator.clone();
        match config.estimator.strategy {
            SearchStrategy::Deterministic => Self::deterministic(map, sensor, estimator),
            SearchStrategy::Rmhc => Self::rmhc(map, sensor, estimator, config.search.clone()),
        }
    }

    /// Run one cycle: prior, search, map update, commit.
    ///
    /// `pose_delta` is the raw odometry since the previous scan, or `None`
    /// for a scan-only update. Returns the committed robot-centre pose. A scan
    /// of the wrong length is rejected before anything changes.
    pub fn update(&mut self, raw_ranges: &[i32], pose_delta: Option<PoseDelta>) -> Result<Pose2D> {
        self.scans.check_len(raw_ranges)?;
        self.state = CycleState::Idle;

        let delta = pose_delta.map(|d| d.normalized()).unwrap_or_default();
        let map_scan = self.scans.build(raw_ranges, &delta, self.config.map_span)?;
        let score_scan = self.scans.build(raw_ranges, &delta, self.config.score_span)?;

        let start = self.prior(&delta);
        self.state = CycleState::PriorComputed;

        let best = self.search.refine(start, &score_scan, &self.grid);
        self.state = CycleState::Searched;

        self.grid.integrate(
            &map_scan,
            &best,
            self.config.quality,
            self.config.hole_width_mm,
        );
        self.state = CycleState::MapUpdated;

        self.pose = best.advanced(-self.mount_offset_mm());
        self.trajectory.push(self.pose);

        log::debug!(
            "Cycle {}: {} ({} scoring points, {} mapping points)",
            self.trajectory.len(),
            self.pose,
            score_scan.len(),
            map_scan.len()
        );
        Ok(self.pose)
    }

    /// Sensor pose hypothesis for the next scan.
    ///
    /// Translation and mount offset are both projected along the previous
    /// heading before the rotation is added. A delta without positive elapsed
    /// time moves nothing.
    pub fn prior(&self, delta: &PoseDelta) -> Pose2D {
        let delta = delta.normalized();
        self.pose
            .advanced(delta.translation_mm + self.mount_offset_mm())
            .rotated(delta.rotation_degrees)
    }

    /// Committed robot-centre pose.
    pub fn pose(&self) -> Pose2D {
        self.pose
    }

    /// Committed poses, one per completed cycle.
    pub fn trajectory(&self) -> &[Pose2D] {
        &self.trajectory
    }

    /// The map built so far.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Row-major bytes of the map.
    pub fn export_map(&self) -> Vec<u8> {
        self.grid.export()
    }

    /// Phase reached by the latest cycle.
    pub fn cycle_state(&self) -> CycleState {
        self.state
    }

    /// Name of the search strategy.
    pub fn search_name(&self) -> &'static str {
        self.search.name()
    }

    /// Estimator settings.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Clear the map and return to the initial pose.
    ///
    /// The search is reset too, so a seeded session replays from the start.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.search.reset();
        self.pose = self.initial_pose;
        self.trajectory.clear();
        self.state = CycleState::Idle;
    }

    fn mount_offset_mm(&self) -> f64 {
        self.scans.profile().mount_offset_mm
    }
}
