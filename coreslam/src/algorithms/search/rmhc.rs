//! Random-mutation hill climbing (RMHC).
//!
//! Greedy local search around the motion prior:
//!
//! ```text
//! best ← start, best_score ← score(start)
//! repeat max_iterations times:
//!     candidate ← best + (N(0,σxy), N(0,σxy), N(0,σθ))
//!     if score(candidate) < best_score: best ← candidate
//!     after max_iterations/3 stale proposals in a row:
//!         halve σxy and σθ if best improved since the last halving
//! ```
//!
//! Worse candidates are never accepted, so the returned pose scores no
//! higher than the start. The cost is fixed by `max_iterations`.
//!
//! The generator is a `ChaCha8Rng` owned by the search and seeded explicitly,
//! so a given seed, map and scan always produce the same proposals. Each
//! proposal draws three standard normals, in x, y, theta order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use super::PoseSearch;
use crate::algorithms::mapping::OccupancyGrid;
use crate::core::types::{Pose2D, ScanPointSet};
use crate::error::{CoreSlamError, Result};

/// Configuration for RMHC search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParameters {
    /// Standard deviation of position perturbations (mm)
    pub sigma_xy_mm: f64,
    /// Standard deviation of heading perturbations (degrees)
    pub sigma_theta_degrees: f64,
    /// Number of candidate poses scored per search
    pub max_iterations: usize,
    /// Generator seed; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            sigma_xy_mm: 100.0,
            sigma_theta_degrees: 20.0,
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl SearchParameters {
    /// Reject negative or non-finite sigmas.
    pub fn validate(&self) -> Result<()> {
        if !(self.sigma_xy_mm.is_finite() && self.sigma_xy_mm >= 0.0) {
            return Err(CoreSlamError::InvalidSearch(format!(
                "sigma_xy_mm must be non-negative, got {}",
                self.sigma_xy_mm
            )));
        }
        if !(self.sigma_theta_degrees.is_finite() && self.sigma_theta_degrees >= 0.0) {
            return Err(CoreSlamError::InvalidSearch(format!(
                "sigma_theta_degrees must be non-negative, got {}",
                self.sigma_theta_degrees
            )));
        }
        Ok(())
    }
}

/// Outcome of one RMHC search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best pose found
    pub pose: Pose2D,
    /// Score of the best pose
    pub score: f64,
    /// Score of the starting pose
    pub start_score: f64,
    /// Candidates scored
    pub iterations: usize,
    /// Candidates that improved on the best
    pub accepted: usize,
}

/// RMHC pose search with an owned, seeded generator.
#[derive(Debug, Clone)]
pub struct RmhcSearch {
    params: SearchParameters,
    rng: ChaCha8Rng,
    last_result: Option<SearchResult>,
}

impl RmhcSearch {
    /// Create a new search, seeding the generator from `params.seed`.
    pub fn new(params: SearchParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            rng: Self::fresh_rng(params.seed),
            params,
            last_result: None,
        })
    }

    fn fresh_rng(seed: Option<u64>) -> ChaCha8Rng {
        match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Search parameters in use.
    pub fn params(&self) -> &SearchParameters {
        &self.params
    }

    /// Result of the most recent search.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Run the search, reporting every scored candidate to `on_proposal`.
    pub fn search_with<F>(
        &mut self,
        start: Pose2D,
        scan: &ScanPointSet,
        grid: &OccupancyGrid,
        mut on_proposal: F,
    ) -> SearchResult
    where
        F: FnMut(&Pose2D, f64),
    {
        let max_iterations = self.params.max_iterations;
        let stale_limit = max_iterations / 3;

        let start_score = grid.score(scan, &start);
        let mut best = start;
        let mut best_score = start_score;
        let mut sigma_xy = self.params.sigma_xy_mm;
        let mut sigma_theta = self.params.sigma_theta_degrees;
        let mut stale = 0usize;
        let mut improved = false;
        let mut accepted = 0usize;

        for _ in 0..max_iterations {
            let nx: f64 = self.rng.sample(StandardNormal);
            let ny: f64 = self.rng.sample(StandardNormal);
            let nt: f64 = self.rng.sample(StandardNormal);
            let candidate = Pose2D::new(
                best.x_mm + sigma_xy * nx,
                best.y_mm + sigma_xy * ny,
                best.theta_degrees + sigma_theta * nt,
            );

            let score = grid.score(scan, &candidate);
            on_proposal(&candidate, score);

            if score < best_score {
                log::trace!("RMHC accepted {} (score {:.1})", candidate, score);
                best = candidate;
                best_score = score;
                accepted += 1;
                improved = true;
            } else {
                stale += 1;
            }

            if stale > stale_limit {
                if improved {
                    sigma_xy *= 0.5;
                    sigma_theta *= 0.5;
                    improved = false;
                }
                stale = 0;
            }
        }

        let result = SearchResult {
            pose: best,
            score: best_score,
            start_score,
            iterations: max_iterations,
            accepted,
        };
        self.last_result = Some(result);
        result
    }

    /// Run the search without observing proposals.
    pub fn search(&mut self, start: Pose2D, scan: &ScanPointSet, grid: &OccupancyGrid) -> SearchResult {
        self.search_with(start, scan, grid, |_, _| {})
    }
}

impl PoseSearch for RmhcSearch {
    fn refine(&mut self, start: Pose2D, scan: &ScanPointSet, grid: &OccupancyGrid) -> Pose2D {
        let result = self.search(start, scan, grid);
        log::debug!(
            "RMHC: score {:.1} -> {:.1}, {} of {} accepted",
            result.start_score,
            result.score,
            result.accepted,
            result.iterations
        );
        result.pose
    }

    fn name(&self) -> &'static str {
        "rmhc"
    }

    /// Reseed from the configured seed and forget the last result.
    fn reset(&mut self) {
        self.rng = Self::fresh_rng(self.params.seed);
        self.last_result = None;
    }
}
