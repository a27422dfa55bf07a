//! Pose refinement strategies.
//!
//! Every strategy implements [`PoseSearch`]: given the motion prior, a
//! scoring scan and the current map, propose the pose the scan was most
//! likely taken from.
//!
//! - [`DeterministicSearch`]: trusts the prior completely
//! - [`RmhcSearch`]: random-mutation hill climbing around the prior
//!
//! # Example
//!
//! ```ignore
//! use coreslam::algorithms::search::{PoseSearch, RmhcSearch, SearchParameters};
//!
//! let mut search = RmhcSearch::new(SearchParameters { seed: Some(9999), ..Default::default() })?;
//! let refined = search.refine(prior, &scan, &grid);
//! println!("{} moved the prior by {:.0} mm", search.name(), prior.distance_to(&refined));
//! ```

mod deterministic;
mod rmhc;

pub use deterministic::DeterministicSearch;
pub use rmhc::{RmhcSearch, SearchParameters, SearchResult};

use crate::algorithms::mapping::OccupancyGrid;
use crate::core::types::{Pose2D, ScanPointSet};

/// Trait for pose refinement.
///
/// Implementations may keep internal state (a random generator, statistics)
/// but must not alias the poses they are handed.
pub trait PoseSearch: Send {
    /// Refine `start` against `grid` using `scan`, returning the best pose found.
    fn refine(&mut self, start: Pose2D, scan: &ScanPointSet, grid: &OccupancyGrid) -> Pose2D;

    /// Get the name of this strategy for diagnostics.
    fn name(&self) -> &'static str;

    /// Return to the state right after construction.
    fn reset(&mut self) {}
}
