//! Orchestration layer.
//!
//! The [`PoseEstimator`] runs one CoreSLAM cycle per scan:
//!
//! ```text
//! ┌──────┐  prior   ┌────────────────┐  search  ┌──────────┐  integrate  ┌─────────────┐
//! │ Idle │ ───────► │ PriorComputed  │ ───────► │ Searched │ ──────────► │ MapUpdated  │
//! └──────┘          └────────────────┘          └──────────┘             └─────────────┘
//!     ▲                                                                         │
//!     └─────────────────────── commit (robot-centre pose) ──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use coreslam::config::CoreSlamConfig;
//! use coreslam::engine::PoseEstimator;
//!
//! let mut config = CoreSlamConfig::default();
//! config.search.seed = Some(9999);
//! config.search.max_iterations = 50;
//!
//! let mut slam = PoseEstimator::from_config(&config).unwrap();
//! let pose = slam.update(&vec![2000; 682], None).unwrap();
//! println!("{}", pose);
//! ```

mod estimator;

pub use estimator::{CycleState, EstimatorConfig, PoseEstimator, SearchStrategy};
