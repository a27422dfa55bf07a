//! Occupancy grid mapping.
//!
//! The grid stores one belief byte per cell (0 free, 255 occupied, 127
//! unknown) and a derived distance field used for scoring scans.
//!
//! ```text
//!   integrate(scan, pose)                    score(scan, pose)
//!          │                                        ▲
//!          ▼                                        │
//!   ┌─────────────┐   rebuild after update   ┌──────────────┐
//!   │ belief u8[] │ ───────────────────────► │ distance f32 │
//!   └─────────────┘                          └──────────────┘
//!          │
//!          ▼
//!      export() → row-major bytes
//! ```

mod config;
mod distance_field;
mod occupancy_grid;
pub mod raycaster;

pub use config::MapConfig;
pub use distance_field::DistanceField;
pub use occupancy_grid::{FREE, OCCUPIED, OccupancyGrid, PRIOR};
pub use raycaster::BresenhamLine;
