//! Integer grid cell coordinates.

use serde::{Deserialize, Serialize};

/// Cell coordinates in the occupancy grid.
///
/// Signed so that projections falling outside the grid can be represented
/// before they are clipped or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both axes into `[0, size - 1]`.
    #[inline]
    pub fn clamped(self, size: usize) -> Self {
        let max = size.saturating_sub(1).min(i32::MAX as usize) as i32;
        Self {
            x: self.x.clamp(0, max),
            y: self.y.clamp(0, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_inside_is_unchanged() {
        assert_eq!(GridCoord::new(3, 4).clamped(10), GridCoord::new(3, 4));
    }

    #[test]
    fn test_clamped_outside() {
        assert_eq!(GridCoord::new(-5, 12).clamped(10), GridCoord::new(0, 9));
    }
}
