//! Bresenham ray tracing between grid cells.
//!
//! Integer-only line drawing from the sensor cell to the end of a ray. The
//! iterator yields cells in order, start and end included, so the step index
//! doubles as the distance along the ray's major axis:
//!
//! ```text
//! From (0,0) to (7,3):
//!
//!     3 │        ●
//!     2 │     ●●
//!     1 │  ●●
//!     0 ●●
//!       └──────────
//!        0 1 2 3 4 5 6 7
//! ```

use crate::core::types::GridCoord;

/// Bresenham's line algorithm iterator.
pub struct BresenhamLine {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    x_inc: i32,
    y_inc: i32,
    error: i32,
    steep: bool,
    end_x: i32,
    done: bool,
}

impl BresenhamLine {
    /// Create a line iterator from `start` to `end`, both included.
    pub fn new(start: GridCoord, end: GridCoord) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        let steep = dy > dx;

        let (x, y, end_x, end_y, dx, dy) = if steep {
            (start.y, start.x, end.y, end.x, dy, dx)
        } else {
            (start.x, start.y, end.x, end.y, dx, dy)
        };

        Self {
            x,
            y,
            dx,
            dy,
            x_inc: if end_x > x { 1 } else { -1 },
            y_inc: if end_y > y { 1 } else { -1 },
            error: dx / 2,
            steep,
            end_x,
            done: false,
        }
    }

    /// Number of steps along the major axis, i.e. cells yielded minus one.
    pub fn major_steps(start: GridCoord, end: GridCoord) -> i32 {
        (end.x - start.x).abs().max((end.y - start.y).abs())
    }
}

impl Iterator for BresenhamLine {
    type Item = GridCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = if self.steep {
            GridCoord::new(self.y, self.x)
        } else {
            GridCoord::new(self.x, self.y)
        };

        if self.x == self.end_x {
            self.done = true;
            return Some(result);
        }

        self.error -= self.dy;
        if self.error < 0 {
            self.y += self.y_inc;
            self.error += self.dx;
        }
        self.x += self.x_inc;

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.end_x - self.x).unsigned_abs() as usize + 1;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_line() {
        let cells: Vec<_> = BresenhamLine::new(GridCoord::new(0, 0), GridCoord::new(4, 0)).collect();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0], GridCoord::new(0, 0));
        assert_eq!(cells[4], GridCoord::new(4, 0));
        assert!(cells.iter().all(|c| c.y == 0));
    }

    #[test]
    fn test_vertical_line_downwards() {
        let cells: Vec<_> =
            BresenhamLine::new(GridCoord::new(2, 5), GridCoord::new(2, 1)).collect();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0], GridCoord::new(2, 5));
        assert_eq!(cells[4], GridCoord::new(2, 1));
    }

    #[test]
    fn test_diagonal_line() {
        let cells: Vec<_> =
            BresenhamLine::new(GridCoord::new(0, 0), GridCoord::new(-3, -3)).collect();
        assert_eq!(
            cells,
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(-1, -1),
                GridCoord::new(-2, -2),
                GridCoord::new(-3, -3)
            ]
        );
    }

    #[test]
    fn test_shallow_line_is_connected() {
        let start = GridCoord::new(0, 0);
        let end = GridCoord::new(7, 3);
        let cells: Vec<_> = BresenhamLine::new(start, end).collect();
        assert_eq!(cells.len() as i32, BresenhamLine::major_steps(start, end) + 1);
        assert_eq!(*cells.last().unwrap(), end);
        for pair in cells.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, 1);
            assert!((pair[1].y - pair[0].y).abs() <= 1);
        }
    }

    #[test]
    fn test_single_cell() {
        let line = BresenhamLine::new(GridCoord::new(3, 3), GridCoord::new(3, 3));
        assert_eq!(line.len(), 1);
        assert_eq!(line.collect::<Vec<_>>(), vec![GridCoord::new(3, 3)]);
    }
}
