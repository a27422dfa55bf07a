//! Truncated distance-to-obstacle field.
//!
//! Every cell holds the grid-step distance (in cells) to the nearest cell
//! whose belief reaches the occupied threshold. Axis steps cost 1 and
//! diagonal steps √2, so the field approximates Euclidean distance with an
//! octile metric. Distances beyond `max_distance` are stored as
//! `max_distance`, which also serves as the value of an empty map.

use std::collections::VecDeque;

use crate::core::types::GridCoord;

const NEIGHBORS_4: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const NEIGHBORS_DIAG: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Distance field over a square grid.
#[derive(Debug, Clone)]
pub struct DistanceField {
    size: usize,
    max_distance: f32,
    values: Vec<f32>,
}

impl DistanceField {
    /// Create a field with no obstacles.
    pub fn new(size: usize, max_distance: f32) -> Self {
        Self {
            size,
            max_distance,
            values: vec![max_distance; size * size],
        }
    }

    /// Truncation radius in cells.
    #[inline]
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Distance at a cell, `max_distance` outside the grid.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> f32 {
        self.index(coord)
            .map(|i| self.values[i])
            .unwrap_or(self.max_distance)
    }

    /// Raw row-major values.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.size
            && (coord.y as usize) < self.size
        {
            Some(coord.y as usize * self.size + coord.x as usize)
        } else {
            None
        }
    }

    /// Recompute the whole field from belief cells.
    ///
    /// Seeds every cell at or above `threshold` with 0 and relaxes outward
    /// breadth-first, stopping at the truncation radius.
    pub fn rebuild(&mut self, cells: &[u8], threshold: u8) {
        self.values.fill(self.max_distance);

        let mut queue = VecDeque::new();
        for (i, &belief) in cells.iter().enumerate() {
            if belief >= threshold {
                self.values[i] = 0.0;
                queue.push_back((
                    GridCoord::new((i % self.size) as i32, (i / self.size) as i32),
                    0.0f32,
                ));
            }
        }
        let seeds = queue.len();

        let diag = std::f32::consts::SQRT_2;
        while let Some((coord, dist)) = queue.pop_front() {
            // Skip entries superseded by a shorter path
            if self.get(coord) < dist {
                continue;
            }
            for (step, offsets) in [(1.0f32, NEIGHBORS_4), (diag, NEIGHBORS_DIAG)] {
                for (dx, dy) in offsets {
                    let neighbor = GridCoord::new(coord.x + dx, coord.y + dy);
                    let new_dist = dist + step;
                    if new_dist >= self.max_distance {
                        continue;
                    }
                    if let Some(idx) = self.index(neighbor)
                        && new_dist < self.values[idx]
                    {
                        self.values[idx] = new_dist;
                        queue.push_back((neighbor, new_dist));
                    }
                }
            }
        }

        log::trace!("Distance field rebuilt from {} obstacle cells", seeds);
    }
}
