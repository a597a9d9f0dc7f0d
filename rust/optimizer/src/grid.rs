// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grid spatial hash for neighbor candidate lookup
//!
//! Divides the plane into square cells of side `cell_size`; a radius
//! query checks the 3x3 neighborhood, so it is exact as long as
//! `cell_size >= radius`. Keeps the edge-building pass near linear
//! when the caller asks for the fast path.

use backing_geometry::Point2D;
use rustc_hash::FxHashMap;

#[derive(Debug)]
pub struct SpatialGrid {
    cell_size: f64,
    grid: FxHashMap<(i64, i64), Vec<usize>>,
}

impl SpatialGrid {
    /// `cell_size` must be >= the query radius for exact results.
    pub fn new(cell_size: f64) -> Self {
        Self {
            // Degenerate radii still need a positive cell size
            cell_size: cell_size.max(1.0),
            grid: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, index: usize, p: &Point2D) {
        let cell = self.cell_coords(p);
        self.grid.entry(cell).or_default().push(index);
    }

    /// Indices of points within `radius` of `p`, in insertion order.
    pub fn find_within(&self, points: &[Point2D], p: &Point2D, radius: f64) -> Vec<usize> {
        let (cx, cy) = self.cell_coords(p);
        let mut result = Vec::new();

        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(indices) = self.grid.get(&(cx + dx, cy + dy)) {
                    for &i in indices {
                        if points[i].distance_to(p) <= radius {
                            result.push(i);
                        }
                    }
                }
            }
        }

        result.sort_unstable();
        result
    }

    fn cell_coords(&self, p: &Point2D) -> (i64, i64) {
        (
            (p.x / self.cell_size).floor() as i64,
            (p.y / self.cell_size).floor() as i64,
        )
    }
}
