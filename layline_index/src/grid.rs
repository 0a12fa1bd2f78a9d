// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform hash-grid backend for larger layouts.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;
use layline_ground::GroundAabb;
use smallvec::SmallVec;

use crate::backend::Backend;

/// Default world-cell edge length.
///
/// Comfortably larger than the typical entity footprint, so most footprints
/// land in one to four cells.
pub const DEFAULT_CELL_SIZE: f64 = 16.0;

/// Uniform hash-grid backend.
///
/// Footprints are registered in every grid cell their AABB touches; queries
/// inspect only the cells the probe touches. Every candidate coming out of a
/// bucket is re-checked against the exact footprint, so results are
/// identical to [`crate::FlatVec`]; the cell size only affects how much
/// work a query does.
pub struct UniformGrid {
    cell_size: f64,
    cells: HashMap<(i64, i64), SmallVec<[usize; 4]>>,
    // Mirror of each slot's footprint, needed to unregister on remove/update
    // and for exact re-checks during queries.
    slots: Vec<Option<GroundAabb>>,
}

impl UniformGrid {
    /// Creates a grid with the given world-cell edge length.
    #[must_use]
    pub fn with_cell_size(cell_size: f64) -> Self {
        let cell_size = if cell_size > 0.0 {
            cell_size
        } else {
            DEFAULT_CELL_SIZE
        };
        Self {
            cell_size,
            cells: HashMap::new(),
            slots: Vec::new(),
        }
    }

    /// Returns the world-cell edge length.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    // Floor division of a coordinate into a cell index, without relying on
    // float `floor` (this crate builds on no_std).
    fn cell_of(&self, v: f64) -> i64 {
        let q = v / self.cell_size;
        let t = q as i64;
        if q < 0.0 && (t as f64) != q { t - 1 } else { t }
    }

    fn cell_bounds(&self, aabb: &GroundAabb) -> (i64, i64, i64, i64) {
        (
            self.cell_of(aabb.min.x),
            self.cell_of(aabb.max.x),
            self.cell_of(aabb.min.y),
            self.cell_of(aabb.max.y),
        )
    }

    fn register(&mut self, slot: usize, aabb: &GroundAabb) {
        let (x0, x1, y0, y1) = self.cell_bounds(aabb);
        for cx in x0..=x1 {
            for cy in y0..=y1 {
                self.cells.entry((cx, cy)).or_default().push(slot);
            }
        }
    }

    fn unregister(&mut self, slot: usize, aabb: &GroundAabb) {
        let (x0, x1, y0, y1) = self.cell_bounds(aabb);
        for cx in x0..=x1 {
            for cy in y0..=y1 {
                let mut emptied = false;
                if let Some(bucket) = self.cells.get_mut(&(cx, cy)) {
                    bucket.retain(|s| *s != slot);
                    emptied = bucket.is_empty();
                }
                if emptied {
                    self.cells.remove(&(cx, cy));
                }
            }
        }
    }
}

impl Default for UniformGrid {
    fn default() -> Self {
        Self::with_cell_size(DEFAULT_CELL_SIZE)
    }
}

impl fmt::Debug for UniformGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("UniformGrid")
            .field("cell_size", &self.cell_size)
            .field("occupied_cells", &self.cells.len())
            .field("alive", &alive)
            .finish_non_exhaustive()
    }
}

impl Backend for UniformGrid {
    fn insert(&mut self, slot: usize, aabb: GroundAabb) {
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, || None);
        }
        if let Some(old) = self.slots[slot] {
            self.unregister(slot, &old);
        }
        self.register(slot, &aabb);
        self.slots[slot] = Some(aabb);
    }

    fn update(&mut self, slot: usize, aabb: GroundAabb) {
        if slot < self.slots.len() {
            self.insert(slot, aabb);
        }
    }

    fn remove(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot)
            && let Some(old) = entry.take()
        {
            self.unregister(slot, &old);
        }
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.slots.clear();
    }

    fn visit_point<F: FnMut(usize)>(&self, p: Point, mut f: F) {
        // A slot is registered at most once per cell, and a point probes a
        // single cell, so no de-duplication is needed here.
        let key = (self.cell_of(p.x), self.cell_of(p.y));
        if let Some(bucket) = self.cells.get(&key) {
            for &slot in bucket {
                if let Some(a) = self.slots[slot].as_ref()
                    && a.contains(p)
                {
                    f(slot);
                }
            }
        }
    }

    fn visit_rect<F: FnMut(usize)>(&self, rect: &GroundAabb, mut f: F) {
        let (x0, x1, y0, y1) = self.cell_bounds(rect);
        let mut candidates: Vec<usize> = Vec::new();
        for cx in x0..=x1 {
            for cy in y0..=y1 {
                if let Some(bucket) = self.cells.get(&(cx, cy)) {
                    candidates.extend_from_slice(bucket);
                }
            }
        }
        candidates.sort_unstable();
        candidates.dedup();
        for slot in candidates {
            if let Some(a) = self.slots[slot].as_ref()
                && a.overlaps(rect)
            {
                f(slot);
            }
        }
    }
}
