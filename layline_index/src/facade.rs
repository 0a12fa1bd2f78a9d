// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slot-addressed facade used by the world store.

use alloc::vec::Vec;

use kurbo::Point;
use layline_ground::GroundAabb;

use crate::backend::Backend;

/// A spatial index over caller-assigned slots.
///
/// This is a thin veneer over a [`Backend`]: the world store assigns slots
/// (its own insertion indices) and the facade forwards operations, adding
/// the collected-query conveniences that most call sites want.
#[derive(Debug, Default)]
pub struct FootprintIndex<B: Backend> {
    backend: B,
}

impl<B: Backend> FootprintIndex<B> {
    /// Creates an index around an explicitly configured backend.
    #[must_use]
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Registers a footprint for a new slot.
    pub fn insert(&mut self, slot: usize, aabb: GroundAabb) {
        self.backend.insert(slot, aabb);
    }

    /// Replaces the footprint registered for `slot`.
    pub fn update(&mut self, slot: usize, aabb: GroundAabb) {
        self.backend.update(slot, aabb);
    }

    /// Unregisters `slot`.
    pub fn remove(&mut self, slot: usize) {
        self.backend.remove(slot);
    }

    /// Drops all registered footprints.
    pub fn clear(&mut self) {
        self.backend.clear();
    }

    /// Visits every slot whose footprint contains `p` (closed intervals).
    pub fn visit_point<F: FnMut(usize)>(&self, p: Point, f: F) {
        self.backend.visit_point(p, f);
    }

    /// Visits every slot whose footprint strictly overlaps `rect`.
    pub fn visit_rect<F: FnMut(usize)>(&self, rect: &GroundAabb, f: F) {
        self.backend.visit_rect(rect, f);
    }

    /// Collects the slots whose footprint contains `p`, in ascending slot
    /// order.
    #[must_use]
    pub fn query_point(&self, p: Point) -> Vec<usize> {
        let mut out = Vec::new();
        self.backend.visit_point(p, |i| out.push(i));
        out.sort_unstable();
        out
    }

    /// Collects the slots whose footprint strictly overlaps `rect`, in
    /// ascending slot order.
    #[must_use]
    pub fn query_rect(&self, rect: &GroundAabb) -> Vec<usize> {
        let mut out = Vec::new();
        self.backend.visit_rect(rect, |i| out.push(i));
        out.sort_unstable();
        out
    }
}
