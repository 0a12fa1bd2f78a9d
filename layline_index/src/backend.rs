// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial index implementations.

use kurbo::Point;
use layline_ground::GroundAabb;

/// Storage abstraction behind [`crate::FootprintIndex`].
///
/// Slots are caller-assigned dense indices; a backend only stores the
/// footprint registered for each slot and answers the two spatial queries.
///
/// ## Query semantics
///
/// These are part of the contract, not an implementation detail:
///
/// - [`Backend::visit_point`] uses **closed** containment: a point exactly
///   on a footprint edge is a hit (see [`GroundAabb::contains`]).
/// - [`Backend::visit_rect`] uses **strict** overlap: footprints that only
///   share an edge with the query rectangle are not reported (see
///   [`GroundAabb::overlaps`]). This is what lets entities sit flush
///   against each other without being flagged as colliding.
///
/// Visit order is unspecified; callers that need ordering (for example
/// z-order hit resolution) impose it themselves.
pub trait Backend: Default {
    /// Registers a footprint for a new slot.
    fn insert(&mut self, slot: usize, aabb: GroundAabb);

    /// Replaces the footprint registered for `slot`.
    fn update(&mut self, slot: usize, aabb: GroundAabb);

    /// Unregisters `slot`.
    fn remove(&mut self, slot: usize);

    /// Drops all registered footprints.
    fn clear(&mut self);

    /// Visits every slot whose footprint contains `p` (closed intervals).
    fn visit_point<F: FnMut(usize)>(&self, p: Point, f: F);

    /// Visits every slot whose footprint strictly overlaps `rect`.
    fn visit_rect<F: FnMut(usize)>(&self, rect: &GroundAabb, f: F);
}
