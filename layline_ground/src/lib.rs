// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layline Ground: geometry primitives for a ground-plane layout world.
//!
//! Layline positions entities in a shared 3D world space but constrains them
//! to the ground plane `y = 0`. This crate owns the small amount of geometry
//! everything else builds on:
//!
//! - The fixed mapping between world space and the ground plane:
//!   [`ground`] drops a world point onto the plane (world X → ground x,
//!   world Z → ground y) and [`lift`] raises a ground point back into world
//!   space with `y = 0`.
//! - [`GroundAabb`]: an axis-aligned bounding box on the ground plane,
//!   usually derived from an entity's center position and size via
//!   [`GroundAabb::footprint`]. Heights never enter collision geometry;
//!   stacking is not modeled.
//! - [`Ray3`]: a world-space ray with an intersection test against the
//!   ground plane, used by perspective projections to turn a pointer
//!   position into a candidate world position.
//!
//! ## Overlap vs. containment
//!
//! The two predicates on [`GroundAabb`] deliberately use different interval
//! conventions:
//!
//! - [`GroundAabb::overlaps`] is **strict**: footprints that merely share an
//!   edge do not overlap, so entities can be placed flush against each other.
//! - [`GroundAabb::contains`] is **closed**: a pointer exactly on a footprint
//!   edge still hits it, so boundary clicks select.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use layline_ground::GroundAabb;
//!
//! let a = GroundAabb::footprint(DVec3::ZERO, DVec3::new(10.0, 0.2, 10.0));
//! let b = GroundAabb::footprint(DVec3::new(10.0, 0.0, 0.0), DVec3::new(10.0, 0.2, 10.0));
//!
//! // Exactly edge-to-edge: legal placement, no overlap.
//! assert!(!a.overlaps(&b));
//!
//! // A point on the shared edge still hits both footprints.
//! assert!(a.contains(kurbo::Point::new(5.0, 0.0)));
//! assert!(b.contains(kurbo::Point::new(5.0, 0.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod aabb;
mod ray;

pub use aabb::GroundAabb;
pub use ray::Ray3;

use glam::DVec3;
use kurbo::Point;

/// Numeric tolerance for geometric comparisons.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` if `a` and `b` are equal within [`EPSILON`].
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Drops a world-space point onto the ground plane.
///
/// World X maps to ground x and world Z maps to ground y; the world Y
/// coordinate is discarded. This orientation is fixed: top-down views render
/// world Z along screen Y.
#[inline]
#[must_use]
pub fn ground(world: DVec3) -> Point {
    Point::new(world.x, world.z)
}

/// Lifts a ground-plane point back into world space with `y = 0`.
///
/// This is the exact inverse of [`ground`] for ground-constrained points.
#[inline]
#[must_use]
pub fn lift(ground: Point) -> DVec3 {
    DVec3::new(ground.x, 0.0, ground.y)
}
