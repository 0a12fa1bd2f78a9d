// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World-space rays and the ground-plane cast.

use glam::DVec3;

/// A world-space ray.
///
/// Perspective views build one of these per pointer event (see
/// `layline_project`) and cast it onto the ground plane to obtain a candidate
/// world position. The direction is not required to be normalized; the
/// intersection is computed parametrically.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray3 {
    /// Ray origin.
    pub origin: DVec3,
    /// Ray direction.
    pub dir: DVec3,
}

impl Ray3 {
    /// Creates a ray from an origin and direction.
    #[must_use]
    pub fn new(origin: DVec3, dir: DVec3) -> Self {
        Self { origin, dir }
    }

    /// Intersects the ray with the ground plane `y = 0` (normal `(0, 1, 0)`).
    ///
    /// Returns `None` when the ray is parallel to the plane or the
    /// intersection lies behind the origin. Callers treat `None` as a no-op
    /// for the frame: the candidate position is simply not updated.
    ///
    /// The returned point has its Y component pinned to exactly `0.0` so the
    /// ground-constraint invariant survives floating-point error.
    #[must_use]
    pub fn intersect_ground(&self) -> Option<DVec3> {
        let denom = self.dir.y;
        if denom.abs() < crate::EPSILON {
            return None;
        }
        let t = -self.origin.y / denom;
        if t < 0.0 {
            return None;
        }
        let hit = self.origin + self.dir * t;
        Some(DVec3::new(hit.x, 0.0, hit.z))
    }
}
