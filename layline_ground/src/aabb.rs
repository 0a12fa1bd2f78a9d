// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes on the ground plane.

use glam::DVec3;
use kurbo::Point;

/// An axis-aligned bounding box on the ground (X–Z) plane.
///
/// Ground boxes are stored as min/max corners in ground coordinates (see
/// [`crate::ground`] for the world mapping). The usual way to build one for
/// an entity is [`GroundAabb::footprint`], which projects the entity's
/// center position and size onto the plane, ignoring height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundAabb {
    /// Minimum corner.
    pub min: Point,
    /// Maximum corner.
    pub max: Point,
}

impl GroundAabb {
    /// Creates a box from min/max corners.
    ///
    /// The corners are normalized so that `min <= max` on both axes.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a box from a ground-plane center and full extents.
    #[must_use]
    pub fn from_center_size(center: Point, width: f64, depth: f64) -> Self {
        let hw = width.abs() / 2.0;
        let hd = depth.abs() / 2.0;
        Self {
            min: Point::new(center.x - hw, center.y - hd),
            max: Point::new(center.x + hw, center.y + hd),
        }
    }

    /// Computes the ground footprint of an entity from its world-space
    /// center position and size.
    ///
    /// Only the X and Z extents matter: the size's Y component (height) is
    /// cosmetic and never participates in collision geometry.
    #[must_use]
    pub fn footprint(position: DVec3, size: DVec3) -> Self {
        Self::from_center_size(crate::ground(position), size.x, size.z)
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Returns the extent along ground x (world X).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the extent along ground y (world Z).
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns `true` if the box has zero area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Strict overlap test: shared edges do not count.
    ///
    /// Two footprints placed exactly edge-to-edge are *not* overlapping, so
    /// flush placement is always legal. This is the separating-axis test with
    /// strict inequalities on every comparison.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Closed containment test: points on the boundary are inside.
    ///
    /// Hit testing uses this so that a click exactly on a footprint edge
    /// still selects the entity.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns the smallest box covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(cx: f64, cz: f64, side: f64) -> GroundAabb {
        GroundAabb::from_center_size(Point::new(cx, cz), side, side)
    }

    #[test]
    fn footprint_ignores_height() {
        let fp = GroundAabb::footprint(DVec3::new(0.0, 0.0, 0.0), DVec3::new(10.0, 0.2, 4.0));
        assert_eq!(fp.min, Point::new(-5.0, -2.0));
        assert_eq!(fp.max, Point::new(5.0, 2.0));

        let tall = GroundAabb::footprint(DVec3::new(0.0, 0.0, 0.0), DVec3::new(10.0, 99.0, 4.0));
        assert_eq!(fp, tall);
    }

    #[test]
    fn new_normalizes_corners() {
        let b = GroundAabb::new(Point::new(5.0, 2.0), Point::new(-5.0, -2.0));
        assert_eq!(b.min, Point::new(-5.0, -2.0));
        assert_eq!(b.max, Point::new(5.0, 2.0));
    }

    #[test]
    fn overlap_is_strict_on_edges() {
        // Two 10x10 footprints whose AABBs are exactly adjacent on X.
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0, 0.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        // Half-overlapping on X.
        let c = square(5.0, 0.0, 10.0);
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn corner_contact_is_not_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn separation_on_either_axis_means_no_overlap() {
        let a = square(0.0, 0.0, 10.0);
        assert!(!a.overlaps(&square(20.0, 0.0, 10.0)));
        assert!(!a.overlaps(&square(0.0, 20.0, 10.0)));
    }

    #[test]
    fn contains_is_closed_on_edges() {
        let a = square(0.0, 0.0, 10.0);
        assert!(a.contains(Point::new(5.0, 0.0)));
        assert!(a.contains(Point::new(-5.0, -5.0)));
        assert!(a.contains(Point::new(0.0, 0.0)));
        assert!(!a.contains(Point::new(5.000001, 0.0)));
    }

    #[test]
    fn union_covers_both() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0, 4.0, 2.0);
        let u = a.union(&b);
        assert_eq!(u.min, Point::new(-5.0, -5.0));
        assert_eq!(u.max, Point::new(11.0, 5.0));
    }
}
