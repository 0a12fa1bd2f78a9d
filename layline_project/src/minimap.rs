// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The miniature overview projection.

use kurbo::Point;

use crate::GroundMapper;

/// Total world span a minimap frames by default, in world units.
pub const DEFAULT_WORLD_EXTENT: f64 = 100.0;

/// A fixed-scale overview of the whole ground plane.
///
/// The minimap is a square of `pixel_size` pixels framing `world_extent`
/// world units, so its scale is `pixel_size / world_extent`: derived from
/// what it frames, independent of the main view's zoom. The world origin
/// sits at the minimap center.
///
/// The composed "zoomed minimap" variant multiplies the main view's zoom
/// factor into the scale; build it with [`MinimapProjection::with_zoom`]
/// and refresh it whenever the main zoom changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapProjection {
    pixel_size: f64,
    world_extent: f64,
    zoom_factor: f64,
}

impl MinimapProjection {
    /// Creates a minimap of `pixel_size` pixels framing the default world
    /// extent.
    #[must_use]
    pub fn new(pixel_size: f64) -> Self {
        Self {
            pixel_size,
            world_extent: DEFAULT_WORLD_EXTENT,
            zoom_factor: 1.0,
        }
    }

    /// Overrides the framed world extent.
    #[must_use]
    pub fn with_world_extent(mut self, world_extent: f64) -> Self {
        self.world_extent = world_extent;
        self
    }

    /// Composes the main view's zoom factor into the scale (the "zoomed
    /// minimap" variant).
    #[must_use]
    pub fn with_zoom(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    /// Returns the minimap's edge length in pixels.
    #[must_use]
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Returns the framed world extent.
    #[must_use]
    pub fn world_extent(&self) -> f64 {
        self.world_extent
    }

    /// Returns the effective scale in pixels per world unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.pixel_size / self.world_extent * self.zoom_factor
    }

    /// Returns the screen position of the world origin: the minimap center.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.pixel_size / 2.0, self.pixel_size / 2.0)
    }

    /// Maps a ground point to minimap pixels.
    #[must_use]
    pub fn world_to_screen(&self, ground: Point) -> Point {
        let origin = self.origin();
        let s = self.scale();
        Point::new(origin.x + ground.x * s, origin.y + ground.y * s)
    }

    /// Maps a minimap pixel to ground coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let origin = self.origin();
        let s = self.scale();
        Point::new((screen.x - origin.x) / s, (screen.y - origin.y) / s)
    }
}

impl GroundMapper for MinimapProjection {
    fn ground_point(&self, screen: Point) -> Option<Point> {
        Some(self.screen_to_world(screen))
    }
}
