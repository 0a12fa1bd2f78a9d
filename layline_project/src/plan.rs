// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The top-down plan view projection.

use kurbo::{Point, Size, Vec2};

use crate::GroundMapper;
use crate::zoom::Zoom;

/// Screen pixels per world unit at neutral zoom.
pub const DEFAULT_PIXELS_PER_UNIT: f64 = 15.0;

/// The main top-down view: a linear world↔screen mapping with pan and zoom.
///
/// The mapping is `screen = origin + ground * scale`, where `origin` is the
/// screen point of the world origin and `scale` is
/// [`PlanProjection::pixels_per_unit`] times the current zoom factor.
/// Ground y is world Z, so world Z runs down the screen's Y axis, a fixed
/// orientation rather than a parameter.
///
/// Panning moves `origin`; zooming rescales around a chosen anchor so the
/// world point under the cursor stays put.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanProjection {
    origin: Point,
    pixels_per_unit: f64,
    zoom: Zoom,
}

impl PlanProjection {
    /// Creates a projection with the world origin at `origin` and default
    /// scale and zoom.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            zoom: Zoom::default(),
        }
    }

    /// Creates a projection with the world origin at the viewport center,
    /// the conventional starting state for the plan view.
    #[must_use]
    pub fn centered_in(viewport: Size) -> Self {
        Self::new(Point::new(viewport.width / 2.0, viewport.height / 2.0))
    }

    /// Overrides the pixels-per-world-unit base scale.
    #[must_use]
    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f64) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    /// Returns the screen position of the world origin.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Sets the screen position of the world origin.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.origin += delta;
    }

    /// Returns the pixels-per-world-unit base scale.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Returns the zoom state.
    #[must_use]
    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    /// Returns the effective scale: base pixels-per-unit times zoom.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.pixels_per_unit * self.zoom.factor()
    }

    /// Applies wheel notches, keeping the world point under `anchor` fixed
    /// on screen.
    pub fn zoom_about(&mut self, anchor: Point, notches: i32) {
        let pinned = self.screen_to_world(anchor);
        self.zoom.apply_notches(notches);
        let scale = self.scale();
        self.origin = Point::new(anchor.x - pinned.x * scale, anchor.y - pinned.y * scale);
    }

    /// Sets the zoom factor directly (clamped), keeping the origin fixed.
    pub fn set_zoom(&mut self, factor: f64) {
        self.zoom.set(factor);
    }

    /// Maps a ground point to screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, ground: Point) -> Point {
        let s = self.scale();
        Point::new(self.origin.x + ground.x * s, self.origin.y + ground.y * s)
    }

    /// Maps a screen point to ground coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let s = self.scale();
        Point::new((screen.x - self.origin.x) / s, (screen.y - self.origin.y) / s)
    }
}

impl GroundMapper for PlanProjection {
    fn ground_point(&self, screen: Point) -> Option<Point> {
        Some(self.screen_to_world(screen))
    }
}
