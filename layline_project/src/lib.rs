// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layline Project: the projection family.
//!
//! A layout session shows one shared world through several views at once: a
//! top-down plan view with its own pan and zoom, a fixed-scale minimap, and
//! a 3D perspective view. Each view owns a *projection*, a pure, invertible
//! mapping between world ground coordinates and that view's screen pixels,
//! and consistency across views falls out of every projection mapping into
//! the same world model.
//!
//! - [`PlanProjection`]: `screen = origin + ground * scale`, where `scale`
//!   is a fixed pixels-per-world-unit base times a clamped, multiplicative
//!   [`Zoom`]. World Z runs along screen Y; that orientation is fixed, not
//!   configurable.
//! - [`MinimapProjection`]: the same linear form, but the scale derives from
//!   the world extent the minimap frames (`pixel_size / world_extent`) and
//!   is independent of the main view's zoom, unless the composed
//!   "zoomed minimap" variant is built with
//!   [`MinimapProjection::with_zoom`].
//! - [`SceneCamera`]: a perspective camera. The inverse mapping is a ray
//!   cast from the camera through the screen point, intersected with the
//!   ground plane; a ray that misses the plane makes the operation a no-op
//!   for that frame rather than an error.
//! - [`grid_lines`]: the projection-derived grid overlay, phase-aligned so
//!   a line always passes through the world origin regardless of pan and
//!   zoom.
//!
//! The [`GroundMapper`] trait is the one-function contract the interaction
//! controller consumes: "this screen point, on the ground, if anywhere".
//! All three projections implement it, which is what lets a single
//! controller drive drags identically in every view.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use layline_project::{GroundMapper, PlanProjection};
//!
//! // A plan view centered in an 800x600 viewport.
//! let plan = PlanProjection::centered_in(Size::new(800.0, 600.0));
//!
//! // The viewport center is the world origin…
//! assert_eq!(plan.ground_point(Point::new(400.0, 300.0)), Some(Point::ZERO));
//!
//! // …and the mapping inverts exactly.
//! let w = Point::new(3.0, -7.0);
//! assert_eq!(plan.screen_to_world(plan.world_to_screen(w)), w);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod camera;
mod grid;
mod minimap;
mod plan;
mod zoom;

pub use camera::SceneCamera;
pub use grid::{GridLines, grid_lines};
pub use minimap::{DEFAULT_WORLD_EXTENT, MinimapProjection};
pub use plan::{DEFAULT_PIXELS_PER_UNIT, PlanProjection};
pub use zoom::{WHEEL_STEP, Zoom};

use kurbo::Point;

/// The screen→ground inversion contract consumed by the interaction layer.
///
/// Implementations answer where a screen point lands on the ground plane.
/// Linear projections always have an answer; a perspective camera returns
/// `None` when the ray through the point misses the plane, and callers
/// treat that as a no-op for the frame.
pub trait GroundMapper {
    /// Maps a screen-space point onto the ground plane, if possible.
    fn ground_point(&self, screen: Point) -> Option<Point>;
}
