// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The perspective scene camera and its ground-plane inversion.

use core::f64::consts::FRAC_PI_3;

use glam::{DMat4, DVec3, DVec4};
use kurbo::{Point, Size};
use layline_ground::Ray3;

use crate::GroundMapper;

/// A perspective camera over the layout world.
///
/// Unlike the linear projections, the camera's screen↔world mapping goes
/// through a ray cast: a screen point is unprojected into a ray from the
/// camera, and the candidate world position is where that ray meets the
/// ground plane. A ray that misses the plane (horizon or sky) yields no
/// point, and callers treat the frame as a no-op.
///
/// The view and projection matrices are cached and rebuilt whenever a
/// parameter changes, so per-frame queries are matrix applications only.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneCamera {
    eye: DVec3,
    target: DVec3,
    up: DVec3,
    fov_y: f64,
    z_near: f64,
    z_far: f64,
    viewport: Size,
    view_proj: DMat4,
    inv_view_proj: DMat4,
}

impl SceneCamera {
    /// Creates a camera at `eye` looking at `target`, rendering into a
    /// viewport of the given pixel size.
    ///
    /// Defaults: 60° vertical field of view, near 0.1, far 1000, +Y up.
    #[must_use]
    pub fn new(eye: DVec3, target: DVec3, viewport: Size) -> Self {
        let mut camera = Self {
            eye,
            target,
            up: DVec3::Y,
            fov_y: FRAC_PI_3,
            z_near: 0.1,
            z_far: 1000.0,
            viewport,
            view_proj: DMat4::IDENTITY,
            inv_view_proj: DMat4::IDENTITY,
        };
        camera.rebuild();
        camera
    }

    /// Returns the camera position.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        self.eye
    }

    /// Returns the look-at target.
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.target
    }

    /// Returns the viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Moves the camera.
    pub fn set_eye(&mut self, eye: DVec3) {
        self.eye = eye;
        self.rebuild();
    }

    /// Retargets the camera.
    pub fn set_target(&mut self, target: DVec3) {
        self.target = target;
        self.rebuild();
    }

    /// Resizes the viewport (call on window resize).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.rebuild();
    }

    /// Sets the vertical field of view in radians.
    pub fn set_fov_y(&mut self, fov_y: f64) {
        self.fov_y = fov_y;
        self.rebuild();
    }

    /// Unprojects a screen point into a world-space ray.
    #[must_use]
    pub fn screen_ray(&self, screen: Point) -> Ray3 {
        let (ndc_x, ndc_y) = self.ndc(screen);
        // glam's perspective matrices use [0, 1] depth: 0 on the near
        // plane, 1 on the far plane.
        let near = self
            .inv_view_proj
            .project_point3(DVec3::new(ndc_x, ndc_y, 0.0));
        let far = self
            .inv_view_proj
            .project_point3(DVec3::new(ndc_x, ndc_y, 1.0));
        Ray3::new(near, far - near)
    }

    /// Maps a screen point onto the ground plane via the ray cast.
    #[must_use]
    pub fn ground_intersection(&self, screen: Point) -> Option<DVec3> {
        self.screen_ray(screen).intersect_ground()
    }

    /// Projects a world point to screen pixels.
    ///
    /// Returns `None` for points at or behind the camera plane, which have
    /// no meaningful screen position.
    #[must_use]
    pub fn world_to_screen(&self, world: DVec3) -> Option<Point> {
        let clip = self.view_proj * DVec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        Some(Point::new(
            (ndc_x + 1.0) / 2.0 * self.viewport.width,
            (1.0 - ndc_y) / 2.0 * self.viewport.height,
        ))
    }

    fn ndc(&self, screen: Point) -> (f64, f64) {
        // x to [-1, 1] left-to-right, y to [1, -1] top-to-bottom.
        (
            (screen.x / self.viewport.width) * 2.0 - 1.0,
            1.0 - (screen.y / self.viewport.height) * 2.0,
        )
    }

    fn rebuild(&mut self) {
        let aspect = if self.viewport.height > 0.0 {
            self.viewport.width / self.viewport.height
        } else {
            1.0
        };
        let view = DMat4::look_at_rh(self.eye, self.target, self.up);
        let proj = DMat4::perspective_rh(self.fov_y, aspect, self.z_near, self.z_far);
        self.view_proj = proj * view;
        self.inv_view_proj = self.view_proj.inverse();
    }
}

impl GroundMapper for SceneCamera {
    fn ground_point(&self, screen: Point) -> Option<Point> {
        self.ground_intersection(screen).map(layline_ground::ground)
    }
}
