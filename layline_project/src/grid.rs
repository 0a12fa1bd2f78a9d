// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid line generation for the plan view.

use alloc::vec::Vec;

use kurbo::Size;

use crate::plan::PlanProjection;

/// Screen-space grid line positions for one frame.
///
/// `vertical` holds x coordinates, `horizontal` holds y coordinates, both
/// ascending and covering the viewport. `step` is the line spacing in
/// pixels (`cell_size * scale`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    /// Line spacing in pixels.
    pub step: f64,
    /// X coordinates of vertical lines.
    pub vertical: Vec<f64>,
    /// Y coordinates of horizontal lines.
    pub horizontal: Vec<f64>,
}

/// Computes the grid overlay for a plan view.
///
/// Lines sit at every multiple of `cell_size` in world units, phase-aligned
/// so that one line always passes through the world origin no matter how the
/// view is panned or zoomed: the first on-screen line is at
/// `origin mod step` (Euclidean remainder, so a negative origin still
/// phases into `[0, step)`), and the rest step by `cell_size * scale`.
///
/// Degenerate inputs (non-positive cell size or viewport) produce no lines.
#[must_use]
pub fn grid_lines(plan: &PlanProjection, viewport: Size, cell_size: f64) -> GridLines {
    let step = cell_size * plan.scale();
    if step <= f64::EPSILON || viewport.width <= 0.0 || viewport.height <= 0.0 {
        return GridLines::default();
    }

    let origin = plan.origin();
    GridLines {
        step,
        vertical: phased_positions(origin.x, step, viewport.width),
        horizontal: phased_positions(origin.y, step, viewport.height),
    }
}

// Line positions in [0, extent], starting from `origin mod step`.
fn phased_positions(origin: f64, step: f64, extent: f64) -> Vec<f64> {
    let phase = rem_euclid(origin, step);
    let mut out = Vec::new();
    let mut x = phase;
    while x <= extent {
        out.push(x);
        x += step;
    }
    out
}

// f64::rem_euclid without std.
fn rem_euclid(v: f64, m: f64) -> f64 {
    let r = v % m;
    if r < 0.0 { r + m } else { r }
}
