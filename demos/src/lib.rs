// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Layline demos.

use kurbo::Point;
use layline_project::PlanProjection;
use layline_selection::ActiveSelection;
use layline_world::WorldStore;

/// Renders the plan view as ASCII art, one character per screen cell.
///
/// Entities paint `#`, the selected entity paints `@`, empty ground paints
/// `.`. `cell_px` controls how many screen pixels one character covers.
#[must_use]
pub fn render_plan(
    store: &WorldStore,
    selection: &ActiveSelection,
    plan: &PlanProjection,
    columns: usize,
    rows: usize,
    cell_px: f64,
) -> String {
    let mut out = String::with_capacity(rows * (columns + 1));
    for row in 0..rows {
        for col in 0..columns {
            let screen = Point::new(col as f64 * cell_px, row as f64 * cell_px);
            let ground = plan.screen_to_world(screen);
            let glyph = match store.hit_test(ground) {
                Some(e) if selection.is_selected(&e.id) => '@',
                Some(_) => '#',
                None => '.',
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
