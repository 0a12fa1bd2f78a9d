// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete headless layout session.
//!
//! Drops conveyors from the palette, drags one around (including into a
//! rejected overlap), and shows the same world through the plan view, the
//! minimap, and the perspective camera.
//!
//! Run:
//! - `cargo run -p layline_demos --example layout_session`

use glam::DVec3;
use kurbo::{Point, Size};
use layline_interact::{DragController, ReleaseOutcome};
use layline_project::{GroundMapper, MinimapProjection, PlanProjection, SceneCamera, grid_lines};
use layline_selection::ActiveSelection;
use layline_world::{EntityKind, EntityPatch, PropValue, WorldStore};
use tracing::info;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let viewport = Size::new(800.0, 600.0);
    let plan = PlanProjection::centered_in(viewport);
    let minimap = MinimapProjection::new(200.0);
    let camera = SceneCamera::new(DVec3::new(0.0, 60.0, 60.0), DVec3::ZERO, viewport);

    let mut store = WorldStore::new(DVec3::new(5.0, 0.2, 2.0));
    let mut selection = ActiveSelection::new();
    let mut controller = DragController::default();

    // Palette → world: two conveyors, the second through the 3D view.
    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let first = controller
        .drop_new(plan.world_to_screen(Point::new(-12.0, 0.0)), &plan, &mut store, 1)
        .expect("open ground");
    info!(%first, "placed through the plan view");

    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let screen = camera
        .world_to_screen(DVec3::new(12.0, 0.0, 0.0))
        .expect("in front of the camera");
    let second = controller
        .drop_new(screen, &camera, &mut store, 2)
        .expect("open ground");
    info!(%second, "placed through the camera");

    // A third drop on top of the first is rejected outright.
    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let rejected = controller.drop_new(
        plan.world_to_screen(Point::new(-10.0, 2.0)),
        &plan,
        &mut store,
        3,
    );
    info!(?rejected, len = store.len(), "overlapping drop");

    // Grab the first conveyor and slide it toward the second until the
    // collision feedback trips, then release: it snaps back to the last
    // clear position.
    controller.press(plan.world_to_screen(Point::new(-12.0, 0.0)), &plan, &store, &mut selection);
    for x in [-8.0, -2.0, 4.0] {
        controller.drag_move(plan.world_to_screen(Point::new(x, 0.0)), &plan, &mut store, &mut selection);
        info!(
            x,
            colliding = controller.is_colliding(&first),
            "drag frame"
        );
    }
    let outcome = controller.release(&mut store, &mut selection);
    assert_eq!(outcome, ReleaseOutcome::Reverted);
    info!(?outcome, position = ?store.find(&first).map(|e| e.position), "released");

    // The property editor writes through the same store.
    store
        .update(&first, EntityPatch::rename("infeed belt"))
        .expect("entity exists");
    let mut patch = EntityPatch::default();
    let mut props = store.find(&first).expect("entity exists").properties.clone();
    props.insert("speed".into(), PropValue::from(1.5));
    patch.properties = Some(props);
    store.update(&first, patch).expect("entity exists");
    selection.sync(&store);

    // Every projection agrees on where things are.
    let p = store.find(&second).expect("entity exists").position;
    let g = layline_ground::ground(p);
    info!(plan = ?plan.world_to_screen(g), minimap = ?minimap.world_to_screen(g), camera = ?camera.world_to_screen(p), "the second conveyor on screen");

    let grid = grid_lines(&plan, viewport, 1.0);
    info!(step = grid.step, vertical = grid.vertical.len(), horizontal = grid.horizontal.len(), "grid overlay");

    // Sanity: the minimap inverts like every other projection.
    let roundtrip = minimap.ground_point(minimap.world_to_screen(g)).expect("linear mapping");
    assert!((roundtrip - g).hypot() < 1e-9);

    println!("{}", layline_demos::render_plan(&store, &selection, &plan, 80, 24, 25.0));
}
