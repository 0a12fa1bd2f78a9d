// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end drag/drop flows: palette drops, move drags, collision
//! feedback, and the release policies, driven through real projections.

use glam::DVec3;
use kurbo::{Point, Size};
use layline_interact::{
    CollisionPolicy, DEFAULT_PALETTE_SIZE, DragController, DragPhase, DropError, ReleaseOutcome,
};
use layline_project::{GroundMapper, MinimapProjection, PlanProjection, SceneCamera};
use layline_selection::ActiveSelection;
use layline_world::{EntityKind, WorldStore};

const VIEWPORT: Size = Size::new(800.0, 600.0);
const FALLBACK: DVec3 = DVec3::new(5.0, 0.2, 2.0);

fn plan() -> PlanProjection {
    PlanProjection::centered_in(VIEWPORT)
}

/// Screen point of a world position under the default plan view.
fn at(plan: &PlanProjection, x: f64, z: f64) -> Point {
    plan.world_to_screen(Point::new(x, z))
}

#[test]
fn place_then_move_scenario() {
    // Empty store; drop a conveyor at the world origin.
    let plan = plan();
    let mut store = WorldStore::new(FALLBACK);
    let mut selection = ActiveSelection::new();
    let mut controller = DragController::default();

    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let id = controller
        .drop_new(at(&plan, 0.0, 0.0), &plan, &mut store, 1_722_945_600_000)
        .unwrap();

    assert_eq!(store.len(), 1);
    let placed = store.find(&id).unwrap();
    assert_eq!(placed.position, DVec3::ZERO);
    assert_eq!(placed.size, Some(DEFAULT_PALETTE_SIZE));

    // Drag it to (3, 0, 0): nothing else exists, so no collision at any point.
    controller.press(at(&plan, 0.0, 0.0), &plan, &store, &mut selection);
    controller.drag_move(at(&plan, 1.5, 0.0), &plan, &mut store, &mut selection);
    assert!(!controller.is_colliding(&id));
    controller.drag_move(at(&plan, 3.0, 0.0), &plan, &mut store, &mut selection);
    assert!(!controller.is_colliding(&id));

    let outcome = controller.release(&mut store, &mut selection);
    assert_eq!(outcome, ReleaseOutcome::Committed);
    assert_eq!(store.find(&id).unwrap().position, DVec3::new(3.0, 0.0, 0.0));
    assert_eq!(controller.phase(), &DragPhase::Idle);

    // The selection tracked the move.
    assert_eq!(selection.selected().unwrap().position, DVec3::new(3.0, 0.0, 0.0));
}

#[test]
fn rejected_drop_leaves_the_store_unchanged() {
    let plan = plan();
    let mut store = WorldStore::new(FALLBACK);
    let mut controller = DragController::default();

    controller.begin_palette_drag(EntityKind::CONVEYOR);
    controller
        .drop_new(at(&plan, 0.0, 0.0), &plan, &mut store, 1)
        .unwrap();

    // A same-size candidate at (5, 0, 0) overlaps by half the footprint.
    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let err = controller
        .drop_new(at(&plan, 5.0, 0.0), &plan, &mut store, 2)
        .unwrap_err();

    assert_eq!(err, DropError::Blocked);
    assert_eq!(store.len(), 1);
    assert_eq!(controller.phase(), &DragPhase::Idle);
}

#[test]
fn edge_to_edge_drop_is_legal() {
    let plan = plan();
    let mut store = WorldStore::new(FALLBACK);
    let mut controller = DragController::default();

    controller.begin_palette_drag(EntityKind::CONVEYOR);
    controller
        .drop_new(at(&plan, 0.0, 0.0), &plan, &mut store, 1)
        .unwrap();

    // AABBs exactly adjacent on X: not a collision.
    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let id = controller
        .drop_new(at(&plan, 10.0, 0.0), &plan, &mut store, 2)
        .unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.find(&id).unwrap().position, DVec3::new(10.0, 0.0, 0.0));
}

#[test]
fn colliding_move_flags_but_keeps_tracking() {
    let plan = plan();
    let mut store = WorldStore::new(FALLBACK);
    let mut selection = ActiveSelection::new();
    let mut controller = DragController::default();

    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let anchor = controller
        .drop_new(at(&plan, 0.0, 0.0), &plan, &mut store, 1)
        .unwrap();
    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let moving = controller
        .drop_new(at(&plan, 20.0, 0.0), &plan, &mut store, 2)
        .unwrap();

    controller.press(at(&plan, 20.0, 0.0), &plan, &store, &mut selection);

    // Into overlap: the position still updates, but the flag raises.
    controller.drag_move(at(&plan, 5.0, 0.0), &plan, &mut store, &mut selection);
    assert!(controller.is_colliding(&moving));
    assert!(!controller.is_colliding(&anchor));
    assert_eq!(store.find(&moving).unwrap().position, DVec3::new(5.0, 0.0, 0.0));

    // Back out to clear ground: the flag drops.
    controller.drag_move(at(&plan, 15.0, 0.0), &plan, &mut store, &mut selection);
    assert!(!controller.is_colliding(&moving));
}

#[test]
fn revert_on_release_restores_the_last_clear_position() {
    let plan = plan();
    let mut store = WorldStore::new(FALLBACK);
    let mut selection = ActiveSelection::new();
    let mut controller = DragController::new(CollisionPolicy::RevertOnRelease);

    controller.begin_palette_drag(EntityKind::CONVEYOR);
    controller
        .drop_new(at(&plan, 0.0, 0.0), &plan, &mut store, 1)
        .unwrap();
    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let moving = controller
        .drop_new(at(&plan, 20.0, 0.0), &plan, &mut store, 2)
        .unwrap();

    controller.press(at(&plan, 20.0, 0.0), &plan, &store, &mut selection);
    controller.drag_move(at(&plan, 14.0, 0.0), &plan, &mut store, &mut selection);
    controller.drag_move(at(&plan, 5.0, 0.0), &plan, &mut store, &mut selection);
    assert!(controller.is_colliding(&moving));

    let outcome = controller.release(&mut store, &mut selection);
    assert_eq!(outcome, ReleaseOutcome::Reverted);

    // Snapped back to the last clear frame, not the grab position.
    assert_eq!(store.find(&moving).unwrap().position, DVec3::new(14.0, 0.0, 0.0));
    // And the flag cleared with the rest of the drag bookkeeping.
    assert!(!controller.is_colliding(&moving));
    // The selection shows the reverted position.
    assert_eq!(selection.selected().unwrap().position, DVec3::new(14.0, 0.0, 0.0));
}

#[test]
fn no_overlap_invariant_holds_after_every_release() {
    let plan = plan();
    let mut store = WorldStore::new(FALLBACK);
    let mut selection = ActiveSelection::new();
    let mut controller = DragController::default();

    for (i, x) in [0.0, 20.0, 40.0].into_iter().enumerate() {
        controller.begin_palette_drag(EntityKind::CONVEYOR);
        controller
            .drop_new(at(&plan, x, 0.0), &plan, &mut store, i as u64)
            .unwrap();
    }

    // Drag the middle entity around, ending on top of the first.
    controller.press(at(&plan, 20.0, 0.0), &plan, &store, &mut selection);
    controller.drag_move(at(&plan, 2.0, 0.0), &plan, &mut store, &mut selection);
    controller.release(&mut store, &mut selection);

    let entities = store.all();
    for i in 0..entities.len() {
        for j in 0..entities.len() {
            if i != j {
                let a = entities[i].footprint(store.fallback_size());
                let b = entities[j].footprint(store.fallback_size());
                assert!(!a.overlaps(&b), "{} overlaps {}", entities[i].id, entities[j].id);
            }
        }
    }
}

#[test]
fn flag_only_policy_keeps_the_colliding_position() {
    let plan = plan();
    let mut store = WorldStore::new(FALLBACK);
    let mut selection = ActiveSelection::new();
    let mut controller = DragController::new(CollisionPolicy::FlagOnly);

    controller.begin_palette_drag(EntityKind::CONVEYOR);
    controller
        .drop_new(at(&plan, 0.0, 0.0), &plan, &mut store, 1)
        .unwrap();
    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let moving = controller
        .drop_new(at(&plan, 20.0, 0.0), &plan, &mut store, 2)
        .unwrap();

    controller.press(at(&plan, 20.0, 0.0), &plan, &store, &mut selection);
    controller.drag_move(at(&plan, 5.0, 0.0), &plan, &mut store, &mut selection);

    let outcome = controller.release(&mut store, &mut selection);
    assert_eq!(outcome, ReleaseOutcome::Committed);
    assert_eq!(store.find(&moving).unwrap().position, DVec3::new(5.0, 0.0, 0.0));
}

#[test]
fn drops_work_identically_through_the_camera() {
    let camera = SceneCamera::new(DVec3::new(0.0, 50.0, 50.0), DVec3::ZERO, VIEWPORT);
    let mut store = WorldStore::new(FALLBACK);
    let mut controller = DragController::default();

    // The viewport center looks at the world origin.
    let center = Point::new(VIEWPORT.width / 2.0, VIEWPORT.height / 2.0);
    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let id = controller.drop_new(center, &camera, &mut store, 1).unwrap();

    let placed = store.find(&id).unwrap().position;
    assert!(placed.length() < 1e-6);
    assert_eq!(placed.y, 0.0);
}

#[test]
fn off_plane_drop_creates_nothing() {
    // A level camera: most of the upper viewport misses the ground.
    let camera = SceneCamera::new(
        DVec3::new(0.0, 5.0, 0.0),
        DVec3::new(0.0, 5.0, -10.0),
        VIEWPORT,
    );
    let mut store = WorldStore::new(FALLBACK);
    let mut controller = DragController::default();

    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let err = controller
        .drop_new(Point::new(400.0, 50.0), &camera, &mut store, 1)
        .unwrap_err();

    assert_eq!(err, DropError::OffPlane);
    assert!(store.is_empty());
    assert_eq!(controller.phase(), &DragPhase::Idle);
}

#[test]
fn off_plane_move_frame_is_a_no_op() {
    let camera = SceneCamera::new(
        DVec3::new(0.0, 5.0, 0.0),
        DVec3::new(0.0, 5.0, -20.0),
        VIEWPORT,
    );
    let mut store = WorldStore::new(FALLBACK);
    let mut selection = ActiveSelection::new();
    let mut controller = DragController::default();

    // Place an entity in front of the camera, on the ground.
    let plan = plan();
    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let id = controller
        .drop_new(at(&plan, 0.0, -20.0), &plan, &mut store, 1)
        .unwrap();

    // Grab it through the camera where it projects on screen.
    let on_screen = camera
        .world_to_screen(DVec3::new(0.0, 0.0, -20.0))
        .unwrap();
    assert!(camera.ground_point(on_screen).is_some());
    controller.press(on_screen, &camera, &store, &mut selection);
    assert_eq!(controller.dragged_id(), Some(&id));

    // Point at the sky: the frame is a no-op, the drag stays live.
    let before = store.find(&id).unwrap().position;
    controller.drag_move(Point::new(400.0, 10.0), &camera, &mut store, &mut selection);
    assert_eq!(store.find(&id).unwrap().position, before);
    assert_eq!(controller.dragged_id(), Some(&id));
}

#[test]
fn drops_work_identically_through_the_minimap() {
    // 200 px framing 100 world units: 2 px per unit, origin at (100, 100).
    let minimap = MinimapProjection::new(200.0);
    let mut store = WorldStore::new(FALLBACK);
    let mut controller = DragController::default();

    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let id = controller
        .drop_new(Point::new(140.0, 60.0), &minimap, &mut store, 1)
        .unwrap();

    assert_eq!(store.find(&id).unwrap().position, DVec3::new(20.0, 0.0, -20.0));
}

#[test]
fn a_drag_can_cross_views_mid_gesture() {
    // The same world seen through two plan views with different zooms.
    let mut main = plan();
    main.set_zoom(2.0);
    let side = PlanProjection::new(Point::new(100.0, 100.0));

    let mut store = WorldStore::new(FALLBACK);
    let mut selection = ActiveSelection::new();
    let mut controller = DragController::default();

    controller.begin_palette_drag(EntityKind::CONVEYOR);
    let id = controller
        .drop_new(main.world_to_screen(Point::ZERO), &main, &mut store, 1)
        .unwrap();

    controller.press(main.world_to_screen(Point::ZERO), &main, &store, &mut selection);
    controller.drag_move(
        side.world_to_screen(Point::new(4.0, 2.0)),
        &side,
        &mut store,
        &mut selection,
    );
    controller.release(&mut store, &mut selection);

    assert_eq!(store.find(&id).unwrap().position, DVec3::new(4.0, 0.0, 2.0));
}
