// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layline Interact: the drag/drop interaction controller.
//!
//! This crate is the engine's only writer. Views translate device events
//! into screen points and hand them to a [`DragController`] together with
//! the projection the event arrived through (any [`GroundMapper`]); the
//! controller inverts the projection, gates candidate positions through the
//! collision predicate, and commits (or refuses to commit) to the world
//! store. Because every projection answers the same one-question contract,
//! the same controller drives the plan view, the minimap, and the 3D view
//! without knowing which one it is talking to.
//!
//! ## The state machine
//!
//! A controller is always in one of three phases ([`DragPhase`]):
//!
//! - **Idle**: no drag in progress. [`DragController::press`] on an entity
//!   starts a move; [`DragController::begin_palette_drag`] starts a
//!   placement.
//! - **`PlacingNew`**: a palette item is in flight; nothing exists in the
//!   store yet. [`DragController::drop_new`] either creates the entity (on
//!   clear ground) or rejects the whole attempt (on overlap); there is no
//!   partially-created state.
//! - **`MovingExisting`**: a placed entity follows the pointer. The grab
//!   offset recorded at press time keeps the entity from snapping its
//!   center under the cursor. On every frame the position updates
//!   *unconditionally* for continuous visual tracking, while a parallel
//!   colliding flag tells views to paint rejection feedback; the two are
//!   independent outputs of the same frame.
//!
//! ## Collision policy
//!
//! New-entity drops are strictly rejected on overlap. For moves, earlier
//! revisions of this engine only *flagged* overlaps and committed whatever
//! position the drag ended on, an inconsistency between the two paths.
//! [`CollisionPolicy`] makes the choice explicit:
//!
//! - [`CollisionPolicy::RevertOnRelease`] (default): a drag released while
//!   overlapping snaps back to the last clear position, so the no-overlap
//!   invariant holds after every committed Idle transition.
//! - [`CollisionPolicy::FlagOnly`]: the legacy behavior, for embedders
//!   that want bug-for-bug parity.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use kurbo::{Point, Size};
//! use layline_interact::DragController;
//! use layline_project::PlanProjection;
//! use layline_selection::ActiveSelection;
//! use layline_world::{EntityKind, WorldStore};
//!
//! let mut store = WorldStore::new(DVec3::new(5.0, 0.2, 2.0));
//! let mut selection = ActiveSelection::new();
//! let mut controller = DragController::default();
//! let plan = PlanProjection::centered_in(Size::new(800.0, 600.0));
//!
//! // Drag a conveyor from the palette and drop it at the viewport center.
//! controller.begin_palette_drag(EntityKind::CONVEYOR);
//! let id = controller
//!     .drop_new(Point::new(400.0, 300.0), &plan, &mut store, 1_722_945_600_000)
//!     .unwrap();
//! assert_eq!(store.find(&id).unwrap().position, DVec3::ZERO);
//! ```

mod controller;
mod error;

pub use controller::{CollisionPolicy, DEFAULT_PALETTE_SIZE, DragController, DragPhase, ReleaseOutcome};
pub use error::DropError;
