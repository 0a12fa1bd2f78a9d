// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag state machine and its world-mutating transitions.

use glam::DVec3;
use kurbo::{Point, Vec2};
use tracing::warn;

use layline_placement::Placement;
use layline_project::GroundMapper;
use layline_selection::ActiveSelection;
use layline_world::{Entity, EntityId, EntityKind, WorldStore};

use crate::error::DropError;

/// Default size for entities dropped from the palette (width, height, depth).
pub const DEFAULT_PALETTE_SIZE: DVec3 = DVec3::new(10.0, 0.2, 10.0);

/// What happens to a colliding position when the drag ends.
///
/// See the crate docs for the history of this choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Snap back to the last clear position when released while overlapping.
    /// The no-overlap invariant holds after every completed drag.
    #[default]
    RevertOnRelease,
    /// Keep whatever position the drag ended on; overlaps are only ever
    /// flagged. Legacy behavior.
    FlagOnly,
}

/// The controller's current phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// A palette item is in flight; no store entry exists yet.
    PlacingNew {
        /// The palette token carried by the drag.
        kind: EntityKind,
    },
    /// A placed entity follows the pointer.
    MovingExisting {
        /// The entity being moved.
        id: EntityId,
    },
}

/// How a move drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No move drag was in progress.
    NotDragging,
    /// The final position stands.
    Committed,
    /// The drag ended overlapping and snapped back to the last clear
    /// position ([`CollisionPolicy::RevertOnRelease`] only).
    Reverted,
}

/// The drag/drop interaction controller.
///
/// One controller serves all views: every operation takes the projection
/// the triggering event arrived through, so a drag can even migrate between
/// views mid-gesture. All world access goes through the store and selection
/// handles passed per call; the controller owns nothing but its own
/// bookkeeping, and at most one drag is active at a time.
#[derive(Debug)]
pub struct DragController {
    phase: DragPhase,
    policy: CollisionPolicy,
    /// Size given to entities created from the palette.
    palette_size: DVec3,
    /// Ground-space offset from the grab point to the entity center,
    /// captured at press time.
    grab_offset: Vec2,
    /// The entity currently flagged as colliding, if any.
    colliding: Option<EntityId>,
    /// Last known non-overlapping position of the moving entity.
    last_clear: Option<DVec3>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(CollisionPolicy::default())
    }
}

impl DragController {
    /// Creates a controller with the given collision policy.
    #[must_use]
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            phase: DragPhase::Idle,
            policy,
            palette_size: DEFAULT_PALETTE_SIZE,
            grab_offset: Vec2::ZERO,
            colliding: None,
            last_clear: None,
        }
    }

    /// Overrides the size given to palette drops.
    #[must_use]
    pub fn with_palette_size(mut self, size: DVec3) -> Self {
        self.palette_size = size;
        self
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Returns the id of the entity being moved, if a move is in progress.
    #[must_use]
    pub fn dragged_id(&self) -> Option<&EntityId> {
        match &self.phase {
            DragPhase::MovingExisting { id } => Some(id),
            _ => None,
        }
    }

    /// Returns the entity currently flagged as colliding, if any.
    ///
    /// Views use this for rejection feedback (for example tinting the
    /// dragged entity red). The flag is per-frame state: it clears when the
    /// drag ends or the entity moves clear.
    #[must_use]
    pub fn colliding_id(&self) -> Option<&EntityId> {
        self.colliding.as_ref()
    }

    /// Returns `true` if `id` is currently flagged as colliding.
    #[must_use]
    pub fn is_colliding(&self, id: &EntityId) -> bool {
        self.colliding.as_ref() == Some(id)
    }

    /// Starts a palette drag carrying `kind`.
    ///
    /// Any drag already in progress is abandoned; nothing exists in the
    /// store until the drop commits.
    pub fn begin_palette_drag(&mut self, kind: EntityKind) {
        self.end_drag();
        self.phase = DragPhase::PlacingNew { kind };
    }

    /// Abandons the current drag, if any, without committing anything.
    pub fn cancel(&mut self) {
        self.end_drag();
    }

    /// Pointer-down: grabs the topmost entity under the pointer, if any.
    ///
    /// On a hit this selects the entity, records the grab offset (grab
    /// point minus entity center, in ground space, so the entity does not
    /// jump to center itself under the pointer), and enters
    /// [`DragPhase::MovingExisting`]. A miss changes nothing.
    pub fn press(
        &mut self,
        screen: Point,
        mapper: &impl GroundMapper,
        store: &WorldStore,
        selection: &mut ActiveSelection,
    ) -> Option<EntityId> {
        if self.phase != DragPhase::Idle {
            return None;
        }
        let grab = mapper.ground_point(screen)?;
        let entity = store.hit_test(grab)?;
        let id = entity.id.clone();

        self.grab_offset = grab - layline_ground::ground(entity.position);
        self.last_clear = Some(entity.position);
        self.colliding = None;
        self.phase = DragPhase::MovingExisting { id: id.clone() };
        selection.select(Some(entity.clone()));
        Some(id)
    }

    /// Plain click: selects the topmost entity under the pointer, or clears
    /// the selection on empty ground.
    ///
    /// Does not start a drag and is independent of the current phase.
    pub fn click(
        &mut self,
        screen: Point,
        mapper: &impl GroundMapper,
        store: &WorldStore,
        selection: &mut ActiveSelection,
    ) -> Option<EntityId> {
        let ground = mapper.ground_point(screen)?;
        match store.hit_test(ground) {
            Some(entity) => {
                let id = entity.id.clone();
                selection.select(Some(entity.clone()));
                Some(id)
            }
            None => {
                selection.clear();
                None
            }
        }
    }

    /// Pointer-move during a move drag.
    ///
    /// The pointer is unprojected (a miss is a no-op for the frame), the
    /// grab offset subtracted to get the candidate center, and the
    /// collision gate run against every *other* entity. The position then
    /// updates unconditionally (continuous tracking) while the colliding
    /// flag is set or cleared as an independent output. Clear candidates
    /// are remembered for [`DragController::release`] to revert to.
    pub fn drag_move(
        &mut self,
        screen: Point,
        mapper: &impl GroundMapper,
        store: &mut WorldStore,
        selection: &mut ActiveSelection,
    ) {
        let DragPhase::MovingExisting { id } = &self.phase else {
            return;
        };
        let id = id.clone();
        let Some(grab) = mapper.ground_point(screen) else {
            return;
        };
        let Some(entity) = store.find(&id) else {
            // The entity vanished under us; the drag has nothing to move.
            self.end_drag();
            return;
        };

        let center = grab - self.grab_offset;
        let position = layline_ground::lift(center);
        let size = entity.size_or(store.fallback_size());

        let blocked = Placement::new(position, size).blocked(store, Some(&id));
        if blocked {
            self.colliding = Some(id.clone());
        } else {
            self.colliding = None;
            self.last_clear = Some(position);
        }

        if store.set_position(&id, position).is_err() {
            self.end_drag();
            return;
        }
        selection.sync(store);
    }

    /// Pointer-up: ends a move drag.
    ///
    /// Under [`CollisionPolicy::RevertOnRelease`], a drag released while
    /// flagged as colliding snaps back to the last clear position; under
    /// [`CollisionPolicy::FlagOnly`] the position stands either way. All
    /// drag bookkeeping clears regardless of the outcome.
    pub fn release(
        &mut self,
        store: &mut WorldStore,
        selection: &mut ActiveSelection,
    ) -> ReleaseOutcome {
        let DragPhase::MovingExisting { id } = &self.phase else {
            return ReleaseOutcome::NotDragging;
        };
        let id = id.clone();

        let mut outcome = ReleaseOutcome::Committed;
        if self.colliding.is_some() {
            warn!(entity = %id, "drag released on an overlapping position");
            if self.policy == CollisionPolicy::RevertOnRelease
                && let Some(position) = self.last_clear
                && store.set_position(&id, position).is_ok()
            {
                outcome = ReleaseOutcome::Reverted;
            }
        }

        self.end_drag();
        selection.sync(store);
        outcome
    }

    /// Drop event: commits a palette drag as a new entity.
    ///
    /// The drop point is unprojected with no grab offset (new entities
    /// center on the pointer) and gated against the full store. On clear
    /// ground the entity is created with the palette size, an id minted
    /// from its kind, the store population, and `timestamp_millis`, and
    /// appended; the new entity is *not* auto-selected. On overlap the
    /// attempt is discarded entirely. The palette drag ends either way.
    pub fn drop_new(
        &mut self,
        screen: Point,
        mapper: &impl GroundMapper,
        store: &mut WorldStore,
        timestamp_millis: u64,
    ) -> Result<EntityId, DropError> {
        let DragPhase::PlacingNew { kind } = &self.phase else {
            return Err(DropError::NotPlacing);
        };
        let kind = kind.clone();
        self.end_drag();

        let ground = mapper.ground_point(screen).ok_or(DropError::OffPlane)?;
        let position = layline_ground::lift(ground);

        if Placement::new(position, self.palette_size).blocked(store, None) {
            warn!(kind = %kind, "drop rejected: position overlaps an existing entity");
            return Err(DropError::Blocked);
        }

        let id = EntityId::mint(&kind, store.len(), timestamp_millis);
        let entity = Entity::new(id.clone(), kind, position).with_size(self.palette_size);
        store.add(entity)?;
        Ok(id)
    }

    fn end_drag(&mut self) {
        self.phase = DragPhase::Idle;
        self.grab_offset = Vec2::ZERO;
        self.colliding = None;
        self.last_clear = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use layline_project::PlanProjection;

    fn plan() -> PlanProjection {
        PlanProjection::centered_in(Size::new(800.0, 600.0))
    }

    fn setup() -> (DragController, WorldStore, ActiveSelection) {
        (
            DragController::default(),
            WorldStore::new(DVec3::new(5.0, 0.2, 2.0)),
            ActiveSelection::new(),
        )
    }

    #[test]
    fn palette_drop_centers_on_the_pointer() {
        let (mut controller, mut store, _sel) = setup();
        let plan = plan();

        controller.begin_palette_drag(EntityKind::CONVEYOR);
        // 30 px right of center at 15 px/unit: world x = 2.
        let id = controller
            .drop_new(Point::new(430.0, 300.0), &plan, &mut store, 7)
            .unwrap();

        assert_eq!(store.find(&id).unwrap().position, DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(controller.phase(), &DragPhase::Idle);
    }

    #[test]
    fn drop_without_palette_drag_is_rejected() {
        let (mut controller, mut store, _sel) = setup();
        let err = controller
            .drop_new(Point::new(400.0, 300.0), &plan(), &mut store, 7)
            .unwrap_err();
        assert_eq!(err, DropError::NotPlacing);
        assert!(store.is_empty());
    }

    #[test]
    fn minted_ids_follow_kind_count_timestamp() {
        let (mut controller, mut store, _sel) = setup();
        let plan = plan();

        controller.begin_palette_drag(EntityKind::CONVEYOR);
        let first = controller
            .drop_new(Point::new(400.0, 300.0), &plan, &mut store, 1_000)
            .unwrap();
        assert_eq!(first.as_str(), "CONVEYOR-0-1000");

        controller.begin_palette_drag(EntityKind::CONVEYOR);
        let second = controller
            .drop_new(Point::new(700.0, 300.0), &plan, &mut store, 2_000)
            .unwrap();
        assert_eq!(second.as_str(), "CONVEYOR-1-2000");
    }

    #[test]
    fn press_on_empty_ground_changes_nothing() {
        let (mut controller, store, mut sel) = setup();
        let grabbed = controller.press(Point::new(100.0, 100.0), &plan(), &store, &mut sel);
        assert_eq!(grabbed, None);
        assert_eq!(controller.phase(), &DragPhase::Idle);
        assert!(sel.is_empty());
    }

    #[test]
    fn press_grabs_and_selects() {
        let (mut controller, mut store, mut sel) = setup();
        let plan = plan();

        controller.begin_palette_drag(EntityKind::CONVEYOR);
        let id = controller
            .drop_new(Point::new(400.0, 300.0), &plan, &mut store, 7)
            .unwrap();
        // Dropping does not select.
        assert!(sel.is_empty());

        let grabbed = controller.press(Point::new(400.0, 300.0), &plan, &store, &mut sel);
        assert_eq!(grabbed.as_ref(), Some(&id));
        assert_eq!(controller.dragged_id(), Some(&id));
        assert!(sel.is_selected(&id));
    }

    #[test]
    fn click_selects_or_clears() {
        let (mut controller, mut store, mut sel) = setup();
        let plan = plan();

        controller.begin_palette_drag(EntityKind::CONVEYOR);
        let id = controller
            .drop_new(Point::new(400.0, 300.0), &plan, &mut store, 7)
            .unwrap();

        controller.click(Point::new(400.0, 300.0), &plan, &store, &mut sel);
        assert!(sel.is_selected(&id));

        controller.click(Point::new(50.0, 50.0), &plan, &store, &mut sel);
        assert!(sel.is_empty());
    }

    #[test]
    fn grab_offset_prevents_centering_under_the_pointer() {
        let (mut controller, mut store, mut sel) = setup();
        let plan = plan();

        controller.begin_palette_drag(EntityKind::CONVEYOR);
        let id = controller
            .drop_new(Point::new(400.0, 300.0), &plan, &mut store, 7)
            .unwrap();

        // Grab 2 world units right of center (footprint reaches x = 5).
        controller.press(Point::new(430.0, 300.0), &plan, &store, &mut sel);
        // Move the pointer 1 world unit further right.
        controller.drag_move(Point::new(445.0, 300.0), &plan, &mut store, &mut sel);

        // The center moved by exactly the pointer delta, not to the pointer.
        assert_eq!(store.find(&id).unwrap().position, DVec3::new(1.0, 0.0, 0.0));
    }
}
