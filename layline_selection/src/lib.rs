// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layline Selection: the one-entity selection tracker.
//!
//! Layouts are edited one entity at a time, so the selection is a nullable
//! reference to exactly one entity, tracked by [`EntityId`] rather than by
//! ownership. What makes it more than an `Option<EntityId>` is the cached
//! snapshot: the selection holds a copy of the entity's current fields so
//! an open property form can render name, size, and properties without
//! reaching back into the store, and [`ActiveSelection::sync`] refreshes
//! that copy after store mutations so the form always shows live state,
//! including mid-drag position updates.
//!
//! A revision counter bumps only when the selection *semantically* changes
//! (different entity, cleared, or snapshot refreshed), giving observers a
//! cheap "did anything change?" probe.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use layline_selection::ActiveSelection;
//! use layline_world::{Entity, EntityId, EntityKind, WorldStore};
//!
//! let mut store = WorldStore::new(DVec3::new(5.0, 0.2, 2.0));
//! let id = EntityId::from_token("belt");
//! store.add(Entity::new(id.clone(), EntityKind::CONVEYOR, DVec3::ZERO)).unwrap();
//!
//! let mut selection = ActiveSelection::new();
//! selection.select(store.find(&id).cloned());
//!
//! // The store moves the entity; sync refreshes the snapshot.
//! store.set_position(&id, DVec3::new(3.0, 0.0, 0.0)).unwrap();
//! selection.sync(&store);
//! assert_eq!(selection.selected().unwrap().position, DVec3::new(3.0, 0.0, 0.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use layline_world::{Entity, EntityId, WorldStore};

/// The current selection: at most one entity, with a live-synced snapshot.
#[derive(Clone, Debug, Default)]
pub struct ActiveSelection {
    current: Option<Entity>,
    revision: u64,
}

impl ActiveSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            revision: 0,
        }
    }

    /// Returns the selected entity's snapshot, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Entity> {
        self.current.as_ref()
    }

    /// Returns the selected entity's id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&EntityId> {
        self.current.as_ref().map(|e| &e.id)
    }

    /// Returns `true` if `id` is the selected entity.
    #[must_use]
    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.id() == Some(id)
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the revision counter.
    ///
    /// Bumped only on semantic change: selecting a different entity,
    /// clearing, or a [`ActiveSelection::sync`] that actually refreshed the
    /// snapshot. Re-selecting identical content is a no-op.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the selection.
    ///
    /// `None` clears; `Some` snapshots the given entity. Selecting a
    /// snapshot identical to the current one changes nothing.
    pub fn select(&mut self, entity: Option<Entity>) {
        if self.current == entity {
            return;
        }
        self.current = entity;
        self.bump();
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.select(None);
    }

    /// Refreshes the snapshot from the store after a mutation.
    ///
    /// If the selected id still resolves and the stored entity differs from
    /// the snapshot, the snapshot is replaced (and the revision bumped). If
    /// the id no longer resolves, the selection clears.
    pub fn sync(&mut self, store: &WorldStore) {
        let Some(current) = self.current.as_ref() else {
            return;
        };
        match store.find(&current.id) {
            Some(live) => {
                if live != current {
                    self.current = Some(live.clone());
                    self.bump();
                }
            }
            None => {
                self.current = None;
                self.bump();
            }
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use layline_world::{EntityKind, EntityPatch};

    fn seeded_store() -> (WorldStore, EntityId) {
        let mut store = WorldStore::new(DVec3::new(5.0, 0.2, 2.0));
        let id = EntityId::from_token("belt");
        store
            .add(
                Entity::new(id.clone(), EntityKind::CONVEYOR, DVec3::ZERO)
                    .with_size(DVec3::new(10.0, 0.2, 10.0)),
            )
            .unwrap();
        (store, id)
    }

    #[test]
    fn empty_selection_basics() {
        let sel = ActiveSelection::new();
        assert!(sel.is_empty());
        assert_eq!(sel.selected(), None);
        assert_eq!(sel.id(), None);
        assert_eq!(sel.revision(), 0);
    }

    #[test]
    fn select_and_reselect_same_content_is_a_no_op() {
        let (store, id) = seeded_store();
        let mut sel = ActiveSelection::new();

        sel.select(store.find(&id).cloned());
        assert_eq!(sel.revision(), 1);
        assert!(sel.is_selected(&id));

        sel.select(store.find(&id).cloned());
        assert_eq!(sel.revision(), 1);
    }

    #[test]
    fn sync_refreshes_position_after_a_move() {
        let (mut store, id) = seeded_store();
        let mut sel = ActiveSelection::new();
        sel.select(store.find(&id).cloned());

        store.set_position(&id, DVec3::new(3.0, 0.0, 0.0)).unwrap();
        sel.sync(&store);

        assert_eq!(
            sel.selected().unwrap().position,
            store.find(&id).unwrap().position
        );
    }

    #[test]
    fn sync_refreshes_property_edits() {
        let (mut store, id) = seeded_store();
        let mut sel = ActiveSelection::new();
        sel.select(store.find(&id).cloned());
        let rev = sel.revision();

        store.update(&id, EntityPatch::rename("outfeed")).unwrap();
        sel.sync(&store);

        assert_eq!(sel.selected().unwrap().name.as_deref(), Some("outfeed"));
        assert_eq!(sel.revision(), rev + 1);
    }

    #[test]
    fn sync_without_store_changes_is_a_no_op() {
        let (store, id) = seeded_store();
        let mut sel = ActiveSelection::new();
        sel.select(store.find(&id).cloned());
        let rev = sel.revision();

        sel.sync(&store);
        assert_eq!(sel.revision(), rev);
    }

    #[test]
    fn sync_on_empty_selection_is_inert() {
        let (store, _) = seeded_store();
        let mut sel = ActiveSelection::new();
        sel.sync(&store);
        assert!(sel.is_empty());
        assert_eq!(sel.revision(), 0);
    }

    #[test]
    fn unresolvable_id_clears_the_selection() {
        let (store, _) = seeded_store();
        let mut sel = ActiveSelection::new();
        // A snapshot of an entity the store never held.
        sel.select(Some(Entity::new(
            EntityId::from_token("ghost"),
            EntityKind::CONVEYOR,
            DVec3::ZERO,
        )));
        sel.sync(&store);
        assert!(sel.is_empty());
    }

    #[test]
    fn clear_bumps_once() {
        let (store, id) = seeded_store();
        let mut sel = ActiveSelection::new();
        sel.select(store.find(&id).cloned());
        let rev = sel.revision();

        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.revision(), rev + 1);

        sel.clear();
        assert_eq!(sel.revision(), rev + 1);
    }
}
