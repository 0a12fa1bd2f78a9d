// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered entity storage with a synchronized spatial index.

use alloc::vec::Vec;

use glam::DVec3;
use hashbrown::HashMap;
use kurbo::Point;
use layline_ground::GroundAabb;
use layline_index::{FootprintIndex, UniformGrid};

use crate::entity::{Entity, EntityId, EntityPatch, ground_constrained};

/// Errors for store operations that cannot be expressed as a no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// An entity with this id is already stored.
    #[error("duplicate entity id {0}")]
    DuplicateId(EntityId),
    /// No entity with this id is stored.
    #[error("unknown entity id {0}")]
    UnknownEntity(EntityId),
}

/// The authoritative, insertion-ordered collection of placed entities.
///
/// Insertion order is the z-order for top-down views: later entities draw
/// on top, and [`WorldStore::hit_test`] resolves ties in their favor.
///
/// Every entity's ground footprint is mirrored into a spatial index, which
/// backs [`WorldStore::hit_test`] and [`WorldStore::overlapping`]. Entities
/// stored without a size resolve to the `fallback_size` the store was
/// constructed with; the fallback is fixed up front precisely so the store
/// never has to invent geometry on the fly.
///
/// The store validates identity (no duplicate ids) but **not** placement:
/// callers that must respect the no-overlap invariant go through the
/// interaction controller, which gates candidates with `layline_placement`
/// before committing them here.
#[derive(Debug)]
pub struct WorldStore {
    entities: Vec<Entity>,
    by_id: HashMap<EntityId, usize>,
    index: FootprintIndex<UniformGrid>,
    fallback_size: DVec3,
    revision: u64,
}

impl WorldStore {
    /// Creates an empty store.
    ///
    /// `fallback_size` resolves the footprint of entities stored without a
    /// size. It comes from the embedding context (for example a compact
    /// `[5, 0.2, 2]` for a dense 2D canvas); the store itself has no
    /// opinion about what a "normal" entity measures.
    #[must_use]
    pub fn new(fallback_size: DVec3) -> Self {
        Self {
            entities: Vec::new(),
            by_id: HashMap::new(),
            index: FootprintIndex::default(),
            fallback_size,
            revision: 0,
        }
    }

    /// Returns the construction-time fallback size.
    #[must_use]
    pub fn fallback_size(&self) -> DVec3 {
        self.fallback_size
    }

    /// Returns the number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the revision counter.
    ///
    /// Bumped once per committed mutation; external views re-render when it
    /// changes instead of diffing entity lists.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns all entities in insertion (z-) order.
    #[must_use]
    pub fn all(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns an iterator over all entities in insertion (z-) order.
    pub fn iter(&self) -> core::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn find(&self, id: &EntityId) -> Option<&Entity> {
        self.by_id.get(id).map(|&slot| &self.entities[slot])
    }

    /// Appends an entity.
    ///
    /// The position is pinned onto the ground plane and the footprint is
    /// registered with the index. Fails only on a duplicate id.
    pub fn add(&mut self, mut entity: Entity) -> Result<(), StoreError> {
        if self.by_id.contains_key(&entity.id) {
            return Err(StoreError::DuplicateId(entity.id));
        }
        entity.position = ground_constrained(entity.position);
        let slot = self.entities.len();
        self.index.insert(slot, entity.footprint(self.fallback_size));
        self.by_id.insert(entity.id.clone(), slot);
        self.entities.push(entity);
        self.bump();
        Ok(())
    }

    /// Applies a partial update to the entity with `id`.
    ///
    /// Only the fields present in the patch change; identity and kind are
    /// untouchable by construction. Geometry changes re-register the
    /// footprint. A patch that changes nothing leaves the revision alone.
    pub fn update(&mut self, id: &EntityId, patch: EntityPatch) -> Result<(), StoreError> {
        let slot = *self
            .by_id
            .get(id)
            .ok_or_else(|| StoreError::UnknownEntity(id.clone()))?;
        let entity = &mut self.entities[slot];

        let mut changed = false;
        let mut geometry_changed = false;

        if let Some(name) = patch.name
            && entity.name.as_ref() != Some(&name)
        {
            entity.name = Some(name);
            changed = true;
        }
        if let Some(size) = patch.size
            && entity.size != Some(size)
        {
            entity.size = Some(size);
            changed = true;
            geometry_changed = true;
        }
        if let Some(properties) = patch.properties
            && entity.properties != properties
        {
            entity.properties = properties;
            changed = true;
        }
        if let Some(position) = patch.position {
            let position = ground_constrained(position);
            if entity.position != position {
                entity.position = position;
                changed = true;
                geometry_changed = true;
            }
        }

        if geometry_changed {
            let footprint = entity.footprint(self.fallback_size);
            self.index.update(slot, footprint);
        }
        if changed {
            self.bump();
        }
        Ok(())
    }

    /// Moves the entity with `id`, leaving every other field untouched.
    ///
    /// This is the drag path: called once per pointer frame while an entity
    /// is being moved, so it is a straight position write plus an index
    /// update with no patch allocation.
    pub fn set_position(&mut self, id: &EntityId, position: DVec3) -> Result<(), StoreError> {
        let slot = *self
            .by_id
            .get(id)
            .ok_or_else(|| StoreError::UnknownEntity(id.clone()))?;
        let position = ground_constrained(position);
        let entity = &mut self.entities[slot];
        if entity.position == position {
            return Ok(());
        }
        entity.position = position;
        let footprint = entity.footprint(self.fallback_size);
        self.index.update(slot, footprint);
        self.bump();
        Ok(())
    }

    /// Finds the topmost entity whose footprint contains `p`.
    ///
    /// Candidates come from the spatial index; ties resolve in reverse
    /// insertion order so the entity drawn last wins. Containment is closed,
    /// so clicks exactly on a footprint edge still hit.
    #[must_use]
    pub fn hit_test(&self, p: Point) -> Option<&Entity> {
        let mut topmost: Option<usize> = None;
        self.index.visit_point(p, |slot| {
            topmost = Some(topmost.map_or(slot, |t| t.max(slot)));
        });
        topmost.map(|slot| &self.entities[slot])
    }

    /// Returns the entities whose footprint strictly overlaps `rect`, in
    /// insertion order.
    ///
    /// Touching footprints are not reported; edge-to-edge placement never
    /// counts as an overlap.
    pub fn overlapping(&self, rect: &GroundAabb) -> impl Iterator<Item = &Entity> {
        self.index
            .query_rect(rect)
            .into_iter()
            .map(move |slot| &self.entities[slot])
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
