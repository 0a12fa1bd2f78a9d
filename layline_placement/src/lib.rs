// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layline Placement: the collision gate.
//!
//! A placement is a candidate footprint ("this size, centered here") and
//! the one question this crate answers is whether committing it would make
//! two entities overlap. The interaction controller asks before every
//! commit; views may ask speculatively on every drag frame to drive
//! visual feedback, which is safe because the predicate is pure and never
//! touches the store.
//!
//! Semantics, shared with the rest of the engine:
//!
//! - Overlap is **strict**: footprints that only share an edge do not
//!   block each other, so flush placement is always legal.
//! - Heights are ignored; the gate lives entirely on the ground plane.
//! - An entity being moved excludes itself via `exclude`: its current
//!   footprint never blocks its own candidate.
//! - Entities stored without a size resolve through the store's fallback.
//!
//! The gate short-circuits on the first blocking entity. Which entity that
//! is carries no meaning; only the boolean does.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use layline_placement::Placement;
//! use layline_world::{Entity, EntityId, EntityKind, WorldStore};
//!
//! let size = DVec3::new(10.0, 0.2, 10.0);
//! let mut store = WorldStore::new(size);
//! store
//!     .add(Entity::new(EntityId::from_token("a"), EntityKind::CONVEYOR, DVec3::ZERO).with_size(size))
//!     .unwrap();
//!
//! // Overlapping by half: blocked.
//! let candidate = Placement::new(DVec3::new(5.0, 0.0, 0.0), size);
//! assert!(candidate.blocked(&store, None));
//!
//! // Exactly edge-to-edge: legal.
//! let flush = Placement::new(DVec3::new(10.0, 0.0, 0.0), size);
//! assert!(!flush.blocked(&store, None));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use glam::DVec3;
use layline_ground::GroundAabb;
use layline_world::{EntityId, WorldStore};

/// A candidate footprint: an entity-shaped box centered at a world position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Candidate world-space center.
    pub position: DVec3,
    /// Candidate full extents (width, height, depth); height is ignored.
    pub size: DVec3,
}

impl Placement {
    /// Creates a candidate placement.
    #[must_use]
    pub fn new(position: DVec3, size: DVec3) -> Self {
        Self { position, size }
    }

    /// Returns the candidate's ground footprint.
    #[must_use]
    pub fn footprint(&self) -> GroundAabb {
        GroundAabb::footprint(self.position, self.size)
    }

    /// Returns `true` if committing this placement would overlap an entity
    /// other than `exclude`.
    ///
    /// Pure: the store is only read, so the gate can run speculatively on
    /// every drag frame before anything is committed.
    #[must_use]
    pub fn blocked(&self, store: &WorldStore, exclude: Option<&EntityId>) -> bool {
        let footprint = self.footprint();
        store
            .overlapping(&footprint)
            .any(|entity| exclude != Some(&entity.id))
    }
}
