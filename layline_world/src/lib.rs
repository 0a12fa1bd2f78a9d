// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layline World: the authoritative entity model and store.
//!
//! Everything a layout session knows about lives here: which entities exist,
//! where they stand on the ground plane, and what editable properties hang
//! off them. The store is the single writer boundary of the engine: views
//! read it, the interaction controller mutates it, and nothing else does.
//!
//! ## Concepts
//!
//! - [`Entity`]: a placed, ground-constrained rectangular thing. Identity
//!   ([`EntityId`]) is minted once and never reused; the kind
//!   ([`EntityKind`]) is an open token so palettes can introduce new
//!   placeable kinds without touching this crate.
//! - [`WorldStore`]: insertion-ordered storage. Insertion order doubles as
//!   the z-order for top-down hit testing: later entities draw on top and
//!   win ties. Every footprint is mirrored into a spatial index
//!   (`layline_index`) so hit tests and overlap queries stay cheap as
//!   layouts grow.
//! - [`EntityPatch`]: the property-editor payload. A patch updates only the
//!   fields it carries; identity and untouched fields survive verbatim.
//! - Revisions: [`WorldStore::revision`] bumps on every committed change.
//!   External views use it as their re-render signal instead of diffing
//!   entity lists.
//!
//! The store performs **no collision validation**. Placement gating is the
//! interaction controller's job (see `layline_placement` and
//! `layline_interact`); the store stays an obedient system of record so the
//! gate can be exercised in one place (or bypassed, as the property editor
//! deliberately does for size edits).
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use layline_world::{Entity, EntityKind, WorldStore};
//!
//! let mut store = WorldStore::new(DVec3::new(5.0, 0.2, 2.0));
//! let id = layline_world::EntityId::mint(&EntityKind::CONVEYOR, store.len(), 1_722_945_600_000);
//! store.add(Entity::new(id.clone(), EntityKind::CONVEYOR, DVec3::ZERO)).unwrap();
//!
//! let hit = store.hit_test(kurbo::Point::new(0.0, 0.0)).unwrap();
//! assert_eq!(hit.id, id);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod entity;
mod property;
mod store;

pub use entity::{Entity, EntityId, EntityKind, EntityPatch};
pub use property::{PropMap, PropValue};
pub use store::{StoreError, WorldStore};
