// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity identity, kinds, and the patch payload.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use core::fmt;

use glam::DVec3;
use layline_ground::GroundAabb;

use crate::property::PropMap;

/// The discriminator token of a placeable kind.
///
/// Palettes hand the engine an opaque token per item; the engine never
/// enumerates kinds, so new placeable things need no changes here.
/// [`EntityKind::CONVEYOR`] is the one built-in token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityKind(Cow<'static, str>);

impl EntityKind {
    /// The conveyor-segment kind.
    pub const CONVEYOR: Self = Self(Cow::Borrowed("CONVEYOR"));

    /// Creates a kind from an arbitrary palette token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    /// Returns the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stable, unique entity identity.
///
/// Ids are minted once, at the drop that creates the entity, and never
/// reused; moving or editing an entity never changes its id. The token
/// format is `{kind}-{count}-{timestamp_millis}`, which keeps ids unique
/// even across store clears as long as the caller's clock is monotonic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(String);

impl EntityId {
    /// Mints an id for a new entity.
    ///
    /// `count` is the store population at creation time and
    /// `timestamp_millis` is a caller-supplied wall-clock reading; the
    /// engine takes no clock dependency of its own.
    #[must_use]
    pub fn mint(kind: &EntityKind, count: usize, timestamp_millis: u64) -> Self {
        Self(format!("{kind}-{count}-{timestamp_millis}"))
    }

    /// Wraps an existing token (for ids supplied by an embedder).
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A placed entity.
///
/// Positions are world-space 3-vectors with `y` pinned to `0.0` (entities
/// are ground-constrained; the component exists for uniformity with the 3D
/// math). Sizes are width/height/depth; height is cosmetic only and never
/// enters collision geometry or top-down projection. `size` is `None` for
/// entities whose size is left to the embedding context; the store resolves
/// those through its construction-time fallback, never by inventing one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    /// Stable identity, minted at creation.
    pub id: EntityId,
    /// Placeable kind token.
    pub kind: EntityKind,
    /// World-space center position; `y == 0.0` always.
    pub position: DVec3,
    /// Full extents (width, height, depth), when set.
    pub size: Option<DVec3>,
    /// Optional display label; [`Entity::display_name`] falls back to the kind.
    pub name: Option<String>,
    /// Open editable properties.
    pub properties: PropMap,
}

impl Entity {
    /// Creates an entity with no size, name, or properties set.
    #[must_use]
    pub fn new(id: EntityId, kind: EntityKind, position: DVec3) -> Self {
        Self {
            id,
            kind,
            position: ground_constrained(position),
            size: None,
            name: None,
            properties: PropMap::new(),
        }
    }

    /// Sets the size.
    #[must_use]
    pub fn with_size(mut self, size: DVec3) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the properties.
    #[must_use]
    pub fn with_properties(mut self, properties: PropMap) -> Self {
        self.properties = properties;
        self
    }

    /// Returns the label shown to users: the name when present, otherwise
    /// the kind token.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.kind.as_str())
    }

    /// Returns the size, resolving a missing one through `fallback`.
    #[must_use]
    pub fn size_or(&self, fallback: DVec3) -> DVec3 {
        self.size.unwrap_or(fallback)
    }

    /// Returns the ground footprint, resolving a missing size through
    /// `fallback`.
    #[must_use]
    pub fn footprint(&self, fallback: DVec3) -> GroundAabb {
        GroundAabb::footprint(self.position, self.size_or(fallback))
    }
}

/// A partial update, as submitted by the property editor.
///
/// Only fields that are `Some` are applied; everything else survives
/// untouched. Identity and kind are deliberately absent; they never change
/// after creation.
///
/// Note that size, name, and property edits are applied **without** a
/// collision re-check; only position changes pass through the interaction
/// controller's gate. Embedders that want gated size edits can consult
/// `layline_placement` before submitting the patch.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityPatch {
    /// New display label.
    pub name: Option<String>,
    /// New full extents.
    pub size: Option<DVec3>,
    /// Replacement property map.
    pub properties: Option<PropMap>,
    /// New world-space center (`y` is pinned to `0.0` on apply).
    pub position: Option<DVec3>,
}

impl EntityPatch {
    /// A patch that only relabels.
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A patch that only resizes.
    #[must_use]
    pub fn resize(size: DVec3) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    /// A patch that only moves.
    #[must_use]
    pub fn relocate(position: DVec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}

/// Pins a world position onto the ground plane.
pub(crate) fn ground_constrained(position: DVec3) -> DVec3 {
    DVec3::new(position.x, 0.0, position.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_formats_kind_count_timestamp() {
        let id = EntityId::mint(&EntityKind::CONVEYOR, 3, 1_722_945_600_000);
        assert_eq!(id.as_str(), "CONVEYOR-3-1722945600000");
    }

    #[test]
    fn mint_distinguishes_every_component() {
        let a = EntityId::mint(&EntityKind::CONVEYOR, 0, 1);
        let b = EntityId::mint(&EntityKind::CONVEYOR, 1, 1);
        let c = EntityId::mint(&EntityKind::CONVEYOR, 0, 2);
        let d = EntityId::mint(&EntityKind::new("ROBOT"), 0, 1);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn display_name_falls_back_to_kind() {
        let id = EntityId::from_token("x");
        let e = Entity::new(id.clone(), EntityKind::CONVEYOR, DVec3::ZERO);
        assert_eq!(e.display_name(), "CONVEYOR");
        assert_eq!(e.with_name("inbound belt").display_name(), "inbound belt");
    }

    #[test]
    fn new_pins_position_to_the_ground() {
        let e = Entity::new(
            EntityId::from_token("x"),
            EntityKind::CONVEYOR,
            DVec3::new(1.0, 7.5, 2.0),
        );
        assert_eq!(e.position, DVec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn size_or_prefers_the_set_size() {
        let fallback = DVec3::new(5.0, 0.2, 2.0);
        let e = Entity::new(EntityId::from_token("x"), EntityKind::CONVEYOR, DVec3::ZERO);
        assert_eq!(e.size_or(fallback), fallback);
        let sized = e.with_size(DVec3::new(10.0, 0.2, 10.0));
        assert_eq!(sized.size_or(fallback), DVec3::new(10.0, 0.2, 10.0));
    }
}
