// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rejection reasons for new-entity drops.

use layline_world::StoreError;

/// Why a palette drop did not create an entity.
///
/// A rejected drop leaves the store exactly as it was; the drag still ends.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    /// The drop position overlaps an existing entity's footprint.
    #[error("drop position overlaps an existing entity")]
    Blocked,
    /// The pointer does not map onto the ground plane (for example a
    /// perspective drop above the horizon).
    #[error("pointer does not map onto the ground plane")]
    OffPlane,
    /// No palette drag is in progress.
    #[error("no palette drag is in progress")]
    NotPlacing,
    /// The store refused the commit.
    #[error(transparent)]
    Store(#[from] StoreError),
}
