// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layline Index: a slot-addressed spatial index over ground footprints.
//!
//! The world store keeps one [`GroundAabb`] per entity in an index so that
//! hit testing and collision gating do not rescan every entity on every
//! pointer frame. The index is deliberately small:
//!
//! - [`Backend`]: the storage abstraction. Backends answer two queries:
//!   which slots contain a point ([`Backend::visit_point`], closed-interval
//!   containment) and which slots overlap a rectangle
//!   ([`Backend::visit_rect`], strict overlap, so footprints that merely
//!   touch are never reported).
//! - [`FlatVec`]: linear scans over a flat vector. Small and obvious; the
//!   reference backend for semantics, and perfectly adequate for layouts
//!   placed by hand.
//! - [`UniformGrid`]: a hash grid over fixed-size world cells, for layouts
//!   large enough that linear scans hurt. Candidates from the grid are
//!   re-checked against the exact footprint, so cell granularity never
//!   changes query results, only how many slots are inspected.
//! - [`FootprintIndex`]: the facade the store talks to. Slots are assigned
//!   by the caller (the store uses its own entity order), which keeps the
//!   index free of any identity bookkeeping.
//!
//! Both backends must agree exactly; `tests/backend_equivalence.rs` holds
//! them to that.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use layline_ground::GroundAabb;
//! use layline_index::{FlatVec, FootprintIndex};
//!
//! let mut index = FootprintIndex::<FlatVec>::default();
//! index.insert(0, GroundAabb::from_center_size(Point::new(0.0, 0.0), 10.0, 10.0));
//! index.insert(1, GroundAabb::from_center_size(Point::new(10.0, 0.0), 10.0, 10.0));
//!
//! // Closed containment: the shared edge hits both footprints.
//! assert_eq!(index.query_point(Point::new(5.0, 0.0)), vec![0, 1]);
//!
//! // Strict overlap: a rectangle flush against slot 1 reports only slot 0.
//! let probe = GroundAabb::from_center_size(Point::new(0.0, 0.0), 10.0, 10.0);
//! assert_eq!(index.query_rect(&probe), vec![0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod backend;
mod facade;
mod flatvec;
#[cfg(feature = "backend_grid")]
mod grid;

pub use backend::Backend;
pub use facade::FootprintIndex;
pub use flatvec::FlatVec;
#[cfg(feature = "backend_grid")]
pub use grid::UniformGrid;
