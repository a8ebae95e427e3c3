// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the broad phase (coordinates, AABB, hits).
//!
//! Determinism notes:
//! - Overlap semantics are inclusive on faces to avoid pair churn on contact
//!   boundaries.
//! - Sorting uses a total order per coordinate type (`Coord::total_cmp`), so
//!   endpoint order never depends on an inconsistent comparator.
//! - Hits are canonicalized as `(min_index, max_index)` before comparison.

#[doc = "Axis-aligned bounding boxes of any dimensionality."]
pub mod aabb;
#[doc = "Scalar coordinate abstraction."]
pub mod coord;
#[doc = "Index pairs produced by the broad phase."]
pub mod hit;
