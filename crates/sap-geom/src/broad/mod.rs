// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Broad-phase algorithms over a borrowed slice of AABBs.
//!
//! Determinism contract (applies to every entry point here):
//! - Pair identity is an unordered pair of slice indices; callers compare
//!   results after [`crate::normalize_hits`], which canonicalizes to
//!   `(min_id, max_id)` and sorts lexicographically.
//! - Overlap is inclusive on faces (touching AABBs are considered overlapping).
//! - Endpoints are sorted by projected minimum with ties broken by ascending
//!   slice index, so intermediate candidate order is reproducible.
//! - No state survives a call; indices refer back into the caller's slice.
//!
//! `brute_force` is the `O(n^2)` baseline every other algorithm is checked
//! against. `sweep_and_prune` is the production path; `pipeline_from_axis` is a
//! cheaper alternative when one axis alone separates the scene well.

#[doc = "Brute-force all-pairs oracle."]
pub mod brute;
#[doc = "Axis projections and the deterministic endpoint sort."]
pub(crate) mod endpoint;
#[doc = "Single-axis sweep composed with exact verification."]
pub mod pipeline;
#[doc = "Multi-axis group refinement (Sweep-and-Prune)."]
pub mod prune;
#[doc = "`BroadPhase` trait and its strategy implementations."]
pub mod strategy;
#[doc = "Single-axis candidate sweep."]
pub mod sweep;
