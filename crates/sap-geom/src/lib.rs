// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Sweep-and-Prune broad phase over axis-aligned bounding boxes.

This crate provides:
- Axis-aligned bounding boxes over any coordinate type and dimensionality
  (`Aabb<T, D>`), plus the inclusive overlap predicate.
- A single-axis sweep that emits candidate pairs (`sweep_axis`).
- A multi-axis refiner that splits suspect groups into per-axis connected
  components before verifying (`sweep_and_prune`).
- A single-axis pipeline with exact verification (`pipeline_from_axis`).
- A brute-force `O(n^2)` oracle (`brute_force`) used to validate the others.

Design notes:
- Stateless: every call is a pure function of its borrowed inputs; nothing
  survives between calls.
- Deterministic: endpoint sorting breaks ties on the original index, and
  `normalize_hits` yields the canonical pair list used for comparisons.
- Overlap is inclusive on faces (touching boxes are reported).
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Broad-phase algorithms and the strategy seam.
pub mod broad;
/// Error type shared by the broad-phase entry points.
pub mod error;
/// Foundational geometric types.
pub mod types;

pub use broad::brute::brute_force;
pub use broad::pipeline::{any_overlap, pipeline_from_axis};
#[cfg(feature = "parallel")]
pub use broad::prune::par_sweep_and_prune;
pub use broad::prune::{sweep_and_prune, sweep_and_prune_all_axes, SuspectGroups};
pub use broad::strategy::{AxisPipeline, BroadPhase, BruteForce, MultiAxisSap};
pub use broad::sweep::sweep_axis;
pub use error::SweepError;
pub use types::aabb::{overlaps, Aabb};
pub use types::coord::Coord;
pub use types::hit::{normalize_hits, Hit};
