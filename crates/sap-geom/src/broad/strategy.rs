// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::broad::{brute::brute_force, pipeline::pipeline_from_axis, prune::sweep_and_prune};
use crate::error::SweepError;
use crate::types::{
    aabb::Aabb,
    coord::Coord,
    hit::{normalize_hits, Hit},
};

/// Broad-phase interface: confirmed overlapping pairs for a slice of boxes.
///
/// Implementations must return pairs deterministically: each pair `(a, b)` is
/// canonicalized such that `a < b`, and the full list is sorted ascending by
/// `(a, b)` with no duplicates. Two strategies agree iff their outputs compare
/// equal.
pub trait BroadPhase<T: Coord, const D: usize> {
    /// Short, stable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Returns a canonical, deterministically-ordered list of overlapping pairs.
    fn pairs(&self, aabbs: &[Aabb<T, D>]) -> Result<Vec<Hit>, SweepError>;
}

/// All-pairs baseline; the reference every other strategy is checked against.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BruteForce;

impl<T: Coord, const D: usize> BroadPhase<T, D> for BruteForce {
    fn name(&self) -> &'static str {
        "brute"
    }

    fn pairs(&self, aabbs: &[Aabb<T, D>]) -> Result<Vec<Hit>, SweepError> {
        // Emitted as (i, j) with i < j in ascending order; already canonical.
        Ok(brute_force(aabbs))
    }
}

/// Single-axis sweep plus exact verification on a fixed axis.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AxisPipeline {
    /// Axis to sweep; must be `< D`.
    pub axis: usize,
}

impl AxisPipeline {
    /// Creates a pipeline sweeping `axis`.
    #[must_use]
    pub const fn new(axis: usize) -> Self {
        Self { axis }
    }
}

impl<T: Coord, const D: usize> BroadPhase<T, D> for AxisPipeline {
    fn name(&self) -> &'static str {
        "axis"
    }

    fn pairs(&self, aabbs: &[Aabb<T, D>]) -> Result<Vec<Hit>, SweepError> {
        let mut hits = pipeline_from_axis(aabbs, self.axis)?;
        normalize_hits(&mut hits);
        Ok(hits)
    }
}

/// Multi-axis Sweep-and-Prune over a configurable axis order.
///
/// An empty order means `0..D`. Out-of-range axes in the order are skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MultiAxisSap {
    /// Axes to refine on, in order.
    pub order: Vec<usize>,
}

impl MultiAxisSap {
    /// Creates a refiner using `order`.
    #[must_use]
    pub fn new(order: impl Into<Vec<usize>>) -> Self {
        Self {
            order: order.into(),
        }
    }
}

impl<T: Coord, const D: usize> BroadPhase<T, D> for MultiAxisSap {
    fn name(&self) -> &'static str {
        "sap"
    }

    fn pairs(&self, aabbs: &[Aabb<T, D>]) -> Result<Vec<Hit>, SweepError> {
        let mut hits = if self.order.is_empty() {
            let all: Vec<usize> = (0..D).collect();
            sweep_and_prune(aabbs, &all)
        } else {
            sweep_and_prune(aabbs, &self.order)
        };
        normalize_hits(&mut hits);
        Ok(hits)
    }
}
