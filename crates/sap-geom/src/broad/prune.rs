// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::{debug, trace};

use crate::broad::endpoint::sorted_endpoints;
use crate::types::{aabb::Aabb, coord::Coord, hit::Hit};

/// Working set of the multi-axis refiner: groups of slice indices that are
/// connected on every axis processed so far.
///
/// Invariants:
/// - Every stored group has at least two members.
/// - Groups are disjoint; a pair of boxes that overlaps on all processed axes
///   always lands in the same group.
///
/// Grouping is a necessary condition for overlap, not a sufficient one: two
/// boxes chained through a third share a group without touching each other.
/// [`SuspectGroups::into_hits`] therefore verifies every pair exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectGroups {
    groups: Vec<Vec<usize>>,
}

impl SuspectGroups {
    /// Seeds a single group holding `0..len` (no groups when `len <= 1`).
    #[must_use]
    pub fn new(len: usize) -> Self {
        let groups = if len <= 1 {
            Vec::new()
        } else {
            vec![(0..len).collect()]
        };
        Self { groups }
    }

    /// Current groups, each with at least two members.
    #[must_use]
    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// Returns `true` when no group survives, i.e. no pair is possible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of index pairs reachable within the surviving groups.
    ///
    /// Never increases across calls to [`SuspectGroups::refine`].
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.groups
            .iter()
            .map(|g| g.len() * (g.len() - 1) / 2)
            .sum()
    }

    /// Splits every group into its connected runs on `axis`.
    ///
    /// Returns `false` and leaves the groups untouched when `axis >= D`.
    pub fn refine<T: Coord, const D: usize>(&mut self, aabbs: &[Aabb<T, D>], axis: usize) -> bool {
        if axis >= D {
            debug!(axis, dimensions = D, "skipping out-of-range axis");
            return false;
        }
        let mut next = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            split_connected_runs(aabbs, group, axis, &mut next);
        }
        self.groups = next;
        true
    }

    /// Parallel form of [`SuspectGroups::refine`]; groups are independent
    /// once split, so each is handled on rayon's pool.
    #[cfg(feature = "parallel")]
    pub fn par_refine<T: Coord, const D: usize>(
        &mut self,
        aabbs: &[Aabb<T, D>],
        axis: usize,
    ) -> bool {
        use rayon::prelude::*;

        if axis >= D {
            debug!(axis, dimensions = D, "skipping out-of-range axis");
            return false;
        }
        self.groups = self
            .groups
            .par_iter()
            .flat_map_iter(|group| {
                let mut runs = Vec::new();
                split_connected_runs(aabbs, group, axis, &mut runs);
                runs
            })
            .collect();
        true
    }

    /// Expands every group into its pairwise combinations and keeps those
    /// that pass the full overlap predicate.
    #[must_use]
    pub fn into_hits<T: Coord, const D: usize>(self, aabbs: &[Aabb<T, D>]) -> Vec<Hit> {
        let mut hits = Vec::new();
        for group in &self.groups {
            for (i, &a) in group.iter().enumerate() {
                for &b in &group[i + 1..] {
                    if aabbs[a].overlaps(&aabbs[b]) {
                        hits.push(Hit::new(a, b));
                    }
                }
            }
        }
        hits
    }
}

/// Appends the maximal connected runs of `group` on `axis` (size > 1 only).
///
/// A run closes when the next endpoint's minimum exceeds the largest maximum
/// seen so far in the run; nothing after that point can overlap anything in
/// the run on this axis.
fn split_connected_runs<T: Coord, const D: usize>(
    aabbs: &[Aabb<T, D>],
    group: &[usize],
    axis: usize,
    out: &mut Vec<Vec<usize>>,
) {
    if group.len() <= 1 {
        return;
    }
    let endpoints = sorted_endpoints(aabbs, group.iter().copied(), axis);
    let Some((first, rest)) = endpoints.split_first() else {
        return;
    };

    let mut run = vec![first.index];
    let mut segment_max = first.max;
    for ep in rest {
        if ep.min > segment_max {
            if run.len() > 1 {
                out.push(core::mem::take(&mut run));
            } else {
                run.clear();
            }
            run.push(ep.index);
            segment_max = ep.max;
        } else {
            run.push(ep.index);
            if ep.max > segment_max {
                segment_max = ep.max;
            }
        }
    }
    if run.len() > 1 {
        out.push(run);
    }
}

/// Multi-axis Sweep-and-Prune.
///
/// Starts from one group of all indices and, for each axis in `axis_order`,
/// splits every group into its connected runs on that axis. Axes `>= D` are
/// skipped so axis orders can be configured permissively. Surviving groups are
/// expanded into pairs and verified with the full predicate.
///
/// The result equals [`crate::brute_force`] as a set for every input and every
/// axis order. Ordering axes from sparsest to densest usually prunes fastest.
pub fn sweep_and_prune<T: Coord, const D: usize>(
    aabbs: &[Aabb<T, D>],
    axis_order: &[usize],
) -> Vec<Hit> {
    let mut groups = SuspectGroups::new(aabbs.len());
    for &axis in axis_order {
        if groups.is_empty() {
            break;
        }
        if groups.refine(aabbs, axis) {
            trace!(axis, groups = groups.groups().len(), pairs = groups.pair_count(), "refined");
        }
    }
    let hits = groups.into_hits(aabbs);
    debug!(boxes = aabbs.len(), hits = hits.len(), "sweep and prune");
    hits
}

/// [`sweep_and_prune`] over axes `0..D` in order.
pub fn sweep_and_prune_all_axes<T: Coord, const D: usize>(aabbs: &[Aabb<T, D>]) -> Vec<Hit> {
    let order: Vec<usize> = (0..D).collect();
    sweep_and_prune(aabbs, &order)
}

/// [`sweep_and_prune`] with per-axis group splitting spread over rayon's pool.
#[cfg(feature = "parallel")]
pub fn par_sweep_and_prune<T: Coord, const D: usize>(
    aabbs: &[Aabb<T, D>],
    axis_order: &[usize],
) -> Vec<Hit> {
    let mut groups = SuspectGroups::new(aabbs.len());
    for &axis in axis_order {
        if groups.is_empty() {
            break;
        }
        groups.par_refine(aabbs, axis);
    }
    groups.into_hits(aabbs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_nothing_for_degenerate_sizes() {
        assert!(SuspectGroups::new(0).is_empty());
        assert!(SuspectGroups::new(1).is_empty());
        assert_eq!(SuspectGroups::new(4).pair_count(), 6);
    }

    #[test]
    fn splits_into_connected_runs() {
        // x-runs: {0, 1, 2} chained, {3} alone, {4, 5} touching.
        let boxes = [
            Aabb::new([0], [2]),
            Aabb::new([1], [5]),
            Aabb::new([4], [6]),
            Aabb::new([10], [11]),
            Aabb::new([20], [21]),
            Aabb::new([21], [22]),
        ];
        let mut groups = SuspectGroups::new(boxes.len());
        assert!(groups.refine(&boxes, 0));
        assert_eq!(groups.groups(), &[vec![0, 1, 2], vec![4, 5]]);
        assert_eq!(groups.pair_count(), 4);
    }

    #[test]
    fn out_of_range_axis_leaves_groups_untouched() {
        let boxes = [Aabb::new([0, 0], [1, 1]), Aabb::new([5, 5], [6, 6])];
        let mut groups = SuspectGroups::new(2);
        let before = groups.clone();
        assert!(!groups.refine(&boxes, 7));
        assert_eq!(groups, before);
    }

    #[test]
    fn chained_run_is_verified_pairwise() {
        // 0 and 2 share a run through 1 but do not touch each other.
        let boxes = [Aabb::new([0], [1]), Aabb::new([1], [2]), Aabb::new([2], [3])];
        let hits = sweep_and_prune(&boxes, &[0]);
        assert_eq!(hits, vec![Hit::new(0, 1), Hit::new(1, 2)]);
    }

    #[test]
    fn empty_order_falls_back_to_pairwise_verification() {
        let boxes = [Aabb::new([0, 0], [1, 1]), Aabb::new([5, 5], [6, 6]), Aabb::new([0, 0], [2, 2])];
        assert_eq!(sweep_and_prune(&boxes, &[]), vec![Hit::new(0, 2)]);
    }
}
