// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::broad::endpoint::sorted_endpoints;
use crate::error::SweepError;
use crate::types::{aabb::Aabb, coord::Coord, hit::Hit};

/// Emits every pair whose projections overlap on `axis`.
///
/// Endpoints are sorted by projected minimum (ties on index) and swept left
/// to right with an active list. Before a box is paired, active boxes whose
/// projected maximum lies strictly below its minimum are evicted; it is then
/// paired with every box still active and joins the list itself.
///
/// Pairs are candidates only: they overlap on `axis` but are not checked on
/// any other axis. Each pair is emitted as `(earlier, later)` in sweep order.
///
/// Complexity: `O(n log n)` for the sort plus `O(n + k)` for the sweep where
/// `k` is the number of candidates (`O(n^2)` when everything overlaps on
/// `axis`).
///
/// # Errors
/// [`SweepError::InvalidAxis`] when `axis >= D`.
pub fn sweep_axis<T: Coord, const D: usize>(
    aabbs: &[Aabb<T, D>],
    axis: usize,
) -> Result<Vec<Hit>, SweepError> {
    if axis >= D {
        return Err(SweepError::InvalidAxis {
            axis,
            dimensions: D,
        });
    }
    let mut candidates = Vec::new();
    if aabbs.len() <= 1 {
        return Ok(candidates);
    }

    let endpoints = sorted_endpoints(aabbs, 0..aabbs.len(), axis);
    let mut active: Vec<usize> = Vec::with_capacity(aabbs.len());
    for ep in &endpoints {
        active.retain(|&j| !aabbs[j].max_at(axis).is_below(&ep.min));
        candidates.extend(active.iter().map(|&j| Hit::new(j, ep.index)));
        active.push(ep.index);
    }
    trace!(axis, boxes = aabbs.len(), candidates = candidates.len(), "axis sweep");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::hit::normalize_hits;

    #[test]
    fn rejects_out_of_range_axis() {
        let boxes = [Aabb::new([0.0_f32, 0.0], [1.0, 1.0]); 2];
        assert_eq!(
            sweep_axis(&boxes, 2),
            Err(SweepError::InvalidAxis {
                axis: 2,
                dimensions: 2
            })
        );
    }

    #[test]
    fn invalid_axis_wins_over_empty_input() {
        let boxes: [Aabb<i32, 1>; 0] = [];
        assert!(sweep_axis(&boxes, 1).is_err());
        assert_eq!(sweep_axis(&boxes, 0), Ok(Vec::new()));
    }

    #[test]
    fn zero_dimensional_boxes_have_no_axis() {
        let points = [Aabb::<i32, 0>::new([], []); 2];
        assert_eq!(
            sweep_axis(&points, 0),
            Err(SweepError::InvalidAxis {
                axis: 0,
                dimensions: 0
            })
        );
        assert!(sweep_axis::<i32, 0>(&[], 0).is_err());
    }

    #[test]
    fn nan_maximum_is_never_evicted() {
        // NaN < 5.0 is false, so box 0 stays active and is still paired.
        let boxes = [Aabb::new([0.0], [f64::NAN]), Aabb::new([5.0], [6.0])];
        let hits = sweep_axis(&boxes, 0).unwrap_or_default();
        assert_eq!(hits, vec![Hit::new(0, 1)]);
    }

    #[test]
    fn emits_pairs_in_sweep_order() {
        // Sorted by min on x: 2, 0, 1.
        let boxes = [
            Aabb::new([1, 0], [3, 0]),
            Aabb::new([2, 0], [4, 0]),
            Aabb::new([0, 0], [1, 0]),
        ];
        let hits = sweep_axis(&boxes, 0).unwrap_or_default();
        let tuples: Vec<_> = hits.iter().map(Hit::as_tuple).collect();
        assert_eq!(tuples, vec![(2, 0), (0, 1)]);
    }

    #[test]
    fn ignores_other_axes() {
        let boxes = [Aabb::new([0, 0], [1, 1]), Aabb::new([0, 9], [1, 10])];
        let mut hits = sweep_axis(&boxes, 0).unwrap_or_default();
        normalize_hits(&mut hits);
        assert_eq!(hits, vec![Hit::new(0, 1)]);
        assert_eq!(sweep_axis(&boxes, 1), Ok(Vec::new()));
    }
}
