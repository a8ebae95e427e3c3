// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::broad::endpoint::sorted_endpoints;
use crate::broad::sweep::sweep_axis;
use crate::error::SweepError;
use crate::types::{aabb::Aabb, coord::Coord, hit::Hit};

/// Single-axis sweep on `axis` followed by the full overlap predicate on every
/// candidate.
///
/// Cheaper than [`crate::sweep_and_prune`] when `axis` separates the scene
/// well; degenerates towards `O(n^2)` when most boxes overlap on `axis`.
/// Candidates naming an index outside `aabbs` are dropped.
///
/// # Errors
/// [`SweepError::InvalidAxis`] when `axis >= D`.
pub fn pipeline_from_axis<T: Coord, const D: usize>(
    aabbs: &[Aabb<T, D>],
    axis: usize,
) -> Result<Vec<Hit>, SweepError> {
    let candidates = sweep_axis(aabbs, axis)?;
    let considered = candidates.len();
    let hits: Vec<Hit> = candidates
        .into_iter()
        .filter(|hit| match (aabbs.get(hit.a()), aabbs.get(hit.b())) {
            (Some(a), Some(b)) => a.overlaps(b),
            _ => false,
        })
        .collect();
    debug!(axis, candidates = considered, hits = hits.len(), "axis pipeline");
    Ok(hits)
}

/// Returns `true` as soon as any two boxes overlap.
///
/// Sweeps axis 0 and verifies candidates on the fly, stopping at the first
/// confirmed pair. Zero-dimensional boxes overlap vacuously, so any two of
/// them count.
pub fn any_overlap<T: Coord, const D: usize>(aabbs: &[Aabb<T, D>]) -> bool {
    if aabbs.len() <= 1 {
        return false;
    }
    if D == 0 {
        return true;
    }

    let endpoints = sorted_endpoints(aabbs, 0..aabbs.len(), 0);
    let mut active: Vec<usize> = Vec::with_capacity(aabbs.len());
    for ep in &endpoints {
        active.retain(|&j| !aabbs[j].max_at(0).is_below(&ep.min));
        let current = &aabbs[ep.index];
        if active.iter().any(|&j| aabbs[j].overlaps(current)) {
            return true;
        }
        active.push(ep.index);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_candidates_that_fail_other_axes() {
        let boxes = [Aabb::new([0.0, 0.0], [5.0, 0.1]), Aabb::new([0.0, 5.0], [5.0, 5.1])];
        assert_eq!(sweep_axis(&boxes, 0).map(|c| c.len()), Ok(1));
        assert_eq!(pipeline_from_axis(&boxes, 0), Ok(Vec::new()));
    }

    #[test]
    fn propagates_invalid_axis() {
        let boxes = [Aabb::new([0, 0, 0], [1, 1, 1]); 3];
        assert_eq!(
            pipeline_from_axis(&boxes, 3),
            Err(SweepError::InvalidAxis {
                axis: 3,
                dimensions: 3
            })
        );
    }

    #[test]
    fn any_overlap_stops_at_first_hit() {
        let apart = [Aabb::new([0, 0], [1, 1]), Aabb::new([0, 3], [1, 4]), Aabb::new([5, 0], [6, 1])];
        assert!(!any_overlap(&apart));

        let mut touching = apart.to_vec();
        touching.push(Aabb::new([1, 1], [2, 2]));
        assert!(any_overlap(&touching));
    }

    #[test]
    fn nan_candidates_fail_verification() {
        let boxes = [Aabb::new([0.0, 0.0], [f64::NAN, 1.0]), Aabb::new([5.0, 0.0], [6.0, 1.0])];
        assert_eq!(sweep_axis(&boxes, 0).map(|c| c.len()), Ok(1));
        assert_eq!(pipeline_from_axis(&boxes, 0), Ok(Vec::new()));
        assert!(!any_overlap(&boxes));
    }

    #[test]
    fn any_overlap_degenerate_inputs() {
        let one = [Aabb::new([0.0], [1.0])];
        assert!(!any_overlap(&one));
        assert!(!any_overlap::<f32, 1>(&[]));
        let points = [Aabb::<i32, 0>::new([], []); 2];
        assert!(any_overlap(&points));
    }
}
