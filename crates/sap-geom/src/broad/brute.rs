// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::{aabb::Aabb, coord::Coord, hit::Hit};

/// Tests every pair `i < j` with the full overlap predicate.
///
/// `O(n^2)`. This is the correctness reference for the sweeping algorithms and
/// is not meant for hot paths. Output is already canonical and sorted.
pub fn brute_force<T: Coord, const D: usize>(aabbs: &[Aabb<T, D>]) -> Vec<Hit> {
    let mut out = Vec::new();
    for (i, a) in aabbs.iter().enumerate() {
        for (j, b) in aabbs.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                out.push(Hit::new(i, j)); // canonical since i < j
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_canonical_sorted_pairs() {
        let boxes = [
            Aabb::new([0, 0], [2, 2]),
            Aabb::new([100, 0], [101, 1]),
            Aabb::new([1, 1], [3, 3]),
            Aabb::new([2, 2], [4, 4]),
        ];
        let tuples: Vec<_> = brute_force(&boxes).iter().map(Hit::as_tuple).collect();
        assert_eq!(tuples, vec![(0, 2), (0, 3), (2, 3)]);
    }
}
