// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::aabb::Aabb;
use crate::types::coord::Coord;

/// Projection of one box onto one axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Endpoint<T> {
    pub(crate) min: T,
    pub(crate) max: T,
    pub(crate) index: usize,
}

/// Projects the boxes named by `indices` onto `axis` and sorts the result by
/// projected minimum, ties broken by ascending index.
///
/// Callers guarantee `axis < D` and that every index is in bounds.
pub(crate) fn sorted_endpoints<T, const D: usize, I>(
    aabbs: &[Aabb<T, D>],
    indices: I,
    axis: usize,
) -> Vec<Endpoint<T>>
where
    T: Coord,
    I: IntoIterator<Item = usize>,
{
    let mut endpoints: Vec<Endpoint<T>> = indices
        .into_iter()
        .map(|index| {
            let aabb = &aabbs[index];
            Endpoint {
                min: aabb.min_at(axis),
                max: aabb.max_at(axis),
                index,
            }
        })
        .collect();
    // Indices are unique within a call, so the unstable sort is still total.
    endpoints.sort_unstable_by(|x, y| x.min.total_cmp(&y.min).then(x.index.cmp(&y.index)));
    endpoints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_on_index() {
        let boxes = [
            Aabb::new([2, 0], [3, 1]),
            Aabb::new([0, 0], [1, 1]),
            Aabb::new([2, 0], [9, 1]),
            Aabb::new([0, 0], [4, 1]),
        ];
        let order: Vec<usize> = sorted_endpoints(&boxes, [3, 2, 1, 0], 0)
            .iter()
            .map(|e| e.index)
            .collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn projects_requested_axis_only() {
        let boxes = [Aabb::new([0.0, 5.0], [1.0, 6.0])];
        let eps = sorted_endpoints(&boxes, 0..1, 1);
        assert_eq!(
            eps,
            vec![Endpoint {
                min: 5.0,
                max: 6.0,
                index: 0
            }]
        );
    }
}
