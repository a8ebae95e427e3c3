// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Sub};

use crate::error::SweepError;
use crate::types::coord::Coord;

/// Axis-aligned bounding box over `D` axes of coordinate type `T`.
///
/// Invariants:
/// - A well-formed box has `min[k] <= max[k]` on every axis.
/// - The broad phase does not enforce this. Malformed boxes are fed through the
///   predicate formula unchanged and may be under- or over-counted; use
///   [`Aabb::try_new`] or [`Aabb::is_well_formed`] when inputs are untrusted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb<T, const D: usize> {
    min: [T; D],
    max: [T; D],
}

impl<T: Coord, const D: usize> Aabb<T, D> {
    /// Number of axes.
    pub const DIMENSIONS: usize = D;

    /// Constructs an AABB from its minimum and maximum corners without
    /// validation.
    #[must_use]
    pub const fn new(min: [T; D], max: [T; D]) -> Self {
        Self { min, max }
    }

    /// Constructs an AABB, rejecting corners with `min > max` (or unordered
    /// values such as NaN) on any axis.
    pub fn try_new(min: [T; D], max: [T; D]) -> Result<Self, SweepError> {
        let aabb = Self { min, max };
        match aabb.first_malformed_axis() {
            Some(axis) => Err(SweepError::MalformedBox { index: 0, axis }),
            None => Ok(aabb),
        }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub const fn min(&self) -> [T; D] {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub const fn max(&self) -> [T; D] {
        self.max
    }

    /// Number of axes (`D`).
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        D
    }

    #[inline]
    pub(crate) fn min_at(&self, axis: usize) -> T {
        self.min[axis]
    }

    #[inline]
    pub(crate) fn max_at(&self, axis: usize) -> T {
        self.max[axis]
    }

    /// Projection of the box onto `axis` as `(min, max)`, or `None` when
    /// `axis >= D`.
    #[must_use]
    pub fn interval(&self, axis: usize) -> Option<(T, T)> {
        Some((*self.min.get(axis)?, *self.max.get(axis)?))
    }

    /// Returns `true` when `min <= max` on every axis.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.first_malformed_axis().is_none()
    }

    fn first_malformed_axis(&self) -> Option<usize> {
        (0..D).find(|&k| !self.min[k].is_at_most(&self.max[k]))
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    ///
    /// Closed-interval test per axis: `a.max >= b.min && b.max >= a.min`.
    /// Stops at the first axis that disproves overlap. Zero-dimensional boxes
    /// overlap vacuously.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        // Inclusive to treat touching faces as overlap for broad-phase pairing.
        (0..D).all(|k| self.max[k] >= other.min[k] && other.max[k] >= self.min[k])
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        for k in 0..D {
            if other.min[k] < min[k] {
                min[k] = other.min[k];
            }
            if other.max[k] > max[k] {
                max[k] = other.max[k];
            }
        }
        Self { min, max }
    }
}

impl<T, const D: usize> Aabb<T, D>
where
    T: Coord + Add<Output = T> + Sub<Output = T>,
{
    /// Builds an AABB centered at `center` with per-axis `half_extents`.
    #[must_use]
    pub fn from_center_half_extents(center: [T; D], half_extents: [T; D]) -> Self {
        Self {
            min: core::array::from_fn(|k| center[k] - half_extents[k]),
            max: core::array::from_fn(|k| center[k] + half_extents[k]),
        }
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    #[must_use]
    pub fn inflate(&self, m: T) -> Self {
        Self {
            min: self.min.map(|v| v - m),
            max: self.max.map(|v| v + m),
        }
    }
}

/// Free-function form of [`Aabb::overlaps`].
#[must_use]
pub fn overlaps<T: Coord, const D: usize>(a: &Aabb<T, D>, b: &Aabb<T, D>) -> bool {
    a.overlaps(b)
}
