// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;
use core::fmt::Debug;

/// Scalar element type of a box coordinate.
///
/// Overlap tests and sweep decisions use the `PartialOrd` operators directly
/// (`<`, `>`, `>=`), so the predicate formula is applied exactly as written.
/// `total_cmp` exists only for sorting endpoints: floats use IEEE total order
/// so a stray NaN can never make the sort comparator inconsistent.
pub trait Coord: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Total order used when sorting endpoints.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// `self < other`. Unordered pairs (NaN) are never below.
    #[inline]
    fn is_below(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Less))
    }

    /// `self <= other`. Unordered pairs (NaN) are never at most.
    #[inline]
    fn is_at_most(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Less | Ordering::Equal))
    }
}

macro_rules! impl_coord_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coord for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_coord_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coord for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_coord_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_coord_float!(f32, f64);
