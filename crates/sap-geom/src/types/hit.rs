// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Unordered pair of indices into the caller's box slice.
///
/// The order of `a` and `b` as emitted by an algorithm is an artifact of its
/// sweep order. Compare hit lists only after [`normalize_hits`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hit {
    a: usize,
    b: usize,
}

impl Hit {
    /// Creates a hit between indices `a` and `b` (order preserved).
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// First index as emitted.
    #[must_use]
    pub const fn a(&self) -> usize {
        self.a
    }

    /// Second index as emitted.
    #[must_use]
    pub const fn b(&self) -> usize {
        self.b
    }

    /// Returns the pair reordered so that `a <= b`.
    #[must_use]
    pub const fn canonical(self) -> Self {
        if self.a <= self.b {
            self
        } else {
            Self { a: self.b, b: self.a }
        }
    }

    /// Returns `(a, b)` as a tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (usize, usize) {
        (self.a, self.b)
    }
}

impl From<(usize, usize)> for Hit {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

/// Canonicalizes every pair as `(min, max)`, sorts ascending and removes
/// duplicates in place.
///
/// After this, two hit lists describe the same set iff they compare equal.
pub fn normalize_hits(hits: &mut Vec<Hit>) {
    for h in hits.iter_mut() {
        *h = h.canonical();
    }
    hits.sort_unstable();
    hits.dedup();
}
