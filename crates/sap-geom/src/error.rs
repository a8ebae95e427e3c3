// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors emitted by the broad-phase entry points.
///
/// "No hits" is never an error; an empty list is a normal result.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SweepError {
    /// A single-axis sweep was asked for an axis the boxes do not have.
    ///
    /// Never clamped: a clamped axis would yield a plausible but wrong
    /// candidate set.
    #[error("invalid axis {axis} for {dimensions}-dimensional boxes")]
    InvalidAxis {
        /// The requested axis.
        axis: usize,
        /// Dimensionality of the input boxes.
        dimensions: usize,
    },
    /// A box had `min > max` (or an unordered pair, e.g. NaN) on some axis.
    ///
    /// Only produced by validating constructors; the sweeps themselves accept
    /// malformed boxes and apply the predicate formula as written.
    #[error("malformed box {index}: min > max on axis {axis}")]
    MalformedBox {
        /// Position of the box in its input (0 for standalone construction).
        index: usize,
        /// First axis on which `min <= max` does not hold.
        axis: usize,
    },
}
