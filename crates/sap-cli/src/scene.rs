// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON scene files: a list of boxes with runtime-checked dimensionality.
//!
//! ```json
//! { "boxes": [ { "min": [0, 0], "max": [1, 1] }, { "min": [5, 5], "max": [6, 6] } ] }
//! ```
//!
//! The dimensionality comes from the optional `dimensions` field or, failing
//! that, from the first box. Every box must match it. Empty scenes without an
//! explicit `dimensions` are treated as 3D.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use sap_geom::{Aabb, SweepError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Largest dimensionality the CLI dispatches on.
pub const MAX_DIMENSIONS: usize = 3;

/// Errors raised while loading or converting a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be opened.
    #[error("failed to open scene {path:?}: {source}")]
    Io {
        /// Scene path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The scene file is not valid scene JSON.
    #[error("invalid scene json: {0}")]
    Json(#[from] serde_json::Error),
    /// A box corner has the wrong number of coordinates.
    #[error("box {index}: expected {expected} coordinates, found {found}")]
    DimensionMismatch {
        /// Position of the offending box.
        index: usize,
        /// Scene dimensionality.
        expected: usize,
        /// Length of the offending corner.
        found: usize,
    },
    /// The scene's dimensionality is outside `1..=MAX_DIMENSIONS`.
    #[error("unsupported dimensionality {0} (expected 1 to 3)")]
    UnsupportedDimensions(usize),
    /// Strict loading rejected a box.
    #[error(transparent)]
    Sweep(#[from] SweepError),
}

/// One box as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneBox {
    /// Minimum corner.
    pub min: Vec<f64>,
    /// Maximum corner.
    pub max: Vec<f64>,
}

/// A scene as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Explicit dimensionality; inferred from the first box when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
    /// Boxes in index order; hit indices refer to positions in this list.
    pub boxes: Vec<SceneBox>,
}

impl Scene {
    /// Reads and parses a scene file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let file = File::open(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Effective dimensionality, validated against every box.
    pub fn dimensions(&self) -> Result<usize, SceneError> {
        let dims = self
            .dimensions
            .or_else(|| self.boxes.first().map(|b| b.min.len()))
            .unwrap_or(MAX_DIMENSIONS);
        if dims == 0 || dims > MAX_DIMENSIONS {
            return Err(SceneError::UnsupportedDimensions(dims));
        }
        for (index, b) in self.boxes.iter().enumerate() {
            for corner in [&b.min, &b.max] {
                if corner.len() != dims {
                    return Err(SceneError::DimensionMismatch {
                        index,
                        expected: dims,
                        found: corner.len(),
                    });
                }
            }
        }
        Ok(dims)
    }

    /// Converts the scene into `D`-dimensional boxes.
    ///
    /// Malformed boxes (`min > max` on some axis) are passed through with a
    /// warning unless `strict` is set, in which case the first one is
    /// rejected with [`SweepError::MalformedBox`].
    pub fn to_aabbs<const D: usize>(&self, strict: bool) -> Result<Vec<Aabb<f64, D>>, SceneError> {
        let mut out = Vec::with_capacity(self.boxes.len());
        let mut malformed = 0_usize;
        for (index, b) in self.boxes.iter().enumerate() {
            let min = corner::<D>(index, &b.min)?;
            let max = corner::<D>(index, &b.max)?;
            let aabb = if strict {
                Aabb::try_new(min, max).map_err(|err| match err {
                    SweepError::MalformedBox { axis, .. } => SweepError::MalformedBox { index, axis },
                    other => other,
                })?
            } else {
                Aabb::new(min, max)
            };
            if !aabb.is_well_formed() {
                malformed += 1;
            }
            out.push(aabb);
        }
        if malformed > 0 {
            warn!(malformed, "scene contains boxes with min > max; results follow the raw predicate");
        }
        Ok(out)
    }

    /// Bounds of the whole scene, if it has any boxes.
    pub fn bounds<const D: usize>(aabbs: &[Aabb<f64, D>]) -> Option<Aabb<f64, D>> {
        let (first, rest) = aabbs.split_first()?;
        Some(rest.iter().fold(*first, |acc, b| acc.union(b)))
    }
}

fn corner<const D: usize>(index: usize, coords: &[f64]) -> Result<[f64; D], SceneError> {
    <[f64; D]>::try_from(coords).map_err(|_| SceneError::DimensionMismatch {
        index,
        expected: D,
        found: coords.len(),
    })
}
