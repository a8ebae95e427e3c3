// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Report rendering for CLI commands (table or JSON).

use std::io::Write;

use comfy_table::{presets::UTF8_FULL, Table};
use sap_geom::Hit;
use serde::Serialize;

use crate::config::OutputFormat;

/// Pairs produced by one algorithm over one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairReport {
    /// Algorithm label, e.g. `sap` or `axis:0`.
    pub algorithm: String,
    /// Scene dimensionality.
    pub dimensions: usize,
    /// Number of boxes in the scene.
    pub boxes: usize,
    /// Normalized pairs as `[a, b]` with `a < b`.
    pub pairs: Vec<[usize; 2]>,
}

impl PairReport {
    /// Builds a report from already-normalized hits.
    pub fn new(algorithm: impl Into<String>, dimensions: usize, boxes: usize, hits: &[Hit]) -> Self {
        Self {
            algorithm: algorithm.into(),
            dimensions,
            boxes,
            pairs: hits.iter().map(|h| [h.a(), h.b()]).collect(),
        }
    }

    /// Writes the report in `format`.
    pub fn write(&self, out: &mut impl Write, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
            OutputFormat::Table => {
                let mut table = Table::new();
                table.load_preset(UTF8_FULL).set_header(vec!["a", "b"]);
                for [a, b] in &self.pairs {
                    table.add_row(vec![a.to_string(), b.to_string()]);
                }
                writeln!(
                    out,
                    "{}: {} pairs among {} boxes ({}D)",
                    self.algorithm,
                    self.pairs.len(),
                    self.boxes,
                    self.dimensions
                )?;
                if !self.pairs.is_empty() {
                    writeln!(out, "{table}")?;
                }
            }
        }
        Ok(())
    }
}

/// One row of a `verify` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyRow {
    /// Algorithm label.
    pub algorithm: String,
    /// Number of normalized pairs produced.
    pub pairs: usize,
    /// Whether the pairs equal the oracle's.
    pub matches_oracle: bool,
}

/// Summary of a `verify` run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyReport {
    /// Scene dimensionality.
    pub dimensions: usize,
    /// Number of boxes in the scene.
    pub boxes: usize,
    /// Scene bounds as `(min, max)`, absent for empty scenes.
    pub bounds: Option<(Vec<f64>, Vec<f64>)>,
    /// Oracle pair count.
    pub oracle_pairs: usize,
    /// Result of the early-exit any-overlap query.
    pub any_overlap: bool,
    /// Per-algorithm comparison.
    pub rows: Vec<VerifyRow>,
}

impl VerifyReport {
    /// `true` when every algorithm matched the oracle.
    pub fn all_match(&self) -> bool {
        self.rows.iter().all(|r| r.matches_oracle)
    }

    /// Writes the report in `format`.
    pub fn write(&self, out: &mut impl Write, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
            OutputFormat::Table => {
                writeln!(
                    out,
                    "{} boxes ({}D), oracle pairs: {}, any overlap: {}",
                    self.boxes, self.dimensions, self.oracle_pairs, self.any_overlap
                )?;
                if let Some((min, max)) = &self.bounds {
                    writeln!(out, "bounds: {min:?} .. {max:?}")?;
                }
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_header(vec!["algorithm", "pairs", "matches oracle"]);
                for row in &self.rows {
                    table.add_row(vec![
                        row.algorithm.clone(),
                        row.pairs.to_string(),
                        if row.matches_oracle { "yes" } else { "NO" }.to_string(),
                    ]);
                }
                writeln!(out, "{table}")?;
            }
        }
        Ok(())
    }
}
