// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Developer CLI for the `sap-geom` broad phase.
//!
//! Loads JSON scenes, runs the brute-force oracle, the single-axis pipeline,
//! or multi-axis Sweep-and-Prune over them, and reports the overlapping
//! pairs as a table or JSON. Defaults live in a small settings file managed
//! through [`config::ConfigService`].

pub mod cli;
pub mod config;
pub mod report;
pub mod scene;
