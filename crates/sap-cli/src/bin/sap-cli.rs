// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! CLI entry point for `sap-cli`.

use anyhow::Result;
use sap_cli::cli::entrypoint;

fn main() -> Result<()> {
    entrypoint()
}
