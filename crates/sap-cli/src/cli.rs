// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface and command handlers.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sap_geom::{
    any_overlap, brute_force, normalize_hits, sweep_axis, AxisPipeline, BroadPhase, BruteForce,
    Hit, MultiAxisSap,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Algorithm, ConfigService, FsConfigStore, OutputFormat, SweepSettings};
use crate::report::{PairReport, VerifyReport, VerifyRow};
use crate::scene::{Scene, SceneError};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sap-cli")]
#[command(about = "Sweep-and-Prune broad phase: pairs, candidates, verification")]
pub struct Cli {
    /// Directory holding `sweep.json` settings (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` also applies.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by commands that read a scene.
#[derive(Debug, Args)]
pub struct SceneArgs {
    /// Path to a JSON scene file.
    pub scene: PathBuf,
    /// Report format (overrides settings).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Reject boxes with `min > max` instead of passing them through.
    #[arg(long)]
    pub strict: bool,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print confirmed overlapping pairs
    Pairs {
        /// Scene input and output options.
        #[command(flatten)]
        scene: SceneArgs,
        /// Algorithm (overrides settings).
        #[arg(long, value_enum)]
        algorithm: Option<Algorithm>,
        /// Axis for the `axis` algorithm (overrides settings).
        #[arg(long)]
        axis: Option<usize>,
        /// Comma-separated axis order for `sap` (overrides settings).
        #[arg(long, value_delimiter = ',')]
        order: Option<Vec<usize>>,
    },
    /// Print raw single-axis candidates (unverified on other axes)
    Candidates {
        /// Scene input and output options.
        #[command(flatten)]
        scene: SceneArgs,
        /// Axis to sweep (overrides settings).
        #[arg(long)]
        axis: Option<usize>,
    },
    /// Compare every algorithm against the brute-force oracle
    Verify {
        /// Scene input and output options.
        #[command(flatten)]
        scene: SceneArgs,
        /// Comma-separated axis order for `sap` (overrides settings).
        #[arg(long, value_delimiter = ',')]
        order: Option<Vec<usize>>,
    },
    /// Inspect or initialize stored settings
    Config {
        /// Config action.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,
    /// Write default settings
    Init {
        /// Overwrite existing settings.
        #[arg(long)]
        force: bool,
    },
}

/// Parses arguments, installs logging, and runs the selected command.
pub fn entrypoint() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Logs go to stderr so stdout stays machine-readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

/// Expands to a `match` on the scene's dimensionality that instantiates the
/// given generic call for `D = 1..=3`.
macro_rules! dispatch {
    ($scene:expr, |$d:ident| $call:expr) => {{
        match $scene.dimensions()? {
            1 => {
                const $d: usize = 1;
                $call
            }
            2 => {
                const $d: usize = 2;
                $call
            }
            3 => {
                const $d: usize = 3;
                $call
            }
            other => Err(SceneError::UnsupportedDimensions(other).into()),
        }
    }};
}

/// Runs a parsed command, writing reports to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let store = match &cli.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::platform()?,
    };
    let config = ConfigService::new(store);
    let settings = config.load_settings().context("failed to load settings")?;
    debug!(?settings, "settings loaded");

    match cli.command {
        Commands::Pairs {
            scene,
            algorithm,
            axis,
            order,
        } => {
            let algorithm = algorithm.unwrap_or(settings.algorithm);
            let axis = axis.unwrap_or(settings.pipeline_axis);
            let order = order.unwrap_or_else(|| settings.axis_order.clone());
            let format = scene.format.unwrap_or(settings.format);
            let loaded = load_scene(&scene)?;
            let report = dispatch!(loaded, |D| pairs_report::<D>(
                &loaded, scene.strict, algorithm, axis, &order
            ))?;
            report.write(out, format)
        }
        Commands::Candidates { scene, axis } => {
            let axis = axis.unwrap_or(settings.pipeline_axis);
            let format = scene.format.unwrap_or(settings.format);
            let loaded = load_scene(&scene)?;
            let report =
                dispatch!(loaded, |D| candidates_report::<D>(&loaded, scene.strict, axis))?;
            report.write(out, format)
        }
        Commands::Verify { scene, order } => {
            let order = order.unwrap_or_else(|| settings.axis_order.clone());
            let format = scene.format.unwrap_or(settings.format);
            let loaded = load_scene(&scene)?;
            let report =
                dispatch!(loaded, |D| verify_report::<D>(&loaded, scene.strict, &order))?;
            report.write(out, format)?;
            if !report.all_match() {
                bail!("broad-phase results diverge from the brute-force oracle");
            }
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                serde_json::to_writer_pretty(&mut *out, &settings)?;
                writeln!(out)?;
                Ok(())
            }
            ConfigAction::Init { force } => {
                if !force && config.stored_settings()?.is_some() {
                    bail!("settings already exist; pass --force to overwrite");
                }
                config
                    .save_settings(&SweepSettings::default())
                    .context("failed to save settings")?;
                writeln!(out, "wrote default settings")?;
                Ok(())
            }
        },
    }
}

fn load_scene(args: &SceneArgs) -> Result<Scene> {
    let scene = Scene::load(&args.scene)?;
    info!(path = %args.scene.display(), boxes = scene.boxes.len(), "scene loaded");
    Ok(scene)
}

fn normalized(mut hits: Vec<Hit>) -> Vec<Hit> {
    normalize_hits(&mut hits);
    hits
}

fn pairs_report<const D: usize>(
    scene: &Scene,
    strict: bool,
    algorithm: Algorithm,
    axis: usize,
    order: &[usize],
) -> Result<PairReport> {
    let aabbs = scene.to_aabbs::<D>(strict)?;
    let strategy: Box<dyn BroadPhase<f64, D>> = match algorithm {
        Algorithm::Brute => Box::new(BruteForce),
        Algorithm::Axis => Box::new(AxisPipeline::new(axis)),
        Algorithm::Sap => Box::new(MultiAxisSap::new(order)),
    };
    let hits = strategy.pairs(&aabbs)?;
    let label = match algorithm {
        Algorithm::Axis => format!("axis:{axis}"),
        _ => strategy.name().to_owned(),
    };
    Ok(PairReport::new(label, D, aabbs.len(), &hits))
}

fn candidates_report<const D: usize>(
    scene: &Scene,
    strict: bool,
    axis: usize,
) -> Result<PairReport> {
    let aabbs = scene.to_aabbs::<D>(strict)?;
    let hits = normalized(sweep_axis(&aabbs, axis)?);
    Ok(PairReport::new(format!("candidates:{axis}"), D, aabbs.len(), &hits))
}

fn verify_report<const D: usize>(
    scene: &Scene,
    strict: bool,
    order: &[usize],
) -> Result<VerifyReport> {
    let aabbs = scene.to_aabbs::<D>(strict)?;
    let oracle = brute_force(&aabbs);

    let mut rows = Vec::with_capacity(D + 1);
    let mut compare = |algorithm: String, hits: Vec<Hit>| {
        let matches_oracle = hits == oracle;
        if !matches_oracle {
            tracing::warn!(%algorithm, got = hits.len(), expected = oracle.len(), "mismatch");
        }
        rows.push(VerifyRow {
            algorithm,
            pairs: hits.len(),
            matches_oracle,
        });
    };

    compare("sap".to_owned(), MultiAxisSap::new(order).pairs(&aabbs)?);
    for axis in 0..D {
        compare(format!("axis:{axis}"), AxisPipeline::new(axis).pairs(&aabbs)?);
    }

    Ok(VerifyReport {
        dimensions: D,
        boxes: aabbs.len(),
        bounds: Scene::bounds(&aabbs).map(|b| (b.min().to_vec(), b.max().to_vec())),
        oracle_pairs: oracle.len(),
        any_overlap: any_overlap(&aabbs),
        rows,
    })
}
