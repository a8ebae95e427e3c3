// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Settings service, storage port, and filesystem adapter for the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key under which [`SweepSettings`] are stored.
pub const SETTINGS_KEY: &str = "sweep";

/// Byte storage for settings documents, addressed by key.
pub trait ConfigStore {
    /// Reads the document stored under `key`, or `None` if there is none.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError>;
    /// Replaces the document stored under `key`.
    fn write(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Errors raised while locating, reading or writing settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no per-user config directory.
    #[error("no config directory for this platform; pass --config-dir")]
    NoConfigDir,
    /// A settings file could not be read or written.
    #[error("settings file {path:?}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A stored document is not valid settings JSON.
    #[error("settings {key:?} are not valid: {source}")]
    Corrupt {
        /// Key of the bad document.
        key: String,
        /// Parse error.
        source: serde_json::Error,
    },
    /// Settings could not be encoded as JSON.
    #[error("could not encode settings: {0}")]
    Encode(serde_json::Error),
}

/// Reads and writes [`SweepSettings`] through a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S: ConfigStore> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Settings as stored, or `None` when nothing has been saved yet.
    /// An empty document counts as nothing saved.
    pub fn stored_settings(&self) -> Result<Option<SweepSettings>, ConfigError> {
        match self.store.read(SETTINGS_KEY)? {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| ConfigError::Corrupt {
                    key: SETTINGS_KEY.to_owned(),
                    source,
                }),
            _ => Ok(None),
        }
    }

    /// Effective settings: stored values over defaults.
    pub fn load_settings(&self) -> Result<SweepSettings, ConfigError> {
        Ok(self.stored_settings()?.unwrap_or_default())
    }

    /// Persists `settings` as pretty JSON.
    pub fn save_settings(&self, settings: &SweepSettings) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(settings).map_err(ConfigError::Encode)?;
        self.store.write(SETTINGS_KEY, &data)
    }
}

/// One `<key>.json` file per document under a base directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Per-user config directory (e.g. `~/.config/sap` on Linux).
    ///
    /// Only resolves the path; the directory is created on first write.
    pub fn platform() -> Result<Self, ConfigError> {
        ProjectDirs::from("dev", "flyingrobots", "sap")
            .map(|dirs| Self::at(dirs.config_dir()))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Uses `base` as the config directory.
    pub fn at(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.base)
            .and_then(|()| fs::write(&path, data))
            .map_err(|source| ConfigError::Io { path, source })
    }
}

/// Broad-phase algorithm selectable from settings or the command line.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// All-pairs oracle.
    Brute,
    /// Single-axis sweep plus exact verification.
    Axis,
    /// Multi-axis Sweep-and-Prune.
    #[default]
    Sap,
}

/// Output format for reports.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Machine-readable JSON.
    Json,
}

/// Persisted defaults for the broad-phase commands.
///
/// Command-line flags always win over stored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// Axis order for multi-axis refinement; axes beyond the scene's
    /// dimensionality are skipped.
    pub axis_order: Vec<usize>,
    /// Axis swept by the single-axis pipeline and `candidates`.
    pub pipeline_axis: usize,
    /// Algorithm used by `pairs`.
    pub algorithm: Algorithm,
    /// Report format.
    pub format: OutputFormat,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            axis_order: vec![0, 1, 2],
            pipeline_axis: 0,
            algorithm: Algorithm::Sap,
            format: OutputFormat::Table,
        }
    }
}
