//! Layered configuration for `courtcal`, loaded with figment.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. `~/.config/courtcal/config.toml`
//! 3. `./courtcal.toml`
//! 4. `COURTCAL_*` environment variables (`COURTCAL_DATA_PATH`, ...)

use std::path::{Path, PathBuf};

use anyhow::Context;
use cd_engine::ReferenceData;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON.
    Json,
}

/// `courtcal` settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtcalConfig {
    /// Reference data TOML; the bundled data set is used when unset.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    /// Operator notes file.
    #[serde(default)]
    pub notes_path: Option<PathBuf>,
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl CourtcalConfig {
    /// Load from all sources.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// The provider chain used by [`load`](Self::load).
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                figment = figment.merge(Toml::file(global));
            }
        }
        let local = PathBuf::from("courtcal.toml");
        if local.exists() {
            figment = figment.merge(Toml::file(local));
        }
        // COURTCAL_LOG is the log filter, not a setting
        figment.merge(Env::prefixed("COURTCAL_").ignore(&["log"]))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("courtcal").join("config.toml"))
    }

    /// Load the configured reference data, or the bundled set.
    pub fn reference_data(&self) -> anyhow::Result<ReferenceData> {
        match &self.data_path {
            Some(path) => load_reference_data(path),
            None => ReferenceData::bundled().context("bundled reference data is invalid"),
        }
    }

    /// Where operator notes are kept.
    ///
    /// Defaults to `<data dir>/courtcal/notes.txt`, or `courtcal-notes.txt`
    /// in the working directory when the platform has no data directory.
    pub fn notes_path(&self) -> PathBuf {
        match &self.notes_path {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .map(|p| p.join("courtcal").join("notes.txt"))
                .unwrap_or_else(|| PathBuf::from("courtcal-notes.txt")),
        }
    }
}

/// Read and validate a reference data file.
pub fn load_reference_data(path: &Path) -> anyhow::Result<ReferenceData> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read reference data {}", path.display()))?;
    ReferenceData::from_toml_str(&text)
        .with_context(|| format!("invalid reference data in {}", path.display()))
}
