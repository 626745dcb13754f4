//! Configuration handling for the pairdot CLI
//!
//! Supports loading configuration from pairdot.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use clap::ValueEnum;
use pairdot_core::scoring::{DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH};
use pairdot_core::ScoringModel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pairdot.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Score for identical symbols
    #[serde(default = "default_match")]
    pub match_score: i32,

    /// Score for differing symbols
    #[serde(default = "default_mismatch")]
    pub mismatch: i32,

    /// Score for each gap position
    #[serde(default = "default_gap")]
    pub gap: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format for results
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the score matrix before the alignment
    #[serde(default = "default_true")]
    pub show_matrix: bool,

    /// Mark traceback path cells in the printed matrix
    #[serde(default = "default_true")]
    pub show_path: bool,

    /// Print the per-cell traceback direction grid
    #[serde(default)]
    pub show_directions: bool,

    /// Print the recurrence candidates of every cell
    #[serde(default)]
    pub show_steps: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Uppercase sequences before comparing them
    #[serde(default = "default_true")]
    pub uppercase: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Default value functions
fn default_match() -> i32 { DEFAULT_MATCH }
fn default_mismatch() -> i32 { DEFAULT_MISMATCH }
fn default_gap() -> i32 { DEFAULT_GAP }
fn default_true() -> bool { true }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_score: default_match(),
            mismatch: default_mismatch(),
            gap: default_gap(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_matrix: true,
            show_path: true,
            show_directions: false,
            show_steps: false,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { uppercase: true }
    }
}

impl ScoringConfig {
    pub fn to_model(&self) -> ScoringModel {
        ScoringModel::new(self.match_score, self.mismatch, self.gap)
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !local.exists() {
                    log::debug!("No {} in working directory, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                local
            }
        };

        log::info!("Loading configuration from: {}", path.display());
        Self::load_from_file(&path)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to serialize default configuration")
    }
}
