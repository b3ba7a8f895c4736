//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::{MatchPolicy, TieBreak};
use crate::domain::services::{DEFAULT_DECLARED_TOTAL, DEFAULT_PLACEHOLDER_DESCRIPTION};
use crate::error::IngestResult;

use super::loader;

/// Where assets come from and where everything goes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_assets")]
    pub assets: PathBuf,

    #[serde(default = "default_icons")]
    pub icons: PathBuf,

    #[serde(default = "default_ledger")]
    pub ledger: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            assets: default_assets(),
            icons: default_icons(),
            ledger: default_ledger(),
        }
    }
}

fn default_assets() -> PathBuf {
    PathBuf::from("assets")
}

fn default_icons() -> PathBuf {
    PathBuf::from("public/icons")
}

fn default_ledger() -> PathBuf {
    PathBuf::from("remaining_icons_prompts.txt")
}

/// Exact-match tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default)]
    pub tie_break: TieBreak,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            tie_break: TieBreak::default(),
        }
    }
}

fn default_threshold() -> f64 {
    MatchPolicy::DEFAULT_THRESHOLD
}

/// Ledger rewrite settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_declared_total")]
    pub declared_total: u32,

    #[serde(default = "default_placeholder")]
    pub placeholder_description: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            declared_total: default_declared_total(),
            placeholder_description: default_placeholder(),
        }
    }
}

fn default_declared_total() -> u32 {
    DEFAULT_DECLARED_TOTAL
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER_DESCRIPTION.to_string()
}

/// Slot allocation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Completed slots may be handed to unmatched assets
    #[serde(default = "default_true")]
    pub include_complete: bool,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            include_complete: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Output verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Parse a user-supplied level; unknown values fall back to `Normal`
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            _ => Verbosity::Normal,
        }
    }

    /// Raise the level by `-v` count
    pub fn raised(self, verbose: u8) -> Self {
        if verbose > 0 {
            Verbosity::Verbose
        } else {
            self
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Full configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub ledger: LedgerConfig,

    #[serde(default)]
    pub allocation: AllocationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file, ignoring unknown-key warnings
    pub fn load(path: &Path) -> IngestResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Validated match policy from the `[matching]` section
    pub fn match_policy(&self) -> IngestResult<MatchPolicy> {
        MatchPolicy::new(self.matching.threshold, self.matching.tie_break)
    }
}
