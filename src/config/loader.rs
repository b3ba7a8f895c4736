//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::error::{IngestError, IngestResult};

use super::types::{Config, Verbosity};

/// Project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "icon-ingest.toml";

/// Prefix shared by all environment overrides
pub const ENV_PREFIX: &str = "ICON_INGEST_";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> IngestResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| IngestError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a run.
///
/// An explicit `--config` file must exist. Otherwise the project file in
/// `cwd` wins over the user file; with neither, defaults apply. Environment
/// overrides are layered on top in every case.
pub fn load_or_default(
    explicit: Option<&Path>,
    cwd: &Path,
) -> IngestResult<(Config, Vec<ConfigWarning>)> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(cwd.join(PROJECT_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.is_file()),
    };

    let (config, warnings) = match source {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config)?, warnings))
}

/// `<config_dir>/icon-ingest/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("icon-ingest").join("config.toml"))
}

/// Apply `ICON_INGEST_*` overrides from the process environment
pub fn with_env_overrides(config: Config) -> IngestResult<Config> {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> IngestResult<Config> {
    let var = |suffix: &str| lookup(&format!("{}{}", ENV_PREFIX, suffix));

    if let Some(assets) = var("ASSETS") {
        config.paths.assets = PathBuf::from(assets);
    }
    if let Some(icons) = var("ICONS") {
        config.paths.icons = PathBuf::from(icons);
    }
    if let Some(ledger) = var("LEDGER") {
        config.paths.ledger = PathBuf::from(ledger);
    }

    if let Some(raw) = var("THRESHOLD") {
        config.matching.threshold =
            raw.trim()
                .parse()
                .map_err(|e: std::num::ParseFloatError| IngestError::InvalidConfig {
                    file: PathBuf::from(format!("{}THRESHOLD", ENV_PREFIX)),
                    message: format!("'{}': {}", raw, e),
                })?;
    }

    if let Some(level) = var("VERBOSITY") {
        config.output.verbosity = Verbosity::parse_lenient(&level);
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "assets",
        "icons",
        "ledger",
        "matching",
        "threshold",
        "tie_break",
        "declared_total",
        "placeholder_description",
        "allocation",
        "include_complete",
        "output",
        "verbosity",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, TextDiff::from_chars(unknown, candidate).ratio()))
        .filter(|(_, ratio)| *ratio >= 0.75)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate.to_string())
}
