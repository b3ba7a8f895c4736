//! Configuration module for icon-ingest
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ICON_INGEST_*)
//! 3. Project config (icon-ingest.toml, or --config)
//! 4. User config (<config_dir>/icon-ingest/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_or_default, load_with_warnings, user_config_path,
    with_env_overrides, ConfigWarning, ENV_PREFIX, PROJECT_CONFIG_FILE,
};
pub use types::{
    AllocationConfig, Config, LedgerConfig, MatchingConfig, OutputConfig, PathsConfig, Verbosity,
};
