//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands. Path flags left unset fall back to configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Whether to emit colors given the terminal state
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => is_tty,
        }
    }
}

/// icon-ingest - place icon assets into tier folders and keep the ledger current
#[derive(Parser, Debug)]
#[command(name = "icon-ingest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// Verbosity level (-v)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./icon-ingest.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match assets to ledger slots, copy them into tier folders and update the ledger
    Ingest {
        /// Directory holding incoming .png assets
        #[arg(long, value_name = "DIR")]
        assets: Option<PathBuf>,

        /// Root directory of the tier folders
        #[arg(long, value_name = "DIR")]
        icons: Option<PathBuf>,

        /// Progress ledger file
        #[arg(long, value_name = "FILE")]
        ledger: Option<PathBuf>,

        /// Similarity needed for a name match (0.0 - 1.0)
        #[arg(long, value_name = "F")]
        threshold: Option<f64>,

        /// Show what would happen without copying or writing
        #[arg(long)]
        dry_run: bool,

        /// Print a unified diff of the ledger changes
        #[arg(long)]
        diff: bool,
    },

    /// Show completion per tier and check the summary line
    Status {
        /// Progress ledger file
        #[arg(long, value_name = "FILE")]
        ledger: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_ingest_defaults() {
        let cli = Cli::try_parse_from(["icon-ingest", "ingest"]).unwrap();
        let Commands::Ingest {
            assets,
            icons,
            ledger,
            threshold,
            dry_run,
            diff,
        } = cli.command
        else {
            panic!("Expected Ingest command");
        };

        assert!(assets.is_none());
        assert!(icons.is_none());
        assert!(ledger.is_none());
        assert!(threshold.is_none());
        assert!(!dry_run);
        assert!(!diff);
        assert_eq!(cli.color, ColorWhen::Auto);
    }

    #[test]
    fn test_cli_parse_ingest_flags() {
        let cli = Cli::try_parse_from([
            "icon-ingest",
            "ingest",
            "--assets",
            "incoming",
            "--ledger",
            "ledger.txt",
            "--threshold",
            "0.9",
            "--dry-run",
            "--diff",
        ])
        .unwrap();

        if let Commands::Ingest {
            assets,
            ledger,
            threshold,
            dry_run,
            diff,
            ..
        } = cli.command
        {
            assert_eq!(assets, Some(PathBuf::from("incoming")));
            assert_eq!(ledger, Some(PathBuf::from("ledger.txt")));
            assert_eq!(threshold, Some(0.9));
            assert!(dry_run);
            assert!(diff);
        } else {
            panic!("Expected Ingest command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "icon-ingest",
            "status",
            "--json",
            "-v",
            "--color",
            "never",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.color, ColorWhen::Never);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Status { ledger: None }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["icon-ingest"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_threshold() {
        assert!(Cli::try_parse_from(["icon-ingest", "ingest", "--threshold", "high"]).is_err());
    }

    #[test]
    fn test_color_when_enabled() {
        assert!(ColorWhen::Auto.enabled(true));
        assert!(!ColorWhen::Auto.enabled(false));
        assert!(ColorWhen::Always.enabled(false));
        assert!(!ColorWhen::Never.enabled(true));
    }
}
