//! Test environment builder for isolated icon-ingest runs.
//!
//! Provides `TestEnv` - a temp project directory laid out with the default
//! paths (`assets/`, `public/icons/`, `remaining_icons_prompts.txt`) and a
//! temp home so no user config leaks into a run.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use super::fixtures::png_bytes;

pub const LEDGER_FILE: &str = "remaining_icons_prompts.txt";
pub const ASSETS_DIR: &str = "assets";
pub const ICONS_DIR: &str = "public/icons";

const ENV_OVERRIDES: &[&str] = &[
    "ICON_INGEST_ASSETS",
    "ICON_INGEST_ICONS",
    "ICON_INGEST_LEDGER",
    "ICON_INGEST_THRESHOLD",
    "ICON_INGEST_VERBOSITY",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON: {l:?} ({e})"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project (the process cwd)
    pub project_root: TempDir,
    /// Temporary directory for HOME and XDG_CONFIG_HOME
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to the default icons directory
    pub fn icon_path(&self, relative: &str) -> PathBuf {
        self.project_path(ICONS_DIR).join(relative)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.project_path(LEDGER_FILE)
    }

    pub fn read_ledger(&self) -> String {
        std::fs::read_to_string(self.ledger_path()).expect("Failed to read ledger")
    }

    pub fn write_file(&self, relative: &str, content: impl AsRef<[u8]>) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Drop another asset into `assets/`
    pub fn add_asset(&self, name: &str) {
        self.write_file(&format!("{ASSETS_DIR}/{name}"), png_bytes(name));
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_icon-ingest"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");
        for name in ENV_OVERRIDES {
            cmd.env_remove(name);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to run icon-ingest");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Builder for TestEnv
pub struct TestEnvBuilder {
    ledger: Option<String>,
    assets: Vec<String>,
    create_assets_dir: bool,
    project_config: Option<String>,
    user_config: Option<String>,
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self {
            ledger: None,
            assets: Vec::new(),
            create_assets_dir: true,
            project_config: None,
            user_config: None,
        }
    }
}

impl TestEnvBuilder {
    /// Ledger text written to `remaining_icons_prompts.txt`
    pub fn with_ledger(mut self, text: &str) -> Self {
        self.ledger = Some(text.to_string());
        self
    }

    /// Asset filenames placed in `assets/`
    pub fn with_assets(mut self, names: &[&str]) -> Self {
        self.assets.extend(names.iter().map(|s| s.to_string()));
        self
    }

    pub fn without_assets_dir(mut self) -> Self {
        self.create_assets_dir = false;
        self
    }

    /// `icon-ingest.toml` in the project root
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// `$XDG_CONFIG_HOME/icon-ingest/config.toml`
    pub fn with_user_config(mut self, toml: &str) -> Self {
        self.user_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
        };

        if let Some(ledger) = &self.ledger {
            env.write_file(LEDGER_FILE, ledger);
        }
        if self.create_assets_dir {
            std::fs::create_dir_all(env.project_path(ASSETS_DIR))
                .expect("Failed to create assets dir");
        }
        for name in &self.assets {
            env.add_asset(name);
        }
        if let Some(config) = &self.project_config {
            env.write_file("icon-ingest.toml", config);
        }
        if let Some(config) = &self.user_config {
            // XDG location on Linux, Application Support on macOS
            for dir in [".config", "Library/Application Support"] {
                let path = env.home_dir.path().join(dir).join("icon-ingest/config.toml");
                std::fs::create_dir_all(path.parent().expect("config path has a parent"))
                    .expect("Failed to create user config dir");
                std::fs::write(path, config).expect("Failed to write user config");
            }
        }

        env
    }
}
