//! Error reporting for the binary

use std::io::{self, Write};

use icon_ingest::IngestError;

/// Suggested fix for errors a user can act on
fn hint(err: &IngestError) -> Option<String> {
    match err {
        IngestError::AssetDirNotFound { .. } => {
            Some("Create the directory or point --assets at the folder holding the .png files.".to_string())
        }
        IngestError::LedgerNotFound { .. } => {
            Some("Pass --ledger or set [paths] ledger in icon-ingest.toml.".to_string())
        }
        IngestError::LedgerLocked { path } => Some(format!(
            "Wait for the other run to finish. If none is running, the lock on {}.lock is stale.",
            path.display()
        )),
        IngestError::InvalidThreshold { .. } => {
            Some("Use a threshold between 0.0 and 1.0 (default 0.85).".to_string())
        }
        IngestError::InvalidConfig { .. } | IngestError::Io(_) => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {:#}\n", err);
    if let Some(hint) = err.downcast_ref::<IngestError>().and_then(hint) {
        out.push_str(&format!("  fix: {}\n", hint));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let event = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", event);
        return;
    }

    eprint!("{}", format_error(err));
}
