//! icon-ingest CLI
//!
//! Usage: icon-ingest <COMMAND>
//!
//! Commands:
//!   ingest  Match assets to ledger slots and place them into tier folders
//!   status  Show per-tier completion of the ledger

mod commands;

use clap::Parser;

use commands::error::print_error;
use commands::ingest::{cmd_ingest, IngestArgs};
use commands::status::cmd_status;
use commands::GlobalArgs;
use icon_ingest::presentation::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let global = GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Ingest {
            assets,
            icons,
            ledger,
            threshold,
            dry_run,
            diff,
        } => cmd_ingest(
            IngestArgs {
                assets,
                icons,
                ledger,
                threshold,
                dry_run,
                diff,
            },
            &global,
        ),
        Commands::Status { ledger } => cmd_status(ledger, &global),
    };

    if let Err(err) = result {
        print_error(&err, global.json);
        std::process::exit(1);
    }
}
