//! train-hooks CLI
//!
//! # Usage
//!
//! ```bash
//! # List lifecycle events and hook names
//! train-hooks events
//!
//! # Validate a callback configuration
//! train-hooks validate train.yaml
//!
//! # Dry-run the configured callbacks against a synthetic model
//! train-hooks simulate train.yaml --train-steps 8 --valid-steps 2
//! ```

use clap::Parser;
use std::process::ExitCode;
use train_hooks::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}
