//! CLI command implementations

mod events;
mod simulate;
mod validate;

use crate::cli::args::{Cli, Command};
use crate::cli::logging::{init_logging, LogLevel};
use crate::error::Result;

pub use simulate::{run_simulation, Simulation};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);
    init_logging(log_level);

    match cli.command {
        Command::Events(args) => events::run_events(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Simulate(args) => simulate::run_simulate(args, log_level),
    }
}
