//! CLI module for train-hooks
//!
//! This module contains the argument types and command handlers.

mod args;
mod commands;
mod logging;

pub use args::{Cli, Command, EventsArgs, OutputFormat, SimulateArgs, ValidateArgs};
pub use commands::{run_command, run_simulation, Simulation};
pub use logging::LogLevel;
