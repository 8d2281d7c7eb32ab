//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// train-hooks: lifecycle callbacks for training loops
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "train-hooks")]
#[command(version)]
#[command(about = "Inspect lifecycle events, validate callback configs and dry-run training loops")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List lifecycle events and the hooks they invoke
    Events(EventsArgs),

    /// Validate a callback configuration file
    Validate(ValidateArgs),

    /// Run a synthetic training loop with the configured callbacks and print the event trace
    Simulate(SimulateArgs),
}

/// Arguments for the events command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EventsArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the simulate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SimulateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Training batches per epoch
    #[arg(long, default_value_t = 4)]
    pub train_steps: usize,

    /// Validation batches per epoch (0 disables validation)
    #[arg(long, default_value_t = 2)]
    pub valid_steps: usize,

    /// Hide per-step events in the printed trace
    #[arg(long)]
    pub epochs_only: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}
