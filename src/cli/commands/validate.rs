//! Validate command implementation

use crate::cli::args::ValidateArgs;
use crate::cli::logging::{print, LogLevel};
use crate::config::{load_config, TrainConfig};
use crate::error::Result;

/// Format a configuration summary as a string
pub fn format_config_summary(config: &TrainConfig) -> String {
    let mut lines = vec![
        format!("  Epochs: {}", config.epochs),
        format!("  Log interval: {}", config.log_interval),
        format!(
            "  Validation: {}",
            if config.validate { "enabled" } else { "disabled" }
        ),
    ];

    if config.callbacks.is_empty() {
        lines.push("  Callbacks: none".to_string());
    } else {
        lines.push("  Callbacks (invocation order):".to_string());
        for (i, spec) in config.callbacks.iter().enumerate() {
            lines.push(format!("    {}. {}", i + 1, spec.describe()));
        }
    }
    lines.join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<()> {
    log::debug!("validating config {}", args.config.display());
    let config = load_config(&args.config)?;

    print(level, "Configuration is valid");
    print(level, &format_config_summary(&config));
    Ok(())
}
