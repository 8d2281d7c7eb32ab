//! Logging setup for CLI output

use log::LevelFilter;

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output except errors
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Resolve from the global `--quiet` / `--verbose` flags; quiet wins
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Default filter when `RUST_LOG` is not set
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Quiet => LevelFilter::Error,
            LogLevel::Normal => LevelFilter::Info,
            LogLevel::Verbose => LevelFilter::Debug,
        }
    }
}

/// Initialize `env_logger`; `RUST_LOG` overrides the level chosen by flags
pub fn init_logging(level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level.filter()).format_target(false);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    // A logger may already be installed (tests, embedding)
    let _ = builder.try_init();
}

/// Print a message unless output is suppressed
pub fn print(level: LogLevel, msg: &str) {
    if level != LogLevel::Quiet {
        println!("{msg}");
    }
}
