//! Error types with actionable diagnostics.
//!
//! Hook handlers, configuration loading and the reference trainer all
//! report through [`HookError`]. The callback runner never wraps or
//! rewrites these errors: whatever a handler returns is what the caller
//! of `dispatch` receives.

use std::path::PathBuf;
use thiserror::Error;

use crate::train::callback::TrainingEvent;

/// Result type alias for train-hooks operations.
pub type Result<T> = std::result::Result<T, HookError>;

/// Errors that can occur while dispatching lifecycle hooks or driving a
/// training run.
#[derive(Error, Debug)]
pub enum HookError {
    /// A callback handler failed.
    #[error("Callback '{callback}' failed during {event}: {message}")]
    Callback {
        callback: String,
        event: TrainingEvent,
        message: String,
    },

    /// An event or hook name did not match any lifecycle event.
    #[error("Unknown lifecycle event: {0}\n  → Run `train-hooks events` to list valid names")]
    UnknownEvent(String),

    /// Configuration file not found at expected path.
    #[error("Configuration file not found: {path}\n  → Create a config file or check the path")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValue { field: String, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A model step failed inside the training loop.
    #[error("Model step failed: {message}")]
    Model { message: String },
}

impl HookError {
    /// Create a callback failure for `event`.
    pub fn callback(
        callback: impl Into<String>,
        event: TrainingEvent,
        message: impl Into<String>,
    ) -> Self {
        Self::Callback {
            callback: callback.into(),
            event,
            message: message.into(),
        }
    }

    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a model step failure.
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model {
            message: message.into(),
        }
    }

    /// Check if this error is caused by user input rather than a runtime failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownEvent(_)
                | Self::ConfigNotFound { .. }
                | Self::ConfigParsing { .. }
                | Self::ConfigValue { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "E001",
            Self::ConfigParsing { .. } => "E002",
            Self::ConfigValue { .. } => "E003",
            Self::UnknownEvent(_) => "E010",
            Self::Callback { .. } => "E020",
            Self::Model { .. } => "E030",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}

impl From<serde_json::Error> for HookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
