//! YAML schema definitions for declarative callback configuration

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::train::Monitor;

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

fn default_true() -> bool {
    true
}

fn default_log_interval() -> usize {
    10
}

/// Training run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Number of epochs
    pub epochs: usize,

    /// Default progress logging interval, in training steps
    #[serde(default = "default_log_interval")]
    pub log_interval: usize,

    /// Run the validation phase when validation batches are available
    #[serde(
        default = "default_true",
        deserialize_with = "deserialize_bool_lenient"
    )]
    pub validate: bool,

    /// Callbacks, in invocation order
    #[serde(default)]
    pub callbacks: Vec<CallbackSpec>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 1,
            log_interval: default_log_interval(),
            validate: true,
            callbacks: Vec::new(),
        }
    }
}

/// One configured callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CallbackSpec {
    /// Log epoch and step progress
    Progress {
        /// Overrides the top-level `log_interval`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        log_interval: Option<usize>,
    },

    /// Stop when the monitored loss plateaus
    EarlyStopping {
        patience: usize,
        #[serde(default)]
        min_delta: f32,
        #[serde(default)]
        monitor: Monitor,
    },

    /// Write trainer state snapshots
    Checkpoint {
        dir: PathBuf,
        /// Also save every N epochs
        #[serde(default, skip_serializing_if = "Option::is_none")]
        every: Option<usize>,
        #[serde(
            default = "default_true",
            deserialize_with = "deserialize_bool_lenient"
        )]
        save_best: bool,
        #[serde(default)]
        monitor: Monitor,
    },

    /// Record the event trace
    History,
}

impl CallbackSpec {
    /// Name of the callback this spec builds
    pub fn callback_name(&self) -> &'static str {
        match self {
            CallbackSpec::Progress { .. } => "ProgressCallback",
            CallbackSpec::EarlyStopping { .. } => "EarlyStopping",
            CallbackSpec::Checkpoint { .. } => "CheckpointCallback",
            CallbackSpec::History => "HistoryCallback",
        }
    }

    /// One-line human readable summary
    pub fn describe(&self) -> String {
        match self {
            CallbackSpec::Progress { log_interval } => match log_interval {
                Some(n) => format!("progress (every {n} steps)"),
                None => "progress".to_string(),
            },
            CallbackSpec::EarlyStopping {
                patience,
                min_delta,
                monitor,
            } => format!(
                "early_stopping (patience {patience}, min_delta {min_delta}, monitor {})",
                monitor_name(*monitor)
            ),
            CallbackSpec::Checkpoint {
                dir,
                every,
                save_best,
                ..
            } => {
                let mut s = format!("checkpoint ({}", dir.display());
                if let Some(n) = every {
                    s.push_str(&format!(", every {n} epochs"));
                }
                if *save_best {
                    s.push_str(", best");
                }
                s.push(')');
                s
            }
            CallbackSpec::History => "history".to_string(),
        }
    }
}

fn monitor_name(monitor: Monitor) -> &'static str {
    match monitor {
        Monitor::ValidLoss => "valid_loss",
        Monitor::TrainLoss => "train_loss",
    }
}
