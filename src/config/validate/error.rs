//! Validation error types

use crate::error::HookError;

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(usize),

    #[error("Invalid log interval: {0} (must be > 0)")]
    InvalidLogInterval(usize),

    #[error("Invalid early stopping patience: {0} (must be > 0)")]
    InvalidPatience(usize),

    #[error("Invalid early stopping min_delta: {0} (must be >= 0.0)")]
    InvalidMinDelta(f32),

    #[error("Invalid checkpoint interval: {0} (must be > 0)")]
    InvalidCheckpointInterval(usize),

    #[error("Checkpoint directory cannot be empty")]
    EmptyCheckpointDir,
}

impl ValidationError {
    /// Config field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidEpochs(_) => "epochs",
            ValidationError::InvalidLogInterval(_) => "log_interval",
            ValidationError::InvalidPatience(_) => "callbacks.early_stopping.patience",
            ValidationError::InvalidMinDelta(_) => "callbacks.early_stopping.min_delta",
            ValidationError::InvalidCheckpointInterval(_) => "callbacks.checkpoint.every",
            ValidationError::EmptyCheckpointDir => "callbacks.checkpoint.dir",
        }
    }
}

impl From<ValidationError> for HookError {
    fn from(err: ValidationError) -> Self {
        HookError::ConfigValue {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
