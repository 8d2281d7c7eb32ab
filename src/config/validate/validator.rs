//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::{CallbackSpec, TrainConfig};

/// Validate a training configuration
///
/// Checks numeric ranges for the run and for every configured callback.
pub fn validate_config(config: &TrainConfig) -> Result<(), ValidationError> {
    if config.epochs == 0 {
        return Err(ValidationError::InvalidEpochs(config.epochs));
    }

    if config.log_interval == 0 {
        return Err(ValidationError::InvalidLogInterval(config.log_interval));
    }

    config.callbacks.iter().try_for_each(validate_callback)
}

fn validate_callback(spec: &CallbackSpec) -> Result<(), ValidationError> {
    match spec {
        CallbackSpec::Progress {
            log_interval: Some(0),
        } => Err(ValidationError::InvalidLogInterval(0)),
        CallbackSpec::EarlyStopping {
            patience,
            min_delta,
            ..
        } => {
            if *patience == 0 {
                return Err(ValidationError::InvalidPatience(*patience));
            }
            if min_delta.is_nan() || *min_delta < 0.0 {
                return Err(ValidationError::InvalidMinDelta(*min_delta));
            }
            Ok(())
        }
        CallbackSpec::Checkpoint { dir, every, .. } => {
            if dir.as_os_str().is_empty() {
                return Err(ValidationError::EmptyCheckpointDir);
            }
            if *every == Some(0) {
                return Err(ValidationError::InvalidCheckpointInterval(0));
            }
            Ok(())
        }
        CallbackSpec::Progress { .. } | CallbackSpec::History => Ok(()),
    }
}
