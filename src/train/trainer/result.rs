//! Training result types

use serde::Serialize;

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainResult {
    /// Number of epochs that ran to completion
    pub epochs_run: usize,
    /// Average training loss of the last epoch
    pub final_train_loss: Option<f32>,
    /// Validation loss of the last epoch
    pub final_valid_loss: Option<f32>,
    /// Best validation loss achieved
    pub best_valid_loss: Option<f32>,
    /// Whether a callback stopped training before `max_epochs`
    pub stopped_early: bool,
    /// Total training steps
    pub global_steps: usize,
    /// Total training time in seconds
    pub elapsed_secs: f64,
}
