//! Trainer state shared with callbacks

use serde::{Deserialize, Serialize};

use crate::train::callback::TrainingEvent;

/// Phase the trainer is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Idle,
    Train,
    Valid,
    Test,
}

/// State handed to every callback hook
///
/// Callbacks read progress from here and end training early through
/// [`request_stop`](Self::request_stop).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainerState {
    /// Current epoch (0-indexed)
    pub epoch: usize,
    /// Total epochs planned
    pub max_epochs: usize,
    /// Batch index within the current phase
    pub step: usize,
    /// Training steps taken across all epochs
    pub global_step: usize,
    /// Current phase
    pub stage: Stage,
    /// Running average training loss for the current epoch
    pub train_loss: Option<f32>,
    /// Average validation loss of the latest validation phase
    pub valid_loss: Option<f32>,
    /// Best validation loss seen so far
    pub best_valid_loss: Option<f32>,
    /// Set by a callback to end training after the current epoch
    pub stop_requested: bool,
    /// Last event fired
    pub last_event: Option<TrainingEvent>,
}

impl TrainerState {
    /// Fresh state for a run of `max_epochs`
    pub fn new(max_epochs: usize) -> Self {
        Self {
            max_epochs,
            ..Default::default()
        }
    }

    /// Ask the trainer to stop after the current epoch
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Validation loss if available, otherwise training loss
    pub fn monitored_loss(&self) -> Option<f32> {
        self.valid_loss.or(self.train_loss)
    }

    /// Fold a finished validation loss into `valid_loss` and `best_valid_loss`
    pub(crate) fn record_valid_loss(&mut self, loss: f32) {
        self.valid_loss = Some(loss);
        if self.best_valid_loss.is_none_or(|best| loss < best) {
            self.best_valid_loss = Some(loss);
        }
    }
}
