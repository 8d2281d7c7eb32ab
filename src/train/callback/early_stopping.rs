//! Early stopping callback to halt training when loss plateaus

use serde::{Deserialize, Serialize};

use super::args::HookArgs;
use super::traits::Callback;
use crate::error::Result;
use crate::train::TrainerState;

/// Loss an epoch-end callback watches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Monitor {
    /// Validation loss, falling back to training loss when no validation ran
    #[default]
    ValidLoss,
    /// Training loss
    TrainLoss,
}

impl Monitor {
    /// Read the monitored loss from the trainer state
    pub fn read(self, state: &TrainerState) -> Option<f32> {
        match self {
            Monitor::ValidLoss => state.monitored_loss(),
            Monitor::TrainLoss => state.train_loss,
        }
    }
}

/// Early stopping callback to halt training when loss plateaus
///
/// Watches the monitored loss at every epoch end and requests a stop once
/// `patience` epochs pass without an improvement larger than `min_delta`.
///
/// # Example
///
/// ```rust
/// use train_hooks::train::callback::EarlyStopping;
///
/// // Stop if no improvement for 5 epochs, min improvement 0.001
/// let early_stop = EarlyStopping::new(5, 0.001);
/// ```
#[derive(Clone, Debug)]
pub struct EarlyStopping {
    /// Number of epochs to wait for improvement
    patience: usize,
    /// Minimum improvement to reset patience
    min_delta: f32,
    /// Best loss seen so far
    best_loss: f32,
    /// Epochs without improvement
    pub(crate) epochs_without_improvement: usize,
    monitor: Monitor,
}

impl EarlyStopping {
    /// Create new early stopping callback
    pub fn new(patience: usize, min_delta: f32) -> Self {
        Self {
            patience,
            min_delta,
            best_loss: f32::INFINITY,
            epochs_without_improvement: 0,
            monitor: Monitor::default(),
        }
    }

    /// Choose which loss to watch
    pub fn monitor(mut self, monitor: Monitor) -> Self {
        self.monitor = monitor;
        self
    }

    /// Best loss seen so far
    pub fn best_loss(&self) -> f32 {
        self.best_loss
    }

    /// Reset internal state
    pub fn reset(&mut self) {
        self.best_loss = f32::INFINITY;
        self.epochs_without_improvement = 0;
    }

    /// Check if loss improved
    fn check_improvement(&mut self, loss: f32) -> bool {
        if loss < self.best_loss - self.min_delta {
            self.best_loss = loss;
            self.epochs_without_improvement = 0;
            true
        } else {
            self.epochs_without_improvement += 1;
            false
        }
    }
}

impl Callback<TrainerState> for EarlyStopping {
    fn on_train_start(&mut self, _state: &mut TrainerState, _args: &HookArgs) -> Result<()> {
        self.reset();
        Ok(())
    }

    fn on_epoch_end(&mut self, state: &mut TrainerState, _args: &HookArgs) -> Result<()> {
        let Some(loss) = self.monitor.read(state) else {
            return Ok(());
        };
        self.check_improvement(loss);

        if self.epochs_without_improvement >= self.patience {
            log::info!(
                "Early stopping: no improvement for {} epochs (best loss: {:.4})",
                self.patience,
                self.best_loss
            );
            state.request_stop();
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "EarlyStopping"
    }
}
