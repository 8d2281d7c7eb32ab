//! Progress callback for logging training progress

use super::args::HookArgs;
use super::traits::Callback;
use crate::error::Result;
use crate::train::TrainerState;

/// Progress callback for logging training progress
#[derive(Clone, Debug)]
pub struct ProgressCallback {
    /// Log every N training steps
    log_interval: usize,
}

impl ProgressCallback {
    /// Create progress callback
    pub fn new(log_interval: usize) -> Self {
        Self {
            log_interval: log_interval.max(1),
        }
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }

    /// Whether the step at `step` (0-indexed) should be logged
    fn should_log(&self, step: usize) -> bool {
        (step + 1).is_multiple_of(self.log_interval)
    }
}

impl Default for ProgressCallback {
    fn default() -> Self {
        Self { log_interval: 10 }
    }
}

impl Callback<TrainerState> for ProgressCallback {
    fn on_train_start(&mut self, state: &mut TrainerState, _args: &HookArgs) -> Result<()> {
        log::info!("Training for {} epochs", state.max_epochs);
        Ok(())
    }

    fn on_epoch_start(&mut self, state: &mut TrainerState, _args: &HookArgs) -> Result<()> {
        log::info!("Epoch {}/{} starting", state.epoch + 1, state.max_epochs);
        Ok(())
    }

    fn on_train_step_end(&mut self, state: &mut TrainerState, args: &HookArgs) -> Result<()> {
        if self.should_log(state.step) {
            log::info!(
                "  Step {} (global {}): loss: {:.4}",
                state.step + 1,
                state.global_step,
                args.get_f64("loss").unwrap_or(f64::NAN)
            );
        }
        Ok(())
    }

    fn on_epoch_end(&mut self, state: &mut TrainerState, _args: &HookArgs) -> Result<()> {
        let val_str = state
            .valid_loss
            .map(|v| format!(", valid_loss: {v:.4}"))
            .unwrap_or_default();

        log::info!(
            "Epoch {}/{}: train_loss: {:.4}{}",
            state.epoch + 1,
            state.max_epochs,
            state.train_loss.unwrap_or(f32::NAN),
            val_str
        );
        Ok(())
    }

    fn on_train_end(&mut self, state: &mut TrainerState, _args: &HookArgs) -> Result<()> {
        match state.best_valid_loss {
            Some(best) => log::info!(
                "Training finished after {} steps (best valid_loss: {best:.4})",
                state.global_step
            ),
            None => log::info!("Training finished after {} steps", state.global_step),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ProgressCallback"
    }
}
