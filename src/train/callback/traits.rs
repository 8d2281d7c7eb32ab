//! Core trait for lifecycle callbacks
//!
//! `Callback<T>` has one hook per [`TrainingEvent`]. Every hook has a
//! default no-op implementation, so a callback only implements the events
//! it cares about. `T` is the trainer context handed to each hook; the
//! callback never owns it.

use super::args::HookArgs;
use super::event::TrainingEvent;
use crate::error::Result;

/// Trait for training lifecycle callbacks
///
/// Hooks return `Result<()>`. An `Err` aborts the current dispatch and is
/// returned unchanged to whoever fired the event.
pub trait Callback<T: ?Sized>: Send {
    /// Called at the start of every epoch, before the training phase
    fn on_epoch_start(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    /// Called at the end of every epoch, after validation
    fn on_epoch_end(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    fn on_train_epoch_start(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    fn on_train_epoch_end(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    fn on_valid_epoch_start(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    fn on_valid_epoch_end(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    /// Called before each training batch
    fn on_train_step_start(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    /// Called after each training batch
    fn on_train_step_end(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    fn on_valid_step_start(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    fn on_valid_step_end(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    fn on_test_step_start(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    fn on_test_step_end(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    /// Called once before the first epoch
    fn on_train_start(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    /// Called once after the last epoch
    fn on_train_end(&mut self, _trainer: &mut T, _args: &HookArgs) -> Result<()> {
        Ok(())
    }

    /// Get callback name for logging
    fn name(&self) -> &'static str {
        "Callback"
    }

    /// Invoke the hook bound to `event`
    ///
    /// The match is exhaustive, so adding an event without a hook fails to
    /// compile.
    fn handle(&mut self, event: TrainingEvent, trainer: &mut T, args: &HookArgs) -> Result<()> {
        match event {
            TrainingEvent::EpochStart => self.on_epoch_start(trainer, args),
            TrainingEvent::EpochEnd => self.on_epoch_end(trainer, args),
            TrainingEvent::TrainEpochStart => self.on_train_epoch_start(trainer, args),
            TrainingEvent::TrainEpochEnd => self.on_train_epoch_end(trainer, args),
            TrainingEvent::ValidEpochStart => self.on_valid_epoch_start(trainer, args),
            TrainingEvent::ValidEpochEnd => self.on_valid_epoch_end(trainer, args),
            TrainingEvent::TrainStepStart => self.on_train_step_start(trainer, args),
            TrainingEvent::TrainStepEnd => self.on_train_step_end(trainer, args),
            TrainingEvent::ValidStepStart => self.on_valid_step_start(trainer, args),
            TrainingEvent::ValidStepEnd => self.on_valid_step_end(trainer, args),
            TrainingEvent::TestStepStart => self.on_test_step_start(trainer, args),
            TrainingEvent::TestStepEnd => self.on_test_step_end(trainer, args),
            TrainingEvent::TrainStart => self.on_train_start(trainer, args),
            TrainingEvent::TrainEnd => self.on_train_end(trainer, args),
        }
    }
}
