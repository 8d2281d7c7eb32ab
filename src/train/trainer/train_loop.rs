//! Epoch loop with lifecycle events
//!
//! Event order for one `fit` call:
//!
//! ```text
//! train_start
//!   epoch_start
//!     train_epoch_start
//!       train_step_start / train_step_end   (per batch)
//!     train_epoch_end
//!     valid_epoch_start                     (when validating)
//!       valid_step_start / valid_step_end   (per batch)
//!     valid_epoch_end
//!   epoch_end
//! train_end
//! ```

use std::time::Instant;

use super::core::Trainer;
use super::model::Model;
use super::result::TrainResult;
use super::state::{Stage, TrainerState};
use crate::error::Result;
use crate::train::callback::{HookArgs, TrainingEvent};

impl<M: Model> Trainer<M> {
    /// Train for up to `max_epochs`, firing every lifecycle event
    ///
    /// Validation runs after each training phase when `valid` holds at
    /// least one batch and validation is enabled. A callback ends training
    /// early by calling [`TrainerState::request_stop`]; the current epoch
    /// finishes and `train_end` still fires.
    ///
    /// Any error from a callback or model step is returned immediately.
    /// No further events fire for that run, including `train_end`.
    pub fn fit(&mut self, train: &[M::Batch], valid: Option<&[M::Batch]>) -> Result<TrainResult> {
        self.start_time = Some(Instant::now());
        self.state = TrainerState::new(self.max_epochs);

        let start_args = HookArgs::new()
            .with("max_epochs", self.max_epochs)
            .with("train_batches", train.len())
            .with("valid_batches", valid.map_or(0, <[M::Batch]>::len));
        self.fire(TrainingEvent::TrainStart, &start_args)?;

        let mut epochs_run = 0;
        for epoch in 0..self.max_epochs {
            if self.state.stop_requested {
                break;
            }

            self.state.epoch = epoch;
            self.state.train_loss = None;
            self.state.valid_loss = None;
            self.fire(TrainingEvent::EpochStart, &HookArgs::new().with("epoch", epoch))?;

            let train_loss = self.train_epoch(train)?;
            let valid_loss = match valid {
                Some(batches) if self.validate && !batches.is_empty() => {
                    self.valid_epoch(batches)?
                }
                _ => None,
            };

            self.state.stage = Stage::Idle;
            let mut end_args = HookArgs::new().with("epoch", epoch);
            if let Some(loss) = train_loss {
                end_args.insert("train_loss", loss);
            }
            if let Some(loss) = valid_loss {
                end_args.insert("valid_loss", loss);
            }
            self.fire(TrainingEvent::EpochEnd, &end_args)?;
            epochs_run += 1;
        }

        if self.state.stop_requested {
            log::info!(
                "training stopped by callback after {} of {} epochs",
                epochs_run,
                self.max_epochs
            );
        }

        self.state.stage = Stage::Idle;
        let end_args = HookArgs::new()
            .with("epochs_run", epochs_run)
            .with("stopped_early", self.state.stop_requested);
        self.fire(TrainingEvent::TrainEnd, &end_args)?;

        Ok(TrainResult {
            epochs_run,
            final_train_loss: self.state.train_loss,
            final_valid_loss: self.state.valid_loss,
            best_valid_loss: self.state.best_valid_loss,
            stopped_early: self.state.stop_requested,
            global_steps: self.state.global_step,
            elapsed_secs: self.elapsed_secs(),
        })
    }

    /// Produce predictions for every batch, firing test step events
    pub fn predict(&mut self, batches: &[M::Batch]) -> Result<Vec<M::Output>> {
        self.state.stage = Stage::Test;
        let mut outputs = Vec::with_capacity(batches.len());

        for (i, batch) in batches.iter().enumerate() {
            self.state.step = i;
            let args = HookArgs::new().with("batch_index", i);
            self.fire(TrainingEvent::TestStepStart, &args)?;
            outputs.push(self.model.predict_step(batch)?);
            self.fire(TrainingEvent::TestStepEnd, &args)?;
        }

        self.state.stage = Stage::Idle;
        Ok(outputs)
    }

    /// Training phase of one epoch; returns the average batch loss, `None` without batches
    fn train_epoch(&mut self, batches: &[M::Batch]) -> Result<Option<f32>> {
        self.state.stage = Stage::Train;
        self.fire(TrainingEvent::TrainEpochStart, &HookArgs::new())?;

        let mut total_loss = 0.0;
        for (i, batch) in batches.iter().enumerate() {
            self.state.step = i;
            self.fire(
                TrainingEvent::TrainStepStart,
                &HookArgs::new().with("batch_index", i),
            )?;

            let loss = self.model.train_step(batch)?;
            total_loss += loss;
            self.state.global_step += 1;
            self.state.train_loss = Some(total_loss / (i + 1) as f32);

            let args = HookArgs::new().with("batch_index", i).with("loss", loss);
            self.fire(TrainingEvent::TrainStepEnd, &args)?;
        }

        let avg_loss = average(total_loss, batches.len());
        self.state.train_loss = avg_loss;
        let mut args = HookArgs::new();
        if let Some(loss) = avg_loss {
            args.insert("loss", loss);
        }
        self.fire(TrainingEvent::TrainEpochEnd, &args)?;
        Ok(avg_loss)
    }

    /// Validation phase of one epoch; returns the average batch loss
    fn valid_epoch(&mut self, batches: &[M::Batch]) -> Result<Option<f32>> {
        self.state.stage = Stage::Valid;
        self.fire(TrainingEvent::ValidEpochStart, &HookArgs::new())?;

        let mut total_loss = 0.0;
        for (i, batch) in batches.iter().enumerate() {
            self.state.step = i;
            self.fire(
                TrainingEvent::ValidStepStart,
                &HookArgs::new().with("batch_index", i),
            )?;

            let loss = self.model.valid_step(batch)?;
            total_loss += loss;

            let args = HookArgs::new().with("batch_index", i).with("loss", loss);
            self.fire(TrainingEvent::ValidStepEnd, &args)?;
        }

        let avg_loss = average(total_loss, batches.len());
        let mut args = HookArgs::new();
        if let Some(loss) = avg_loss {
            self.state.record_valid_loss(loss);
            args.insert("loss", loss);
        }
        self.fire(TrainingEvent::ValidEpochEnd, &args)?;
        Ok(avg_loss)
    }
}

fn average(total: f32, count: usize) -> Option<f32> {
    (count > 0).then(|| total / count as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HookError;
    use crate::train::callback::Callback;
    use crate::train::{HistoryCallback, SyntheticModel};

    fn trainer(epochs: usize) -> (Trainer<SyntheticModel>, HistoryCallback) {
        let history = HistoryCallback::new();
        let mut trainer = Trainer::new(SyntheticModel::new(1.0, 0.9), epochs);
        trainer.add_callback(history.clone());
        (trainer, history)
    }

    #[test]
    fn test_fit_event_order_single_epoch() {
        use TrainingEvent::*;
        let (mut trainer, history) = trainer(1);
        let batches = vec![(); 2];
        trainer.fit(&batches, Some(&batches[..1])).unwrap();

        assert_eq!(
            history.events(),
            vec![
                TrainStart,
                EpochStart,
                TrainEpochStart,
                TrainStepStart,
                TrainStepEnd,
                TrainStepStart,
                TrainStepEnd,
                TrainEpochEnd,
                ValidEpochStart,
                ValidStepStart,
                ValidStepEnd,
                ValidEpochEnd,
                EpochEnd,
                TrainEnd,
            ]
        );
    }

    #[test]
    fn test_fit_without_validation() {
        let (mut trainer, history) = trainer(2);
        let batches = vec![(); 3];
        let result = trainer.fit(&batches, None).unwrap();

        assert_eq!(result.epochs_run, 2);
        assert_eq!(result.global_steps, 6);
        assert!(result.final_valid_loss.is_none());
        assert_eq!(history.count(TrainingEvent::ValidEpochStart), 0);
        assert_eq!(history.count(TrainingEvent::TrainStepEnd), 6);
        assert_eq!(history.count(TrainingEvent::EpochEnd), 2);
    }

    #[test]
    fn test_validation_disabled() {
        let (trainer, history) = trainer(1);
        let mut trainer = trainer.with_validation(false);
        let batches = vec![(); 2];
        trainer.fit(&batches, Some(batches.as_slice())).unwrap();
        assert_eq!(history.count(TrainingEvent::ValidEpochStart), 0);
    }

    #[test]
    fn test_empty_validation_set_is_skipped() {
        let (mut trainer, history) = trainer(1);
        let batches = vec![(); 2];
        let empty: Vec<()> = Vec::new();
        trainer.fit(&batches, Some(empty.as_slice())).unwrap();
        assert_eq!(history.count(TrainingEvent::ValidEpochEnd), 0);
    }

    #[test]
    fn test_empty_training_set() {
        let (mut trainer, history) = trainer(2);
        let result = trainer.fit(&[], None).unwrap();
        assert_eq!(result.epochs_run, 2);
        assert_eq!(result.final_train_loss, None);
        assert_eq!(trainer.state().train_loss, None);
        assert_eq!(history.count(TrainingEvent::TrainStepStart), 0);
        assert_eq!(history.count(TrainingEvent::TrainEpochEnd), 2);

        let epoch_end = history
            .records()
            .into_iter()
            .find(|r| r.event == TrainingEvent::EpochEnd)
            .unwrap();
        assert!(!epoch_end.args.contains_key("train_loss"));
    }

    #[test]
    fn test_empty_training_set_does_not_trip_early_stopping() {
        use crate::train::EarlyStopping;

        let mut trainer = Trainer::new(SyntheticModel::new(1.0, 0.9), 4);
        trainer.add_callback(EarlyStopping::new(1, 0.0).monitor(crate::train::Monitor::TrainLoss));
        let result = trainer.fit(&[], None).unwrap();
        assert_eq!(result.epochs_run, 4);
        assert!(!result.stopped_early);
    }

    #[test]
    fn test_losses_are_reported() {
        let mut trainer = Trainer::new(SyntheticModel::new(1.0, 0.5), 1);
        let batches = vec![(); 2];
        let result = trainer.fit(&batches, Some(batches.as_slice())).unwrap();

        // train losses 1.0, 0.5; validation sees 0.25 twice
        assert_eq!(result.final_train_loss, Some(0.75));
        assert_eq!(result.final_valid_loss, Some(0.25));
        assert_eq!(result.best_valid_loss, Some(0.25));
    }

    #[test]
    fn test_step_args_carry_loss() {
        struct LossCapture(Vec<f64>);
        impl Callback<TrainerState> for LossCapture {
            fn on_train_step_end(&mut self, _: &mut TrainerState, args: &HookArgs) -> Result<()> {
                self.0.push(args.get_f64("loss").unwrap());
                assert_eq!(args.get_u64("batch_index"), Some(self.0.len() as u64 - 1));
                Ok(())
            }
            fn on_epoch_end(&mut self, state: &mut TrainerState, args: &HookArgs) -> Result<()> {
                assert_eq!(args.get_u64("epoch"), Some(state.epoch as u64));
                assert!(args.get_f64("train_loss").is_some());
                Ok(())
            }
        }

        let mut trainer = Trainer::new(SyntheticModel::new(1.0, 0.5), 1);
        trainer.add_callback(LossCapture(Vec::new()));
        trainer.fit(&[(), ()], None).unwrap();
    }

    #[test]
    fn test_stop_request_ends_after_epoch() {
        struct StopAfterFirst;
        impl Callback<TrainerState> for StopAfterFirst {
            fn on_epoch_end(&mut self, state: &mut TrainerState, _: &HookArgs) -> Result<()> {
                state.request_stop();
                Ok(())
            }
        }

        let (mut trainer, history) = trainer(5);
        trainer.add_callback(StopAfterFirst);
        let result = trainer.fit(&[()], None).unwrap();

        assert_eq!(result.epochs_run, 1);
        assert!(result.stopped_early);
        assert_eq!(history.count(TrainingEvent::TrainEnd), 1);
    }

    #[test]
    fn test_stop_on_train_start_skips_epochs() {
        struct StopImmediately;
        impl Callback<TrainerState> for StopImmediately {
            fn on_train_start(&mut self, state: &mut TrainerState, _: &HookArgs) -> Result<()> {
                state.request_stop();
                Ok(())
            }
        }

        let (mut trainer, history) = trainer(3);
        trainer.add_callback(StopImmediately);
        let result = trainer.fit(&[()], None).unwrap();

        assert_eq!(result.epochs_run, 0);
        assert_eq!(
            history.events(),
            vec![TrainingEvent::TrainStart, TrainingEvent::TrainEnd]
        );
    }

    #[test]
    fn test_callback_error_aborts_fit() {
        struct FailOnValid;
        impl Callback<TrainerState> for FailOnValid {
            fn on_valid_epoch_start(&mut self, _: &mut TrainerState, _: &HookArgs) -> Result<()> {
                Err(HookError::callback(
                    "FailOnValid",
                    TrainingEvent::ValidEpochStart,
                    "no validation allowed",
                ))
            }
        }

        let (mut trainer, history) = trainer(3);
        trainer.add_callback(FailOnValid);
        let batches = vec![()];
        let err = trainer.fit(&batches, Some(batches.as_slice())).unwrap_err();

        assert!(matches!(err, HookError::Callback { .. }));
        assert_eq!(history.events().last(), Some(&TrainingEvent::ValidEpochStart));
        assert_eq!(history.count(TrainingEvent::TrainEnd), 0);
    }

    #[test]
    fn test_model_error_aborts_fit() {
        let history = HistoryCallback::new();
        let model = SyntheticModel::new(1.0, 0.9).fail_at_step(2);
        let mut trainer = Trainer::new(model, 3);
        trainer.add_callback(history.clone());

        let err = trainer.fit(&[(), ()], None).unwrap_err();
        assert!(matches!(err, HookError::Model { .. }));
        assert_eq!(history.count(TrainingEvent::TrainStepEnd), 2);
        assert_eq!(history.events().last(), Some(&TrainingEvent::TrainStepStart));
    }

    #[test]
    fn test_fit_resets_state() {
        let (mut trainer, _) = trainer(1);
        trainer.fit(&[()], None).unwrap();
        let result = trainer.fit(&[()], None).unwrap();
        assert_eq!(result.global_steps, 1);
        assert_eq!(trainer.state().last_event, Some(TrainingEvent::TrainEnd));
    }

    #[test]
    fn test_predict_fires_test_events() {
        let (mut trainer, history) = trainer(1);
        let outputs = trainer.predict(&[(), (), ()]).unwrap();

        assert_eq!(outputs.len(), 3);
        assert_eq!(history.count(TrainingEvent::TestStepStart), 3);
        assert_eq!(history.count(TrainingEvent::TestStepEnd), 3);
        assert_eq!(trainer.state().stage, Stage::Idle);
    }

    #[test]
    fn test_average_of_empty() {
        assert_eq!(average(0.0, 0), None);
        assert_eq!(average(3.0, 2), Some(1.5));
    }
}
