//! Core Trainer struct and basic methods

use std::time::Instant;

use super::model::Model;
use super::state::TrainerState;
use crate::config::{build_callbacks, TrainConfig};
use crate::error::Result;
use crate::train::callback::{Callback, CallbackRunner, HistoryCallback, HookArgs, TrainingEvent};

/// Drives a [`Model`] through epochs and fires lifecycle events
///
/// # Example
///
/// ```
/// use train_hooks::train::{EarlyStopping, SyntheticModel, Trainer};
///
/// let mut trainer = Trainer::new(SyntheticModel::new(1.0, 0.9), 5);
/// trainer.add_callback(EarlyStopping::new(2, 0.001));
///
/// let batches = vec![(); 4];
/// let result = trainer.fit(&batches, Some(batches.as_slice())).unwrap();
/// assert!(result.epochs_run <= 5);
/// ```
pub struct Trainer<M: Model> {
    /// Model being trained
    pub(crate) model: M,

    /// Maximum number of epochs
    pub(crate) max_epochs: usize,

    /// Whether to run the validation phase when batches are given
    pub(crate) validate: bool,

    /// State shared with callbacks
    pub(crate) state: TrainerState,

    /// Registered callbacks
    pub(crate) callbacks: CallbackRunner<TrainerState>,

    /// Handles to history callbacks declared in config
    pub(crate) histories: Vec<HistoryCallback>,

    /// Training start time
    pub(crate) start_time: Option<Instant>,
}

impl<M: Model> Trainer<M> {
    /// Create a trainer with no callbacks
    pub fn new(model: M, max_epochs: usize) -> Self {
        Self {
            model,
            max_epochs,
            validate: true,
            state: TrainerState::new(max_epochs),
            callbacks: CallbackRunner::new(),
            histories: Vec::new(),
            start_time: None,
        }
    }

    /// Create a trainer from a validated configuration, with the configured callbacks
    pub fn from_config(model: M, config: &TrainConfig) -> Result<Self> {
        config.validate()?;
        let mut trainer = Self::new(model, config.epochs).with_validation(config.validate);
        let built = build_callbacks(config);
        trainer.callbacks = CallbackRunner::from_callbacks(built.callbacks);
        trainer.histories = built.histories;
        Ok(trainer)
    }

    /// Enable or disable the validation phase
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Add a callback to the trainer
    pub fn add_callback<C: Callback<TrainerState> + 'static>(&mut self, callback: C) {
        self.callbacks.add(callback);
    }

    /// Get reference to the model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get mutable reference to the model
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the trainer and return the model
    pub fn into_model(self) -> M {
        self.model
    }

    /// Maximum number of epochs
    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    /// Current trainer state
    pub fn state(&self) -> &TrainerState {
        &self.state
    }

    /// Get reference to the callback runner
    pub fn callbacks(&self) -> &CallbackRunner<TrainerState> {
        &self.callbacks
    }

    /// First history callback declared in config, if any
    pub fn history(&self) -> Option<&HistoryCallback> {
        self.histories.first()
    }

    /// Get mutable reference to the callback runner
    pub fn callbacks_mut(&mut self) -> &mut CallbackRunner<TrainerState> {
        &mut self.callbacks
    }

    /// Record `event` in the state and dispatch it to every callback
    pub(crate) fn fire(&mut self, event: TrainingEvent, args: &HookArgs) -> Result<()> {
        self.state.last_event = Some(event);
        self.callbacks.dispatch(event, &mut self.state, args)
    }

    pub(crate) fn elapsed_secs(&self) -> f64 {
        self.start_time.map_or(0.0, |t| t.elapsed().as_secs_f64())
    }
}

impl<M: Model + std::fmt::Debug> std::fmt::Debug for Trainer<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer")
            .field("model", &self.model)
            .field("max_epochs", &self.max_epochs)
            .field("validate", &self.validate)
            .field("state", &self.state)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}
