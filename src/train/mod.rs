//! Training lifecycle: callbacks and the loop that fires them
//!
//! - [`callback`]: lifecycle events, the `Callback` trait, the runner and
//!   built-in callbacks
//! - [`Trainer`]: a reference loop that fires every event
//!
//! # Example
//!
//! ```
//! use train_hooks::train::{HistoryCallback, SyntheticModel, Trainer, TrainingEvent};
//!
//! let history = HistoryCallback::new();
//! let mut trainer = Trainer::new(SyntheticModel::new(1.0, 0.5), 2);
//! trainer.add_callback(history.clone());
//!
//! let batches = vec![(); 3];
//! trainer.fit(&batches, None).unwrap();
//! assert_eq!(history.count(TrainingEvent::TrainStepEnd), 6);
//! ```

pub mod callback;
mod trainer;

pub use callback::{
    Callback, CallbackRunner, CheckpointCallback, EarlyStopping, EventRecord, HistoryCallback,
    HookArgs, Monitor, ProgressCallback, TrainingEvent,
};
pub use trainer::{Model, Stage, SyntheticModel, TrainResult, Trainer, TrainerState};
