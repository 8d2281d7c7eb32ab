//! Callback system for training lifecycle events
//!
//! A [`CallbackRunner`] holds an ordered list of [`Callback`]s and, for a
//! given [`TrainingEvent`], calls the matching `on_<event>` hook on each of
//! them in registration order. Hooks default to no-ops.
//!
//! # Example
//!
//! ```rust
//! use train_hooks::train::callback::{Callback, CallbackRunner, HookArgs, TrainingEvent};
//! use train_hooks::Result;
//!
//! struct Steps(usize);
//!
//! struct CountSteps;
//!
//! impl Callback<Steps> for CountSteps {
//!     fn on_train_step_end(&mut self, trainer: &mut Steps, _args: &HookArgs) -> Result<()> {
//!         trainer.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut runner = CallbackRunner::new().with(CountSteps);
//! let mut trainer = Steps(0);
//! runner.dispatch(TrainingEvent::TrainStepEnd, &mut trainer, &HookArgs::new())?;
//! assert_eq!(trainer.0, 1);
//! # Ok::<(), train_hooks::HookError>(())
//! ```

mod args;
mod checkpoint;
mod early_stopping;
mod event;
mod history;
mod progress;
mod runner;
mod traits;

pub use args::HookArgs;
pub use checkpoint::CheckpointCallback;
pub use early_stopping::{EarlyStopping, Monitor};
pub use event::TrainingEvent;
pub use history::{EventRecord, HistoryCallback};
pub use progress::ProgressCallback;
pub use runner::CallbackRunner;
pub use traits::Callback;
