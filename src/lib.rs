//! # train-hooks
//!
//! Lifecycle callback dispatch for ML training loops.
//!
//! A training loop fires a fixed set of [`TrainingEvent`]s (epoch start,
//! train step end, ...). A [`CallbackRunner`] forwards each event to an
//! ordered list of [`Callback`]s by calling the matching `on_<event>` hook.
//! Hooks default to no-ops, run in registration order, and the first error
//! aborts the dispatch and propagates to the caller.
//!
//! The crate also ships a reference [`train::Trainer`] that fires every
//! event, built-in callbacks (progress logging, early stopping,
//! checkpointing, event history) and YAML configuration for them.
//!
//! # Example
//!
//! ```
//! use train_hooks::{Callback, CallbackRunner, HookArgs, Result, TrainingEvent};
//!
//! #[derive(Default)]
//! struct Trainer {
//!     log: Vec<String>,
//! }
//!
//! struct Announce;
//!
//! impl Callback<Trainer> for Announce {
//!     fn on_train_start(&mut self, trainer: &mut Trainer, _args: &HookArgs) -> Result<()> {
//!         trainer.log.push("started".into());
//!         Ok(())
//!     }
//! }
//!
//! struct Silent;
//! impl Callback<Trainer> for Silent {}
//!
//! let mut runner = CallbackRunner::new().with(Announce).with(Silent);
//! let mut trainer = Trainer::default();
//! runner.fire(TrainingEvent::TrainStart, &mut trainer)?;
//! assert_eq!(trainer.log, vec!["started"]);
//! # Ok::<(), train_hooks::HookError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod train;

pub use error::{HookError, Result};
pub use train::callback::{Callback, CallbackRunner, HookArgs, TrainingEvent};
