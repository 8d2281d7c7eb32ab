//! Reference training loop
//!
//! `Trainer` steps a [`Model`] through epochs of training and validation
//! batches and fires every [`TrainingEvent`](crate::train::TrainingEvent)
//! at the matching point. Callbacks observe and steer the run through
//! [`TrainerState`].

mod core;
mod model;
mod result;
mod state;
mod synthetic;
mod train_loop;

pub use self::core::Trainer;
pub use model::Model;
pub use result::TrainResult;
pub use state::{Stage, TrainerState};
pub use synthetic::SyntheticModel;
