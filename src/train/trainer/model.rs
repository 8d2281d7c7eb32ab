//! Model abstraction driven by the trainer

use crate::error::Result;

/// A model the [`Trainer`](super::Trainer) can step through batches
///
/// Each step works on a single batch. Returning `Err` aborts the run.
pub trait Model {
    /// One batch of input data
    type Batch;
    /// Prediction produced for one batch
    type Output;

    /// Run forward, backward and optimizer update; return the batch loss
    fn train_step(&mut self, batch: &Self::Batch) -> Result<f32>;

    /// Compute the batch loss without updating parameters
    fn valid_step(&mut self, batch: &Self::Batch) -> Result<f32>;

    /// Produce predictions for one batch
    fn predict_step(&mut self, batch: &Self::Batch) -> Result<Self::Output>;
}
