//! Deterministic stand-in model for dry runs

use super::model::Model;
use crate::error::{HookError, Result};

/// Model whose loss decays geometrically with every training step
///
/// Validation loss never drops below `valid_floor`, which makes plateaus
/// (and therefore early stopping) easy to reproduce.
#[derive(Debug, Clone)]
pub struct SyntheticModel {
    loss: f32,
    decay: f32,
    valid_floor: f32,
    steps: usize,
    fail_at_step: Option<usize>,
}

impl SyntheticModel {
    /// Start at `initial_loss`, multiplying by `decay` after each train step
    pub fn new(initial_loss: f32, decay: f32) -> Self {
        Self {
            loss: initial_loss,
            decay,
            valid_floor: 0.0,
            steps: 0,
            fail_at_step: None,
        }
    }

    /// Clamp validation loss from below
    pub fn with_valid_floor(mut self, floor: f32) -> Self {
        self.valid_floor = floor;
        self
    }

    /// Make the n-th training step (0-indexed, across epochs) fail
    pub fn fail_at_step(mut self, step: usize) -> Self {
        self.fail_at_step = Some(step);
        self
    }

    /// Current loss
    pub fn loss(&self) -> f32 {
        self.loss
    }

    /// Training steps taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Model for SyntheticModel {
    type Batch = ();
    type Output = f32;

    fn train_step(&mut self, _batch: &()) -> Result<f32> {
        if self.fail_at_step == Some(self.steps) {
            return Err(HookError::model(format!(
                "synthetic failure at step {}",
                self.steps
            )));
        }
        let loss = self.loss;
        self.loss *= self.decay;
        self.steps += 1;
        Ok(loss)
    }

    fn valid_step(&mut self, _batch: &()) -> Result<f32> {
        Ok(self.loss.max(self.valid_floor))
    }

    fn predict_step(&mut self, _batch: &()) -> Result<f32> {
        Ok(self.loss)
    }
}
