//! Checkpoint callback for saving trainer state periodically

use std::fs;
use std::path::{Path, PathBuf};

use super::args::HookArgs;
use super::early_stopping::Monitor;
use super::traits::Callback;
use crate::error::{HookError, Result};
use crate::train::TrainerState;

/// Checkpoint callback to save trainer state snapshots as JSON
///
/// Writes `state_best.json` whenever the monitored loss improves,
/// `state_epoch_<n>.json` every `save_every` epochs, and `state_last.json`
/// when training ends. Write failures abort the run.
#[derive(Clone, Debug)]
pub struct CheckpointCallback {
    /// Directory to save checkpoints
    checkpoint_dir: PathBuf,
    /// Save every N epochs (None = only save best)
    save_every: Option<usize>,
    /// Save on best loss
    save_best: bool,
    monitor: Monitor,
    /// Best loss seen
    best_loss: f32,
    /// Last saved epoch
    pub(crate) last_saved_epoch: Option<usize>,
}

impl CheckpointCallback {
    /// Create checkpoint callback saving to directory
    pub fn new(checkpoint_dir: impl Into<PathBuf>) -> Self {
        Self {
            checkpoint_dir: checkpoint_dir.into(),
            save_every: None,
            save_best: true,
            monitor: Monitor::default(),
            best_loss: f32::INFINITY,
            last_saved_epoch: None,
        }
    }

    /// Configure to save every N epochs
    pub fn save_every(mut self, epochs: usize) -> Self {
        self.save_every = Some(epochs.max(1));
        self
    }

    /// Configure to save on best loss
    pub fn save_best(mut self, save: bool) -> Self {
        self.save_best = save;
        self
    }

    /// Choose which loss decides "best"
    pub fn monitor(mut self, monitor: Monitor) -> Self {
        self.monitor = monitor;
        self
    }

    pub fn checkpoint_dir(&self) -> &Path {
        &self.checkpoint_dir
    }

    /// Get checkpoint path for epoch
    pub fn checkpoint_path(&self, epoch: usize) -> PathBuf {
        self.checkpoint_dir.join(format!("state_epoch_{epoch}.json"))
    }

    /// Get best checkpoint path
    pub fn best_checkpoint_path(&self) -> PathBuf {
        self.checkpoint_dir.join("state_best.json")
    }

    /// Get final checkpoint path
    pub fn last_checkpoint_path(&self) -> PathBuf {
        self.checkpoint_dir.join("state_last.json")
    }

    fn write_state(&self, path: &Path, state: &TrainerState) -> Result<()> {
        fs::create_dir_all(&self.checkpoint_dir).map_err(|e| {
            HookError::io(
                format!(
                    "creating checkpoint directory {}",
                    self.checkpoint_dir.display()
                ),
                e,
            )
        })?;
        let json = serde_json::to_string_pretty(state)?;
        fs::write(path, json)
            .map_err(|e| HookError::io(format!("writing checkpoint {}", path.display()), e))?;
        log::debug!("saved checkpoint {}", path.display());
        Ok(())
    }
}

impl Callback<TrainerState> for CheckpointCallback {
    fn on_train_start(&mut self, _state: &mut TrainerState, _args: &HookArgs) -> Result<()> {
        self.best_loss = f32::INFINITY;
        self.last_saved_epoch = None;
        Ok(())
    }

    fn on_epoch_end(&mut self, state: &mut TrainerState, _args: &HookArgs) -> Result<()> {
        if let Some(interval) = self.save_every {
            if (state.epoch + 1).is_multiple_of(interval) {
                self.write_state(&self.checkpoint_path(state.epoch), state)?;
                self.last_saved_epoch = Some(state.epoch);
            }
        }

        if self.save_best {
            if let Some(loss) = self.monitor.read(state) {
                if loss < self.best_loss {
                    self.best_loss = loss;
                    self.write_state(&self.best_checkpoint_path(), state)?;
                    self.last_saved_epoch = Some(state.epoch);
                }
            }
        }
        Ok(())
    }

    fn on_train_end(&mut self, state: &mut TrainerState, _args: &HookArgs) -> Result<()> {
        self.write_state(&self.last_checkpoint_path(), state)
    }

    fn name(&self) -> &'static str {
        "CheckpointCallback"
    }
}
