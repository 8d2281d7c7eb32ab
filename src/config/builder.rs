//! Build callbacks from configuration

use super::schema::{CallbackSpec, TrainConfig};
use crate::train::{
    Callback, CheckpointCallback, EarlyStopping, HistoryCallback, ProgressCallback, TrainerState,
};

/// Callbacks built from a configuration
///
/// `histories` holds a handle to every configured history callback, so the
/// recorded trace stays readable once the callbacks are boxed into a runner.
#[derive(Default)]
pub struct BuiltCallbacks {
    pub callbacks: Vec<Box<dyn Callback<TrainerState>>>,
    pub histories: Vec<HistoryCallback>,
}

impl BuiltCallbacks {
    /// First configured history, if any
    pub fn history(&self) -> Option<&HistoryCallback> {
        self.histories.first()
    }
}

impl CallbackSpec {
    /// Instantiate the callback described by this spec and add it to `built`
    ///
    /// `default_log_interval` is used by progress callbacks without their own interval.
    pub fn build_into(&self, default_log_interval: usize, built: &mut BuiltCallbacks) {
        let callback: Box<dyn Callback<TrainerState>> = match self {
            CallbackSpec::Progress { log_interval } => Box::new(ProgressCallback::new(
                log_interval.unwrap_or(default_log_interval),
            )),
            CallbackSpec::EarlyStopping {
                patience,
                min_delta,
                monitor,
            } => Box::new(EarlyStopping::new(*patience, *min_delta).monitor(*monitor)),
            CallbackSpec::Checkpoint {
                dir,
                every,
                save_best,
                monitor,
            } => {
                let mut cb = CheckpointCallback::new(dir)
                    .save_best(*save_best)
                    .monitor(*monitor);
                if let Some(n) = every {
                    cb = cb.save_every(*n);
                }
                Box::new(cb)
            }
            CallbackSpec::History => {
                let history = HistoryCallback::new();
                built.histories.push(history.clone());
                Box::new(history)
            }
        };
        built.callbacks.push(callback);
    }
}

/// Build every configured callback, in config order
pub fn build_callbacks(config: &TrainConfig) -> BuiltCallbacks {
    let mut built = BuiltCallbacks::default();
    for spec in &config.callbacks {
        spec.build_into(config.log_interval, &mut built);
    }
    built
}
