//! Callback that records every lifecycle event it sees

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use super::args::HookArgs;
use super::event::TrainingEvent;
use super::traits::Callback;
use crate::error::Result;
use crate::train::TrainerState;

/// One recorded event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub event: TrainingEvent,
    pub epoch: usize,
    pub step: usize,
    pub global_step: usize,
    pub args: HookArgs,
}

/// Records the event trace of a run
///
/// Clones share the same log, so keep one handle and register a clone
/// with the trainer.
#[derive(Clone, Debug, Default)]
pub struct HistoryCallback {
    records: Arc<Mutex<Vec<EventRecord>>>,
}

impl HistoryCallback {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<EventRecord>> {
        // A panic while holding the lock leaves the Vec intact
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Snapshot of all records so far
    pub fn records(&self) -> Vec<EventRecord> {
        self.lock().clone()
    }

    /// Events in the order they fired
    pub fn events(&self) -> Vec<TrainingEvent> {
        self.lock().iter().map(|r| r.event).collect()
    }

    /// Number of times `event` fired
    pub fn count(&self, event: TrainingEvent) -> usize {
        self.lock().iter().filter(|r| r.event == event).count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn record(&self, event: TrainingEvent, state: &TrainerState, args: &HookArgs) {
        self.lock().push(EventRecord {
            event,
            epoch: state.epoch,
            step: state.step,
            global_step: state.global_step,
            args: args.clone(),
        });
    }
}

impl Callback<TrainerState> for HistoryCallback {
    fn handle(&mut self, event: TrainingEvent, state: &mut TrainerState, args: &HookArgs) -> Result<()> {
        self.record(event, state, args);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "HistoryCallback"
    }
}
