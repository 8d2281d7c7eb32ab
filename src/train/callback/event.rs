//! Lifecycle events fired by a training loop
//!
//! The event set is closed: every event maps to exactly one hook method on
//! [`Callback`](super::Callback), named `on_<event>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HookError;

/// A named point in the training lifecycle at which hooks run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingEvent {
    EpochStart,
    EpochEnd,
    TrainEpochStart,
    TrainEpochEnd,
    ValidEpochStart,
    ValidEpochEnd,
    TrainStepStart,
    TrainStepEnd,
    ValidStepStart,
    ValidStepEnd,
    TestStepStart,
    TestStepEnd,
    TrainStart,
    TrainEnd,
}

impl TrainingEvent {
    /// Every lifecycle event, in declaration order
    pub const ALL: [TrainingEvent; 14] = [
        TrainingEvent::EpochStart,
        TrainingEvent::EpochEnd,
        TrainingEvent::TrainEpochStart,
        TrainingEvent::TrainEpochEnd,
        TrainingEvent::ValidEpochStart,
        TrainingEvent::ValidEpochEnd,
        TrainingEvent::TrainStepStart,
        TrainingEvent::TrainStepEnd,
        TrainingEvent::ValidStepStart,
        TrainingEvent::ValidStepEnd,
        TrainingEvent::TestStepStart,
        TrainingEvent::TestStepEnd,
        TrainingEvent::TrainStart,
        TrainingEvent::TrainEnd,
    ];

    /// Snake-case event name, e.g. `train_step_end`
    pub fn as_str(self) -> &'static str {
        match self {
            TrainingEvent::EpochStart => "epoch_start",
            TrainingEvent::EpochEnd => "epoch_end",
            TrainingEvent::TrainEpochStart => "train_epoch_start",
            TrainingEvent::TrainEpochEnd => "train_epoch_end",
            TrainingEvent::ValidEpochStart => "valid_epoch_start",
            TrainingEvent::ValidEpochEnd => "valid_epoch_end",
            TrainingEvent::TrainStepStart => "train_step_start",
            TrainingEvent::TrainStepEnd => "train_step_end",
            TrainingEvent::ValidStepStart => "valid_step_start",
            TrainingEvent::ValidStepEnd => "valid_step_end",
            TrainingEvent::TestStepStart => "test_step_start",
            TrainingEvent::TestStepEnd => "test_step_end",
            TrainingEvent::TrainStart => "train_start",
            TrainingEvent::TrainEnd => "train_end",
        }
    }

    /// Name of the hook method this event invokes, e.g. `on_train_step_end`
    pub fn hook_name(self) -> &'static str {
        match self {
            TrainingEvent::EpochStart => "on_epoch_start",
            TrainingEvent::EpochEnd => "on_epoch_end",
            TrainingEvent::TrainEpochStart => "on_train_epoch_start",
            TrainingEvent::TrainEpochEnd => "on_train_epoch_end",
            TrainingEvent::ValidEpochStart => "on_valid_epoch_start",
            TrainingEvent::ValidEpochEnd => "on_valid_epoch_end",
            TrainingEvent::TrainStepStart => "on_train_step_start",
            TrainingEvent::TrainStepEnd => "on_train_step_end",
            TrainingEvent::ValidStepStart => "on_valid_step_start",
            TrainingEvent::ValidStepEnd => "on_valid_step_end",
            TrainingEvent::TestStepStart => "on_test_step_start",
            TrainingEvent::TestStepEnd => "on_test_step_end",
            TrainingEvent::TrainStart => "on_train_start",
            TrainingEvent::TrainEnd => "on_train_end",
        }
    }

    /// Whether this event fires once per batch
    pub fn is_step_event(self) -> bool {
        matches!(
            self,
            TrainingEvent::TrainStepStart
                | TrainingEvent::TrainStepEnd
                | TrainingEvent::ValidStepStart
                | TrainingEvent::ValidStepEnd
                | TrainingEvent::TestStepStart
                | TrainingEvent::TestStepEnd
        )
    }
}

impl fmt::Display for TrainingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingEvent {
    type Err = HookError;

    /// Accepts either the event name (`epoch_end`) or the hook name (`on_epoch_end`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix("on_").unwrap_or(name);
        TrainingEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == name)
            .ok_or_else(|| HookError::UnknownEvent(s.to_string()))
    }
}
