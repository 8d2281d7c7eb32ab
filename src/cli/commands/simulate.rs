//! Simulate command implementation

use serde::Serialize;

use crate::cli::args::{OutputFormat, SimulateArgs};
use crate::cli::logging::{print, LogLevel};
use crate::config::{load_config, TrainConfig};
use crate::error::Result;
use crate::train::{EventRecord, HistoryCallback, SyntheticModel, TrainResult, Trainer};

/// Loss the synthetic model starts from
const INITIAL_LOSS: f32 = 1.0;
/// Per-step loss multiplier
const DECAY: f32 = 0.8;
/// Validation loss plateau, so early stopping has something to react to
const VALID_FLOOR: f32 = 0.3;

#[derive(Debug, Serialize)]
pub struct Simulation {
    pub result: TrainResult,
    pub trace: Vec<EventRecord>,
}

/// Run the synthetic model through `config` and capture every event
pub fn run_simulation(config: &TrainConfig, train_steps: usize, valid_steps: usize) -> Result<Simulation> {
    let model = SyntheticModel::new(INITIAL_LOSS, DECAY).with_valid_floor(VALID_FLOOR);
    let mut trainer = Trainer::from_config(model, config)?;
    let history = match trainer.history().cloned() {
        Some(history) => history,
        None => {
            let history = HistoryCallback::new();
            trainer.add_callback(history.clone());
            history
        }
    };

    let train = vec![(); train_steps];
    let valid = vec![(); valid_steps];
    let result = trainer.fit(&train, Some(valid.as_slice()))?;

    Ok(Simulation {
        result,
        trace: history.records(),
    })
}

/// Format the event trace, one event per line
pub fn format_trace(trace: &[EventRecord], epochs_only: bool) -> String {
    trace
        .iter()
        .filter(|r| !(epochs_only && r.event.is_step_event()))
        .map(|r| {
            let indent = if r.event.is_step_event() { "    " } else { "" };
            let args = if r.args.is_empty() {
                String::new()
            } else {
                serde_json::to_string(&r.args).unwrap_or_default()
            };
            format!(
                "[epoch {} step {:>3}] {indent}{} {args}",
                r.epoch,
                r.global_step,
                r.event.hook_name()
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the final training result
pub fn format_result(result: &TrainResult) -> String {
    let fmt_loss = |l: Option<f32>| l.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"));
    format!(
        "Epochs run: {}{}\nGlobal steps: {}\nFinal train loss: {}\nFinal valid loss: {}\nBest valid loss: {}",
        result.epochs_run,
        if result.stopped_early { " (stopped early)" } else { "" },
        result.global_steps,
        fmt_loss(result.final_train_loss),
        fmt_loss(result.final_valid_loss),
        fmt_loss(result.best_valid_loss),
    )
}

pub fn run_simulate(args: SimulateArgs, level: LogLevel) -> Result<()> {
    let config = load_config(&args.config)?;
    let sim = run_simulation(&config, args.train_steps, args.valid_steps)?;

    match args.format {
        OutputFormat::Text => {
            print(level, &format_trace(&sim.trace, args.epochs_only));
            print(level, "");
            print(level, &format_result(&sim.result));
        }
        OutputFormat::Json => {
            print(level, &serde_json::to_string_pretty(&sim)?);
        }
    }
    Ok(())
}
