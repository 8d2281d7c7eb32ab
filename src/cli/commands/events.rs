//! Events command implementation

use serde::Serialize;

use crate::cli::args::{EventsArgs, OutputFormat};
use crate::cli::logging::{print, LogLevel};
use crate::error::Result;
use crate::train::TrainingEvent;

#[derive(Serialize)]
struct EventRow {
    event: TrainingEvent,
    hook: &'static str,
    per_step: bool,
}

/// Format the event table as aligned text
pub fn format_events_text() -> String {
    let width = TrainingEvent::ALL
        .iter()
        .map(|e| e.as_str().len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!("{:<width$}  HOOK", "EVENT")];
    for event in TrainingEvent::ALL {
        lines.push(format!("{:<width$}  {}", event.as_str(), event.hook_name()));
    }
    lines.join("\n")
}

/// Format the event table as JSON
pub fn format_events_json() -> Result<String> {
    let rows: Vec<_> = TrainingEvent::ALL
        .into_iter()
        .map(|event| EventRow {
            event,
            hook: event.hook_name(),
            per_step: event.is_step_event(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub fn run_events(args: EventsArgs, level: LogLevel) -> Result<()> {
    let out = match args.format {
        OutputFormat::Text => format_events_text(),
        OutputFormat::Json => format_events_json()?,
    };
    print(level, &out);
    Ok(())
}
