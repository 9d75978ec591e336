//! Output Rendering
//!
//! Prints the menu outcome once the terminal has been handed back, either as
//! plain lines or as a single JSON object.

use std::io::{self, Write};

use serde::Serialize;

use crate::application::MenuOutcome;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One selected name per line
    #[default]
    Text,
    /// One JSON object
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// JSON shape of an outcome
#[derive(Debug, Serialize)]
struct OutcomeEvent<'a> {
    event: &'static str,
    status: &'static str,
    selected: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
}

fn status(outcome: &MenuOutcome) -> &'static str {
    match outcome {
        MenuOutcome::Cancelled => "cancelled",
        MenuOutcome::Executed => "executed",
        MenuOutcome::Selected(_) | MenuOutcome::MultiSelected(_) => "selected",
    }
}

/// Write the outcome and any captured action output.
pub fn write_outcome(
    out: &mut impl Write,
    format: OutputFormat,
    outcome: &MenuOutcome,
    action_output: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for name in outcome.names() {
                writeln!(out, "{name}")?;
            }
            out.write_all(action_output.as_bytes())?;
        }
        OutputFormat::Json => {
            let event = OutcomeEvent {
                event: "menu",
                status: status(outcome),
                selected: outcome.names(),
                output: Some(action_output).filter(|s| !s.is_empty()),
            };
            let line = serde_json::to_string(&event)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()
}
