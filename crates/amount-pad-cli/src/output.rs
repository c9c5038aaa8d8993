//! Output formatting for replay reports

use amount_pad::prelude::*;
use console::style;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Outcome of replaying a key script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Amount the pad was mounted with
    pub initial: String,
    /// Keys that were pressed, as script tokens
    pub keys: Vec<String>,
    /// Last amount reported to the host, or the initial amount if none was
    pub committed: String,
    /// What the pad shows
    pub display: String,
    /// Final state
    pub state: EntryState,
    /// Host events in order
    pub events: Vec<PadEvent>,
}

impl ReplayReport {
    /// Builds a report from a finished pad
    #[must_use]
    pub fn from_pad(initial: &str, keys: &[Key], pad: &NumericEntryPad<RecordingHost>) -> Self {
        let committed = pad
            .host()
            .last_change()
            .map_or_else(|| initial.to_string(), ToString::to_string);
        Self {
            initial: initial.to_string(),
            keys: keys.iter().map(ToString::to_string).collect(),
            committed,
            display: pad.display(),
            state: pad.state().clone(),
            events: pad.host().events().to_vec(),
        }
    }
}

fn event_line(event: &PadEvent) -> String {
    match event {
        PadEvent::Change(value) => format!("change {value}"),
        PadEvent::Close => "close".to_string(),
        PadEvent::Done => "done".to_string(),
    }
}

/// Renders a report as text
///
/// Quiet output is the committed amount alone.
#[must_use]
pub fn render_text(report: &ReplayReport, use_color: bool, quiet: bool) -> String {
    if quiet {
        return format!("{}\n", report.committed);
    }

    let label = |text: &str| style(format!("{text:<10}")).bold().force_styling(use_color);
    let mut out = String::new();
    out.push_str(&format!(
        "{}{}\n",
        label("committed"),
        style(&report.committed).green().force_styling(use_color)
    ));
    out.push_str(&format!("{}{}\n", label("display"), report.display));
    if let Some(pending) = report.state.pending {
        out.push_str(&format!(
            "{}{} {}\n",
            label("pending"),
            pending.previous_operand,
            pending.operator
        ));
    }
    out.push_str(&format!("{}\n", label("events")));
    if report.events.is_empty() {
        out.push_str(&format!("  {}\n", style("(none)").dim().force_styling(use_color)));
    }
    for event in &report.events {
        out.push_str(&format!("  {}\n", event_line(event)));
    }
    out
}

/// Renders a report as pretty JSON
pub fn render_json(report: &ReplayReport) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(report)? + "\n")
}

/// Renders the keypad with each button's element id when verbose
#[must_use]
pub fn render_layout(keypad: &Keypad, verbose: bool) -> String {
    let mut out = keypad.render_text();
    out.push('\n');
    if verbose {
        out.push('\n');
        for button in keypad.buttons() {
            out.push_str(&format!(
                "{:<12} {:<6} row {} col {}\n",
                button.id,
                button.key.to_string(),
                button.row,
                button.col
            ));
        }
    }
    out
}
