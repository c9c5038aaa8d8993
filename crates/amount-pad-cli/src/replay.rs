//! The `replay` command

use std::io::{self, Write};

use amount_pad::prelude::*;
use tracing::{debug, info};

use crate::commands::{ReplayArgs, ReplayFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{render_json, render_text, ReplayReport};

/// Replays `tokens` against a pad mounted with `amount`
///
/// Tokens may hold several whitespace-separated keys each, so both
/// `replay 1 + 2 =` and `replay "1 + 2 ="` work.
pub fn replay(amount: Option<&str>, tokens: &[String]) -> CliResult<ReplayReport> {
    let keys = parse_script(&tokens.join(" "))?;
    if keys.is_empty() {
        return Err(CliError::invalid_argument("no keys to replay"));
    }

    let initial = amount.unwrap_or(DEFAULT_AMOUNT);
    let mut pad = NumericEntryPad::new(Some(initial), RecordingHost::new());
    for key in &keys {
        let effect = pad.press(*key);
        debug!(%key, ?effect, display = %pad.display(), "replayed key");
    }

    let report = ReplayReport::from_pad(initial, &keys, &pad);
    info!(
        keys = keys.len(),
        events = report.events.len(),
        committed = %report.committed,
        "replay finished"
    );
    Ok(report)
}

/// Runs the `replay` command, writing the report to stdout
pub fn run_replay(config: &CliConfig, args: &ReplayArgs) -> CliResult<()> {
    let report = replay(args.amount.as_deref(), &args.keys)?;
    let rendered = match args.format {
        ReplayFormat::Text => render_text(
            &report,
            config.color.should_color(),
            config.verbosity.is_quiet(),
        ),
        ReplayFormat::Json => render_json(&report)?,
    };
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_replay_arithmetic() {
        let report = replay(Some("10"), &tokens(&["-", "4", ".", "5", "="])).unwrap();
        assert_eq!(report.committed, "5.5");
        assert_eq!(report.events, [PadEvent::Change("5.5".into())]);
    }

    #[test]
    fn test_replay_accepts_quoted_script() {
        let report = replay(Some("12"), &tokens(&["+ 3 =", "7"])).unwrap();
        assert_eq!(report.committed, "7");
        assert_eq!(report.state.current, "7");
    }

    #[test]
    fn test_replay_default_amount() {
        let report = replay(None, &tokens(&["4", "2"])).unwrap();
        assert_eq!(report.initial, "-0");
        assert_eq!(report.committed, "-42");
    }

    #[test]
    fn test_replay_unknown_key() {
        let err = replay(None, &tokens(&["1", "/", "2"])).unwrap_err();
        assert!(err.to_string().contains("unknown key '/'"));
    }

    #[test]
    fn test_replay_blank_script() {
        let err = replay(None, &tokens(&["  "])).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }

    #[test]
    fn test_replay_close_and_done() {
        let report = replay(Some("8"), &tokens(&["close", "done"])).unwrap();
        assert_eq!(report.committed, "8");
        assert_eq!(report.events, [PadEvent::Close, PadEvent::Done]);
    }
}
