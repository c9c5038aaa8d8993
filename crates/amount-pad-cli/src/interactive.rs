//! The `interactive` command: a raw-mode terminal session over the pad

use std::io::{self, Write};

use amount_pad::prelude::*;
use console::style;
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    terminal::{self, disable_raw_mode, enable_raw_mode, ClearType},
};
use tracing::{debug, info};

use crate::commands::InteractiveArgs;
use crate::config::CliConfig;
use crate::error::CliResult;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The done key was pressed
    Done,
    /// The close key was pressed
    Closed,
    /// The user quit with Ctrl+C or Ctrl+Q
    Quit,
}

/// What the loop does after one key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep reading; redraw when the pad changed
    Continue {
        /// Whether the display changed
        redraw: bool,
    },
    /// End the session
    Exit(Outcome),
}

/// Applies one terminal action to the pad
pub fn handle_action<H: PadHost>(pad: &mut NumericEntryPad<H>, action: TerminalAction) -> Step {
    match action {
        TerminalAction::Quit => Step::Exit(Outcome::Quit),
        TerminalAction::None => Step::Continue { redraw: false },
        TerminalAction::Press(key) => match pad.press(key) {
            Effect::Close => Step::Exit(Outcome::Closed),
            Effect::Done => Step::Exit(Outcome::Done),
            Effect::Notify(_) | Effect::Redraw => Step::Continue { redraw: true },
            Effect::None => Step::Continue { redraw: false },
        },
    }
}

/// Renders one frame: the display line, a blank line, then the keypad
///
/// Lines end in `\r\n` since raw mode turns off output translation.
#[must_use]
pub fn render_frame<H: PadHost>(pad: &NumericEntryPad<H>, keypad: &Keypad, use_color: bool) -> String {
    let display = style(format!("{:>28}", pad.display()))
        .bold()
        .force_styling(use_color);
    let mut frame = format!("{display}\r\n\r\n");
    for line in keypad.render_text().lines() {
        frame.push_str(line);
        frame.push_str("\r\n");
    }
    frame.push_str("\r\n");
    frame.push_str(
        &style("Tab done  Esc close  _ sign  Ctrl+C quit")
            .dim()
            .force_styling(use_color)
            .to_string(),
    );
    frame
}

fn draw<W: Write, H: PadHost>(
    out: &mut W,
    pad: &NumericEntryPad<H>,
    keypad: &Keypad,
    use_color: bool,
) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
    out.write_all(render_frame(pad, keypad, use_color).as_bytes())?;
    out.flush()
}

fn run_session<W: Write>(
    out: &mut W,
    pad: &mut NumericEntryPad<RecordingHost>,
    use_color: bool,
) -> io::Result<Outcome> {
    let keypad = Keypad::new();
    let handler = InputHandler::new();
    draw(out, pad, &keypad, use_color)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let action = handler.handle_key(key);
        debug!(?action, "terminal key");
        match handle_action(pad, action) {
            Step::Exit(outcome) => return Ok(outcome),
            Step::Continue { redraw: true } => draw(out, pad, &keypad, use_color)?,
            Step::Continue { redraw: false } => {}
        }
    }
}

/// Runs `body` after `setup`, then always runs `restore`, even when either
/// of the first two failed part way. The first error wins.
fn guarded<T>(
    setup: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let result = setup().and_then(|()| body());
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

/// Runs the `interactive` command
///
/// Prints the committed amount on exit.
pub fn run_interactive(config: &CliConfig, args: &InteractiveArgs) -> CliResult<()> {
    let initial = args.amount.as_deref().unwrap_or(DEFAULT_AMOUNT);
    let mut pad = NumericEntryPad::new(Some(initial), RecordingHost::new());
    let use_color = config.color.should_color();

    let outcome = guarded(
        || {
            enable_raw_mode()?;
            let mut out = io::stdout();
            execute!(out, terminal::EnterAlternateScreen, cursor::Hide)
        },
        || run_session(&mut io::stdout(), &mut pad, use_color),
        || {
            let raw = disable_raw_mode();
            let mut out = io::stdout();
            execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
            raw
        },
    )?;
    let committed = pad.host().last_change().unwrap_or(initial);
    info!(?outcome, committed, "session ended");

    if config.verbosity.is_verbose() {
        eprintln!("{outcome:?}");
    }
    println!("{committed}");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn pad(seed: &str) -> NumericEntryPad<RecordingHost> {
        NumericEntryPad::new(Some(seed), RecordingHost::new())
    }

    #[test]
    fn test_quit_and_ignored_actions() {
        let mut pad = pad("5");
        assert_eq!(handle_action(&mut pad, TerminalAction::Quit), Step::Exit(Outcome::Quit));
        assert_eq!(
            handle_action(&mut pad, TerminalAction::None),
            Step::Continue { redraw: false }
        );
        assert!(pad.host().events().is_empty());
    }

    #[test]
    fn test_edits_redraw() {
        let mut pad = pad("5");
        assert_eq!(
            handle_action(&mut pad, TerminalAction::Press(Key::Digit(1))),
            Step::Continue { redraw: true }
        );
        assert_eq!(
            handle_action(&mut pad, TerminalAction::Press(Key::ADD)),
            Step::Continue { redraw: true }
        );
        assert_eq!(pad.display(), "51+0");
    }

    #[test]
    fn test_noop_key_skips_redraw() {
        let mut pad = pad("1.5");
        assert_eq!(
            handle_action(&mut pad, TerminalAction::Press(Key::Decimal)),
            Step::Continue { redraw: false }
        );
    }

    #[test]
    fn test_close_and_done_exit() {
        let mut pad = pad("5");
        assert_eq!(
            handle_action(&mut pad, TerminalAction::Press(Key::Close)),
            Step::Exit(Outcome::Closed)
        );
        assert_eq!(
            handle_action(&mut pad, TerminalAction::Press(Key::Done)),
            Step::Exit(Outcome::Done)
        );
        assert_eq!(pad.host().events(), &[PadEvent::Close, PadEvent::Done]);
    }

    #[test]
    fn test_guarded_restores_after_failed_setup() {
        let mut restored = false;
        let mut ran = false;
        let result: io::Result<()> = guarded(
            || Err(io::Error::new(io::ErrorKind::Other, "no alternate screen")),
            || {
                ran = true;
                Ok(())
            },
            || {
                restored = true;
                Ok(())
            },
        );
        assert_eq!(result.unwrap_err().to_string(), "no alternate screen");
        assert!(!ran);
        assert!(restored);
    }

    #[test]
    fn test_guarded_restores_after_failed_body() {
        let mut restored = false;
        let result: io::Result<u8> = guarded(
            || Ok(()),
            || Err(io::Error::new(io::ErrorKind::Other, "read failed")),
            || {
                restored = true;
                Err(io::Error::new(io::ErrorKind::Other, "restore failed"))
            },
        );
        assert_eq!(result.unwrap_err().to_string(), "read failed");
        assert!(restored);
    }

    #[test]
    fn test_guarded_passes_value_through() {
        let result = guarded(|| Ok(()), || Ok(Outcome::Done), || Ok(()));
        assert_eq!(result.unwrap(), Outcome::Done);
    }

    #[test]
    fn test_render_frame() {
        let mut pad = pad("12");
        pad.press_all([Key::ADD, Key::Digit(3)]);
        let frame = render_frame(&pad, &Keypad::new(), false);
        let first = frame.lines().next().unwrap();
        assert_eq!(first.trim(), "12+3");
        assert!(frame.contains("[ ⌫ ]"));
        assert!(frame.contains("\r\n"));
        assert!(frame.contains("Ctrl+C quit"));
        assert!(!frame.contains('\u{1b}'));
    }
}
