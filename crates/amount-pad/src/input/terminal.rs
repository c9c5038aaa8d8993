//! Terminal key mapping (crossterm)

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::keys::Key;

/// What a terminal key event asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    /// Feed a key to the pad
    Press(Key),
    /// Leave the terminal session
    Quit,
    /// Ignored input
    None,
}

/// Maps crossterm key events to pad actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    ///
    /// Mirrors the browser mapping and adds the terminal-only bindings:
    /// `_` toggles the sign, `Tab` is done, `Esc` is close.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> TerminalAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return TerminalAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => TerminalAction::Quit,
                _ => TerminalAction::None,
            };
        }

        let key = match code {
            KeyCode::Char('8') if modifiers.contains(KeyModifiers::SHIFT) => Some(Key::MULTIPLY),
            KeyCode::Char(c) if c.is_ascii_digit() => Key::from_digit_char(c),
            KeyCode::Char('.') => Some(Key::Decimal),
            KeyCode::Char('+') => Some(Key::ADD),
            KeyCode::Char('-') => Some(Key::SUBTRACT),
            KeyCode::Char('*') => Some(Key::MULTIPLY),
            KeyCode::Char('=') | KeyCode::Enter => Some(Key::Equals),
            KeyCode::Char('_') => Some(Key::ToggleSign),
            KeyCode::Backspace => Some(Key::Delete),
            KeyCode::Tab => Some(Key::Done),
            KeyCode::Esc => Some(Key::Close),
            _ => None,
        };

        key.map_or(TerminalAction::None, TerminalAction::Press)
    }
}
