//! Browser `keydown` mapping

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::keys::Key;

/// The parts of a browser `KeyboardEvent` the pad looks at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardInput {
    /// `KeyboardEvent.key`
    pub key: String,
    /// Whether Shift was held
    pub shift: bool,
    /// Whether the event target is a text input or textarea
    pub from_text_field: bool,
}

impl KeyboardInput {
    /// Creates an unmodified key event outside any text field
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            shift: false,
            from_text_field: false,
        }
    }

    /// Marks Shift as held
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Marks the event as coming from a focused text field
    #[must_use]
    pub fn in_text_field(mut self) -> Self {
        self.from_text_field = true;
        self
    }
}

/// Maps a browser key event to a pad key.
///
/// Returns `None` for unmapped keys and for anything typed into a text field,
/// which belongs to that field rather than the pad.
#[must_use]
pub fn browser_key_to_key(input: &KeyboardInput) -> Option<Key> {
    if input.from_text_field {
        trace!(key = %input.key, "ignoring key typed into a text field");
        return None;
    }
    let key = input.key.as_str();
    if input.shift && key == "8" {
        return Some(Key::MULTIPLY);
    }
    match key {
        "." => Some(Key::Decimal),
        "Backspace" => Some(Key::Delete),
        "-" => Some(Key::SUBTRACT),
        "_" => Some(Key::ToggleSign),
        "+" => Some(Key::ADD),
        "*" => Some(Key::MULTIPLY),
        "=" | "Enter" => Some(Key::Equals),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::from_digit_char(c),
                _ => None,
            }
        }
    }
}
