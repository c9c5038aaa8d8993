//! Logical keys of the amount pad
//!
//! Pointer taps, browser key events, terminal key events and replay scripts
//! all resolve to a [`Key`] before reaching the state machine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Operator;

/// A single logical key press
///
/// `Digit` holds 0-9. Deserialization rejects anything larger and
/// [`press`](crate::core::press) ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "KeyRepr")]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Sign toggle (+/-)
    ToggleSign,
    /// Backspace
    Delete,
    /// Arithmetic operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Dismiss the pad
    Close,
    /// Confirm the entry
    Done,
}

/// Error returned when a key token cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// Token is not a known key
    #[error("unknown key '{0}'")]
    Unknown(String),
    /// Token was empty
    #[error("empty key")]
    Empty,
    /// Digit key outside 0-9
    #[error("digit {0} is out of range 0-9")]
    DigitOutOfRange(u8),
}

/// Unchecked wire form of [`Key`]
#[derive(Debug, Deserialize)]
enum KeyRepr {
    Digit(u8),
    Decimal,
    ToggleSign,
    Delete,
    Operator(Operator),
    Equals,
    Close,
    Done,
}

impl TryFrom<KeyRepr> for Key {
    type Error = KeyParseError;

    fn try_from(repr: KeyRepr) -> Result<Self, Self::Error> {
        Ok(match repr {
            KeyRepr::Digit(d) => Self::digit(d).ok_or(KeyParseError::DigitOutOfRange(d))?,
            KeyRepr::Decimal => Self::Decimal,
            KeyRepr::ToggleSign => Self::ToggleSign,
            KeyRepr::Delete => Self::Delete,
            KeyRepr::Operator(op) => Self::Operator(op),
            KeyRepr::Equals => Self::Equals,
            KeyRepr::Close => Self::Close,
            KeyRepr::Done => Self::Done,
        })
    }
}

impl Key {
    /// Addition key
    pub const ADD: Self = Self::Operator(Operator::Add);
    /// Subtraction key
    pub const SUBTRACT: Self = Self::Operator(Operator::Subtract);
    /// Multiplication key
    pub const MULTIPLY: Self = Self::Operator(Operator::Multiply);

    /// Creates a digit key, or `None` if `d > 9`
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Creates a digit key from an ASCII digit character
    #[must_use]
    pub fn from_digit_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self::Digit(d as u8))
    }

    /// Returns the label printed on the keypad button
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Delete => "⌫".to_string(),
            Self::Operator(Operator::Add) => "+".to_string(),
            Self::Operator(Operator::Subtract) => "−".to_string(),
            Self::Operator(Operator::Multiply) => "×".to_string(),
            Self::Equals => "=".to_string(),
            Self::Close => "✕".to_string(),
            Self::Done => "✓".to_string(),
        }
    }

    /// Returns the stable element id used for the keypad button
    #[must_use]
    pub fn element_id(self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::ToggleSign => "btn-sign".to_string(),
            Self::Delete => "btn-delete".to_string(),
            Self::Operator(Operator::Add) => "btn-plus".to_string(),
            Self::Operator(Operator::Subtract) => "btn-minus".to_string(),
            Self::Operator(Operator::Multiply) => "btn-times".to_string(),
            Self::Equals => "btn-equals".to_string(),
            Self::Close => "btn-close".to_string(),
            Self::Done => "btn-done".to_string(),
        }
    }

    /// Returns true for keys that edit the number being typed
    #[must_use]
    pub const fn is_edit(self) -> bool {
        matches!(
            self,
            Self::Digit(_) | Self::Decimal | Self::ToggleSign | Self::Delete
        )
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::ToggleSign => f.write_str("+/-"),
            Self::Delete => f.write_str("del"),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Equals => f.write_str("="),
            Self::Close => f.write_str("close"),
            Self::Done => f.write_str("done"),
        }
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(KeyParseError::Empty);
        }
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(key) = Self::from_digit_char(c) {
                return Ok(key);
            }
        }
        match token.to_ascii_lowercase().as_str() {
            "." => Ok(Self::Decimal),
            "+/-" | "sign" | "neg" => Ok(Self::ToggleSign),
            "del" | "delete" | "backspace" => Ok(Self::Delete),
            "+" | "add" | "plus" => Ok(Self::ADD),
            "-" | "sub" | "subtract" | "minus" => Ok(Self::SUBTRACT),
            "*" | "x" | "mul" | "multiply" | "times" => Ok(Self::MULTIPLY),
            "=" | "equals" | "enter" => Ok(Self::Equals),
            "close" | "esc" => Ok(Self::Close),
            "done" | "ok" => Ok(Self::Done),
            _ => Err(KeyParseError::Unknown(token.to_string())),
        }
    }
}

/// Parses a whitespace separated key script such as `"1 2 + 3 ="`.
pub fn parse_script(script: &str) -> Result<Vec<Key>, KeyParseError> {
    script.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Key::digit(0), Some(Key::Digit(0)));
        assert_eq!(Key::digit(9), Some(Key::Digit(9)));
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn test_from_digit_char() {
        assert_eq!(Key::from_digit_char('7'), Some(Key::Digit(7)));
        assert_eq!(Key::from_digit_char('a'), None);
    }

    #[test]
    fn test_display_parses_back() {
        let keys = [
            Key::Digit(4),
            Key::Decimal,
            Key::ToggleSign,
            Key::Delete,
            Key::ADD,
            Key::SUBTRACT,
            Key::MULTIPLY,
            Key::Equals,
            Key::Close,
            Key::Done,
        ];
        for key in keys {
            assert_eq!(key.to_string().parse::<Key>(), Ok(key), "{key:?}");
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Backspace".parse::<Key>(), Ok(Key::Delete));
        assert_eq!("times".parse::<Key>(), Ok(Key::MULTIPLY));
        assert_eq!(" enter ".parse::<Key>(), Ok(Key::Equals));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Key>(), Err(KeyParseError::Empty));
        assert_eq!(
            "/".parse::<Key>(),
            Err(KeyParseError::Unknown("/".to_string()))
        );
        assert_eq!(
            KeyParseError::Unknown("12".into()).to_string(),
            "unknown key '12'"
        );
    }

    #[test]
    fn test_parse_script() {
        let keys = parse_script("1 2 + 3 =").unwrap();
        assert_eq!(
            keys,
            vec![Key::Digit(1), Key::Digit(2), Key::ADD, Key::Digit(3), Key::Equals]
        );
        assert!(parse_script("1 % 2").is_err());
        assert!(parse_script("   ").unwrap().is_empty());
    }

    #[test]
    fn test_element_ids_are_unique() {
        let mut ids = std::collections::HashSet::new();
        for d in 0..=9 {
            assert!(ids.insert(Key::Digit(d).element_id()));
        }
        for key in [
            Key::Decimal,
            Key::ToggleSign,
            Key::Delete,
            Key::ADD,
            Key::SUBTRACT,
            Key::MULTIPLY,
            Key::Equals,
            Key::Close,
            Key::Done,
        ] {
            assert!(ids.insert(key.element_id()), "duplicate id for {key:?}");
        }
    }

    #[test]
    fn test_serde_round_trip() {
        for key in [Key::Digit(7), Key::MULTIPLY, Key::ToggleSign, Key::Done] {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(serde_json::from_str::<Key>(&json).unwrap(), key);
        }
        assert_eq!(serde_json::to_string(&Key::Digit(3)).unwrap(), r#"{"Digit":3}"#);
    }

    #[test]
    fn test_deserialize_rejects_wide_digit() {
        let err = serde_json::from_str::<Key>(r#"{"Digit":12}"#).unwrap_err();
        assert!(err.to_string().contains("digit 12 is out of range"));
        assert!(serde_json::from_str::<Key>(r#"{"Digit":9}"#).is_ok());
    }

    #[test]
    fn test_is_edit() {
        assert!(Key::Digit(1).is_edit());
        assert!(Key::Delete.is_edit());
        assert!(!Key::ADD.is_edit());
        assert!(!Key::Done.is_edit());
    }
}
