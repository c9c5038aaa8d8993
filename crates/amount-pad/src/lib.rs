//! Amount Pad - numeric entry keypad for transaction amounts
//!
//! An on-screen keypad that keeps a signed decimal amount as text, supports
//! one pending `+`, `-` or `*` operation at a time, and reports committed
//! amounts to the form that hosts it.
//!
//! The crate is split in layers:
//!
//! - [`core`]: the pure state machine (`press(state, key) -> Transition`)
//! - [`pad`]: a pad bound to a host, replaying effects as callbacks
//! - [`layout`] and [`input`]: pointer and keyboard adapters producing [`Key`]s
//! - [`driver`]: shared checks run through every input path
//!
//! # Example
//!
//! ```rust
//! use amount_pad::prelude::*;
//!
//! let mut pad = NumericEntryPad::new(Some("12"), RecordingHost::new());
//! pad.press_all([Key::ADD, Key::Digit(3)]);
//! assert_eq!(pad.display(), "12+3");
//!
//! pad.press(Key::Equals);
//! assert_eq!(pad.value(), "15");
//! assert_eq!(pad.host().last_change(), Some("15"));
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod input;
pub mod keys;
pub mod layout;
pub mod pad;

pub use keys::Key;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::amount::{evaluate, format_result, parse};
    pub use crate::core::{
        apply_external_amount, display_string, initialize, press, Effect, EntryState, Operator,
        PendingOperation, Transition, DEFAULT_AMOUNT,
    };
    pub use crate::driver::{KeyboardDriver, PadDriver, PointerDriver};
    pub use crate::input::{browser_key_to_key, KeyboardInput};
    pub use crate::keys::{parse_script, Key, KeyParseError};
    pub use crate::layout::{Keypad, KeypadButton};
    pub use crate::pad::{Callbacks, NoopHost, NumericEntryPad, PadEvent, PadHost, RecordingHost};

    #[cfg(feature = "terminal")]
    pub use crate::input::{InputHandler, TerminalAction};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let state = initialize(None);
        let t = press(&state, Key::Digit(5));
        assert_eq!(t.state.current, "-5");
        assert_eq!(t.effect, Effect::Notify("-5".into()));
    }

    #[test]
    fn test_script_through_pad() {
        let keys = parse_script("1 0 - 4 . 5 =").unwrap();
        let mut pad = NumericEntryPad::new(Some("0"), RecordingHost::new());
        pad.press_all(keys);
        assert_eq!(pad.value(), "5.5");
    }

    #[test]
    fn test_tap_then_type() {
        let keypad = Keypad::new();
        let mut pad = NumericEntryPad::new(None, RecordingHost::new());
        if let Some(key) = keypad.handle_click("btn-9") {
            pad.press(key);
        }
        if let Some(key) = browser_key_to_key(&KeyboardInput::new("Backspace")) {
            pad.press(key);
        }
        assert_eq!(pad.value(), "-0");
        assert_eq!(
            pad.host().events(),
            &[PadEvent::Change("-9".into()), PadEvent::Change("-0".into())]
        );
    }
}
