//! Input drivers
//!
//! A [`PadDriver`] delivers keys to a pad through one concrete input path.
//! The `verify_*` functions are written once against the trait and run
//! against every driver, which is how the pointer and keyboard paths are
//! shown to end in the same state.

use crate::core::EntryState;
use crate::input::{browser_key_to_key, KeyboardInput};
use crate::keys::Key;
use crate::layout::Keypad;
use crate::pad::{NumericEntryPad, PadEvent, RecordingHost};

/// Abstract input path into a pad
pub trait PadDriver {
    /// Delivers `key`; returns false if this path cannot produce it
    fn send(&mut self, key: Key) -> bool;

    /// Returns the pad state
    fn state(&self) -> &EntryState;

    /// Returns the rendered display string
    fn display(&self) -> String;

    /// Returns the events the host received
    fn events(&self) -> &[PadEvent];

    /// Pushes an external amount into the pad
    fn reseed(&mut self, amount: &str);

    /// Delivers every key in order; returns how many were delivered
    fn send_all(&mut self, keys: &[Key]) -> usize {
        keys.iter().filter(|key| self.send(**key)).count()
    }
}

/// Drives the pad by tapping keypad buttons by element id
#[derive(Debug)]
pub struct PointerDriver {
    keypad: Keypad,
    pad: NumericEntryPad<RecordingHost>,
}

impl PointerDriver {
    /// Creates a driver over a fresh pad
    #[must_use]
    pub fn new(initial_amount: Option<&str>) -> Self {
        Self {
            keypad: Keypad::new(),
            pad: NumericEntryPad::new(initial_amount, RecordingHost::new()),
        }
    }

    /// Taps the button with the given element id; returns false if none exists
    pub fn tap(&mut self, element_id: &str) -> bool {
        match self.keypad.handle_click(element_id) {
            Some(key) => {
                self.pad.press(key);
                true
            }
            None => false,
        }
    }

    /// Returns the underlying pad
    #[must_use]
    pub fn pad(&self) -> &NumericEntryPad<RecordingHost> {
        &self.pad
    }
}

impl PadDriver for PointerDriver {
    fn send(&mut self, key: Key) -> bool {
        let Some(id) = self.keypad.find_button_by_key(key).map(|b| b.id.clone()) else {
            return false;
        };
        self.tap(&id)
    }

    fn state(&self) -> &EntryState {
        self.pad.state()
    }

    fn display(&self) -> String {
        self.pad.display()
    }

    fn events(&self) -> &[PadEvent] {
        self.pad.host().events()
    }

    fn reseed(&mut self, amount: &str) {
        self.pad.set_amount(amount);
    }
}

/// Drives the pad by typing browser key names
#[derive(Debug)]
pub struct KeyboardDriver {
    pad: NumericEntryPad<RecordingHost>,
}

impl KeyboardDriver {
    /// Creates a driver over a fresh pad
    #[must_use]
    pub fn new(initial_amount: Option<&str>) -> Self {
        Self {
            pad: NumericEntryPad::new(initial_amount, RecordingHost::new()),
        }
    }

    /// Dispatches one keyboard event; returns false if the pad ignored it
    pub fn key_down(&mut self, input: &KeyboardInput) -> bool {
        match browser_key_to_key(input) {
            Some(key) => {
                self.pad.press(key);
                true
            }
            None => false,
        }
    }

    /// Types a sequence of `KeyboardEvent.key` names
    pub fn type_keys(&mut self, names: &[&str]) {
        for name in names {
            self.key_down(&KeyboardInput::new(name));
        }
    }

    /// Returns the key name that produces `key`, if any
    #[must_use]
    pub fn key_name(key: Key) -> Option<String> {
        match key {
            Key::Digit(d) => Some(d.to_string()),
            Key::Decimal => Some(".".to_string()),
            Key::ToggleSign => Some("_".to_string()),
            Key::Delete => Some("Backspace".to_string()),
            Key::Operator(op) => Some(op.symbol().to_string()),
            Key::Equals => Some("Enter".to_string()),
            Key::Close | Key::Done => None,
        }
    }

    /// Returns the underlying pad
    #[must_use]
    pub fn pad(&self) -> &NumericEntryPad<RecordingHost> {
        &self.pad
    }
}

impl PadDriver for KeyboardDriver {
    fn send(&mut self, key: Key) -> bool {
        match Self::key_name(key) {
            Some(name) => self.key_down(&KeyboardInput::new(&name)),
            None => false,
        }
    }

    fn state(&self) -> &EntryState {
        self.pad.state()
    }

    fn display(&self) -> String {
        self.pad.display()
    }

    fn events(&self) -> &[PadEvent] {
        self.pad.host().events()
    }

    fn reseed(&mut self, amount: &str) {
        self.pad.set_amount(amount);
    }
}

// ===== Shared checks =====
// Each takes a driver over a pad seeded with the default "-0".

fn keys(script: &str) -> Vec<Key> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter_map(|c| match c {
            '.' => Some(Key::Decimal),
            '+' => Some(Key::ADD),
            '-' => Some(Key::SUBTRACT),
            '*' => Some(Key::MULTIPLY),
            '=' => Some(Key::Equals),
            '<' => Some(Key::Delete),
            other => Key::from_digit_char(other),
        })
        .collect()
}

/// Verifies the three arithmetic operations
pub fn verify_arithmetic<D: PadDriver>(driver: &mut D) {
    driver.reseed("12");
    driver.send_all(&keys("+3="));
    assert_eq!(driver.state().current, "15");

    driver.reseed("10");
    driver.send_all(&keys("-4.5="));
    assert_eq!(driver.state().current, "5.5");

    driver.reseed("3");
    driver.send_all(&keys("*4="));
    assert_eq!(driver.state().current, "12");
}

/// Verifies that a digit after `Equals` starts a fresh number
pub fn verify_overwrite_after_result<D: PadDriver>(driver: &mut D) {
    driver.reseed("12");
    driver.send_all(&keys("+3="));
    assert!(driver.state().just_computed);
    driver.send_all(&keys("7"));
    assert_eq!(driver.state().current, "7");
}

/// Verifies that deleting bottoms out at `"-0"`
pub fn verify_delete_floor<D: PadDriver>(driver: &mut D) {
    driver.reseed("5");
    driver.send_all(&keys("<<<"));
    assert_eq!(driver.state().current, "-0");
}

/// Verifies the in-progress display and that the host is not told about it
pub fn verify_pending_display<D: PadDriver>(driver: &mut D) {
    driver.reseed("12");
    let before = driver.events().len();
    driver.send_all(&keys("+3"));
    assert_eq!(driver.display(), "12+3");
    assert_eq!(driver.events().len(), before);
}

/// Verifies that reseeding discards a pending operation
pub fn verify_reseed_clears_pending<D: PadDriver>(driver: &mut D) {
    driver.reseed("12");
    driver.send_all(&keys("*2"));
    assert!(driver.state().is_pending());
    driver.reseed("42");
    assert_eq!(driver.state().current, "42");
    assert!(!driver.state().is_pending());
    assert!(!driver.state().just_computed);
}

/// Runs every shared check
pub fn verify_all<D: PadDriver>(driver: &mut D) {
    verify_arithmetic(driver);
    verify_overwrite_after_result(driver);
    verify_delete_floor(driver);
    verify_pending_display(driver);
    verify_reseed_clears_pending(driver);
}
