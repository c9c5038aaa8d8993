//! Entry state machine for the amount keypad
//!
//! Everything here is pure: [`press`] takes a state and a [`Key`](crate::keys::Key) and returns
//! the next state together with the [`Effect`] a host should replay. No
//! rendering, no callbacks, no I/O.

pub mod amount;
mod machine;

pub use machine::{apply_external_amount, display_string, initialize, press};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amount shown by a freshly mounted pad (an empty expense entry)
pub const DEFAULT_AMOUNT: &str = "-0";

/// Arithmetic operator available on the pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 3] = [Self::Add, Self::Subtract, Self::Multiply];

    /// Returns the operator symbol used in the display string
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Left operand and operator held while the second operand is typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// Value of the buffer when the operator was pressed
    pub previous_operand: Decimal,
    /// Operator to apply on `Equals`
    pub operator: Operator,
}

/// Authoritative state of one pad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryState {
    /// Text of the number currently being typed
    pub current: String,
    /// Operation awaiting its second operand
    pub pending: Option<PendingOperation>,
    /// Set by `Equals`; the next digit replaces `current` instead of appending
    pub just_computed: bool,
}

impl Default for EntryState {
    fn default() -> Self {
        initialize(None)
    }
}

impl EntryState {
    /// Returns true while an operator waits for its second operand
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the string to render (see [`display_string`])
    #[must_use]
    pub fn display(&self) -> String {
        display_string(self)
    }
}

/// What a host should do after a key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Nothing changed
    None,
    /// The committed value changed; report it through `on_change`
    Notify(String),
    /// Only the in-progress display changed (an operation is pending)
    Redraw,
    /// Forward to the host's close handler
    Close,
    /// Forward to the host's done handler
    Done,
}

/// Result of feeding one key through [`press`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the key press
    pub state: EntryState,
    /// Side effect for the host to replay
    pub effect: Effect,
}

impl Transition {
    /// A transition that leaves `state` untouched
    #[must_use]
    pub fn unchanged(state: &EntryState) -> Self {
        Self {
            state: state.clone(),
            effect: Effect::None,
        }
    }

    /// Returns true if the display needs refreshing
    #[must_use]
    pub const fn notifies_display(&self) -> bool {
        matches!(self.effect, Effect::Notify(_) | Effect::Redraw)
    }
}
