//! Key press reducer

use tracing::{debug, trace};

use super::amount::{digit_count, evaluate, format_operand, format_result, parse, MAX_DIGITS};
use super::{EntryState, Effect, Operator, PendingOperation, Transition, DEFAULT_AMOUNT};
use crate::keys::Key;

/// Creates the state of a freshly mounted pad.
///
/// Without a seed the pad starts at `"-0"`.
#[must_use]
pub fn initialize(seed: Option<&str>) -> EntryState {
    EntryState {
        current: seed.unwrap_or(DEFAULT_AMOUNT).to_string(),
        pending: None,
        just_computed: false,
    }
}

/// Replaces the buffer with an amount pushed by the host.
///
/// Ignored when `new_amount` already equals the buffer, so the pad's own
/// notifications echoed back by the host do not discard a pending operation.
#[must_use]
pub fn apply_external_amount(state: &EntryState, new_amount: &str) -> EntryState {
    if state.current == new_amount {
        return state.clone();
    }
    debug!(from = %state.current, to = new_amount, "external amount applied");
    initialize(Some(new_amount))
}

/// Returns `"{previous}{symbol}{current}"` while an operation is pending,
/// otherwise the buffer itself.
#[must_use]
pub fn display_string(state: &EntryState) -> String {
    match state.pending {
        Some(p) => format!(
            "{}{}{}",
            format_operand(p.previous_operand),
            p.operator.symbol(),
            state.current
        ),
        None => state.current.clone(),
    }
}

/// Feeds one key through the state machine.
#[must_use]
pub fn press(state: &EntryState, key: Key) -> Transition {
    let transition = match key {
        Key::Close => Transition {
            state: state.clone(),
            effect: Effect::Close,
        },
        Key::Done => Transition {
            state: state.clone(),
            effect: Effect::Done,
        },
        Key::Equals => press_equals(state),
        Key::Operator(op) => press_operator(state, op),
        Key::ToggleSign => press_toggle_sign(state),
        Key::Delete => press_delete(state),
        Key::Decimal => press_decimal(state),
        Key::Digit(d) if d <= 9 => press_digit(state, d),
        Key::Digit(_) => Transition::unchanged(state),
    };
    trace!(
        %key,
        before = %state.current,
        after = %transition.state.current,
        pending = transition.state.is_pending(),
        "key pressed"
    );
    transition
}

fn press_equals(state: &EntryState) -> Transition {
    let Some(pending) = state.pending else {
        return Transition::unchanged(state);
    };
    let result = evaluate(pending.previous_operand, pending.operator, parse(&state.current));
    let current = format_result(result);
    debug!(
        previous = %pending.previous_operand,
        operator = %pending.operator,
        operand = %state.current,
        result = %current,
        "operation evaluated"
    );
    Transition {
        state: EntryState {
            current: current.clone(),
            pending: None,
            just_computed: true,
        },
        effect: Effect::Notify(current),
    }
}

fn press_operator(state: &EntryState, operator: Operator) -> Transition {
    Transition {
        state: EntryState {
            current: "0".to_string(),
            pending: Some(PendingOperation {
                previous_operand: parse(&state.current),
                operator,
            }),
            just_computed: false,
        },
        effect: Effect::Redraw,
    }
}

fn press_toggle_sign(state: &EntryState) -> Transition {
    if state.is_pending() {
        return Transition::unchanged(state);
    }
    let current = &state.current;
    let next = if let Some(rest) = current.strip_prefix('-') {
        if rest.is_empty() {
            "0".to_string()
        } else {
            rest.to_string()
        }
    } else if current.is_empty() || current == "0" {
        DEFAULT_AMOUNT.to_string()
    } else {
        format!("-{current}")
    };
    edit(state, next)
}

/// Backspace. A remainder without digits (`""` or a bare `"-"`) falls back to
/// `"-0"`, so repeated deletes settle there.
fn press_delete(state: &EntryState) -> Transition {
    let mut current = state.current.clone();
    current.pop();
    if current.is_empty() || current == "-" {
        current = DEFAULT_AMOUNT.to_string();
    }
    edit(state, current)
}

fn press_decimal(state: &EntryState) -> Transition {
    if state.current.contains('.') {
        return Transition {
            state: EntryState {
                just_computed: false,
                ..state.clone()
            },
            effect: Effect::None,
        };
    }
    let next = match state.current.as_str() {
        "-" | "-0" => "-0.".to_string(),
        other => format!("{other}."),
    };
    edit(state, next)
}

/// Digit entry. Appending stops at [`MAX_DIGITS`], like a second `.`.
fn press_digit(state: &EntryState, d: u8) -> Transition {
    let current = state.current.as_str();
    let next = if state.just_computed || current.is_empty() || current == "0" {
        d.to_string()
    } else if current == "-0" {
        format!("-{d}")
    } else if digit_count(current) >= MAX_DIGITS {
        return Transition::unchanged(state);
    } else {
        format!("{current}{d}")
    };
    edit(state, next)
}

/// Commits an edit of the buffer.
///
/// The host only hears about committed values; while an operation is pending
/// the edit touches the second operand and only the display changes.
fn edit(state: &EntryState, current: String) -> Transition {
    let effect = if state.is_pending() {
        Effect::Redraw
    } else {
        Effect::Notify(current.clone())
    };
    Transition {
        state: EntryState {
            current,
            pending: state.pending,
            just_computed: false,
        },
        effect,
    }
}
