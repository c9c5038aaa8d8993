//! Decimal helpers for the entry buffer
//!
//! The pad keeps operands as text while they are typed. These helpers
//! convert that text to [`Decimal`] for arithmetic and back again for display.

use rust_decimal::{Decimal, RoundingStrategy};

use super::Operator;

/// Number of fractional digits kept in an evaluated result
pub const RESULT_SCALE: u32 = 2;

/// Most digits the keypad lets a typed operand hold; any buffer within it
/// parses exactly
pub const MAX_DIGITS: usize = 28;

/// Counts the digits in a buffer, ignoring sign and decimal point
#[must_use]
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

/// Parses a partially typed amount, treating anything incomplete as zero.
///
/// Accepts `""`, `"-"`, `"-0."` and trailing decimal points. Never fails:
/// a well-formed number too large for [`Decimal`] saturates at its bounds,
/// extra fractional digits are truncated, and garbage is zero.
#[must_use]
pub fn parse(text: &str) -> Decimal {
    let trimmed = text.trim().trim_end_matches('.');
    match trimmed {
        "" | "-" => Decimal::ZERO,
        _ => trimmed
            .parse::<Decimal>()
            .unwrap_or_else(|_| parse_oversized(trimmed)),
    }
}

/// Fallback for text `Decimal::from_str` rejects
fn parse_oversized(text: &str) -> Decimal {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (int, frac) = body.split_once('.').unwrap_or((body, ""));
    let well_formed = !body.is_empty()
        && int.chars().all(|c| c.is_ascii_digit())
        && frac.chars().all(|c| c.is_ascii_digit());
    if !well_formed {
        return Decimal::ZERO;
    }

    let bound = if negative { Decimal::MIN } else { Decimal::MAX };
    let int = int.trim_start_matches('0');
    if int.len() > MAX_DIGITS + 1 {
        return bound;
    }
    let keep = (MAX_DIGITS + 1).saturating_sub(int.len().max(1)).min(frac.len());
    let int = if int.is_empty() { "0" } else { int };
    let sign = if negative { "-" } else { "" };
    format!("{sign}{int}.{}", &frac[..keep])
        .trim_end_matches('.')
        .parse::<Decimal>()
        .unwrap_or(bound)
}

/// Applies `op` to both operands.
///
/// Saturates at the bounds of [`Decimal`] instead of overflowing.
#[must_use]
pub fn evaluate(a: Decimal, op: Operator, b: Decimal) -> Decimal {
    match op {
        Operator::Add => a.saturating_add(b),
        Operator::Subtract => a.saturating_sub(b),
        Operator::Multiply => a.saturating_mul(b),
    }
}

/// Formats an evaluated result for the entry buffer.
///
/// Rounds half away from zero to [`RESULT_SCALE`] places, then drops
/// trailing zeros so integral values have no fractional part.
#[must_use]
pub fn format_result(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(RESULT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format_operand(rounded)
}

/// Formats an operand without trailing zeros (`-0` prints as `0`).
#[must_use]
pub fn format_operand(value: Decimal) -> String {
    value.normalize().to_string()
}
