// Loop settings for toggle macros.
//
//   Infinite  --uncheck-->      Bounded(10)
//   Bounded(n) --check-->       Infinite
//   Bounded(n) --edit(m) ok-->  Bounded(m)
//   Bounded(n) --edit bad-->    Bounded(n)
//
// Only the write is computed here; the new state shows up once the store
// has applied it.

use thiserror::Error;

use crate::shared::{DEFAULT_LOOP_COUNT, LOOP_COUNT_MAX, LOOP_COUNT_MIN};

/// How the count edit path treats values above `LOOP_COUNT_MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpperBound {
    /// Reject them like any other bad edit.
    Enforce,
    /// Leave it to the field's own clamping and pass them through.
    WidgetOnly,
}

#[derive(Debug, Error, PartialEq)]
pub enum CountRejected {
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("{0} is not positive")]
    NotPositive(f64),
    #[error("{0} is not a whole number")]
    NotInteger(f64),
    #[error("{0} is above the maximum of 10000")]
    AboveMaximum(f64),
}

// count to write when the infinite box changes; None = clear it
pub fn infinite_toggled(checked: bool) -> Option<u32> {
    if checked {
        None
    } else {
        Some(DEFAULT_LOOP_COUNT)
    }
}

/// Parses a proposed count the way the count field reports it.
pub fn parse_count(text: &str, bound: UpperBound) -> Result<u32, CountRejected> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| CountRejected::NotANumber(text.to_string()))?;
    if !value.is_finite() {
        return Err(CountRejected::NotANumber(text.to_string()));
    }
    if value <= 0.0 {
        return Err(CountRejected::NotPositive(value));
    }
    if value.fract() != 0.0 {
        return Err(CountRejected::NotInteger(value));
    }
    let over_max = value > LOOP_COUNT_MAX as f64;
    if (over_max && bound == UpperBound::Enforce) || value > u32::MAX as f64 {
        return Err(CountRejected::AboveMaximum(value));
    }
    Ok(value as u32)
}

// stepper arrows, never leave the field's range
pub fn step(current: u32, delta: i64) -> u32 {
    (current as i64 + delta).clamp(LOOP_COUNT_MIN as i64, LOOP_COUNT_MAX as i64) as u32
}

// what the field does to its text on blur: numbers above the max snap down to it.
// Some(new text) when it changed anything
pub fn clamp_on_blur(text: &str) -> Option<String> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > LOOP_COUNT_MAX as f64 => Some(LOOP_COUNT_MAX.to_string()),
        _ => None,
    }
}
