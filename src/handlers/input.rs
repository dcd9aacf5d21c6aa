//! Presence and sanity checks for request fields.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::utils::error::{AppError, INVALID_INPUT};

/// A numeric field that clients may send either as a JSON number or as a
/// numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Text is parsed as an exact decimal, never through `f64`.
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Numeric::Number(value) => Decimal::try_from(*value).ok(),
            Numeric::Text(text) => Decimal::from_str(text.trim()).ok(),
        }
    }

    /// Plain non-negative integers only; fractions, signs and exponents in
    /// text are rejected.
    fn to_count(&self) -> Option<usize> {
        match self {
            Numeric::Number(value) => (value.is_finite()
                && *value >= 0.0
                && value.fract() == 0.0
                && *value <= usize::MAX as f64)
                .then_some(*value as usize),
            Numeric::Text(text) => usize::from_str(text.trim()).ok(),
        }
    }
}

pub fn require_username(value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(username) if !username.trim().is_empty() => Ok(username),
        _ => Err(AppError::invalid_input()),
    }
}

/// Prices must be present and strictly positive.
pub fn require_price(value: Option<Numeric>) -> Result<Decimal, AppError> {
    value
        .as_ref()
        .and_then(Numeric::to_decimal)
        .filter(|price| *price > Decimal::ZERO)
        .ok_or_else(AppError::invalid_input)
}

/// Whole, non-negative counts up to `max`.
pub fn require_count(value: Option<Numeric>, max: usize) -> Result<usize, AppError> {
    let count = value
        .as_ref()
        .and_then(Numeric::to_count)
        .ok_or_else(AppError::invalid_input)?;

    if count > max {
        return Err(AppError::ValidationError(format!(
            "{INVALID_INPUT} (expected a whole number between 0 and {max})"
        )));
    }

    Ok(count)
}
