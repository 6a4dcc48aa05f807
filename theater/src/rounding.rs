//! Decimal rounding used by every money computation.
//!
//! All arithmetic happens on [`Decimal`], never on binary floating point. When a
//! caller starts from an `f64`, it is first turned into the shortest decimal that
//! round-trips the float (the digits a person would read), and only then scaled.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Decimal places used for money unless stated otherwise.
pub const DEFAULT_DECIMAL_PLACES: i32 = 2;

/// Rounding rule applied to the discarded digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Round to nearest, ties to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero
    HalfUp,
    /// Round to nearest, ties toward zero
    HalfDown,
    /// Always away from zero
    Up,
    /// Always toward zero
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
}

impl RoundingMode {
    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

/// Rounding failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoundingError {
    /// A negative number of decimal places was requested.
    #[error("Invalid decimal points: {0}")]
    NegativeScale(i32),

    /// The float is NaN, infinite, or outside the decimal range.
    #[error("{0} has no exact decimal representation")]
    Unrepresentable(String),
}

/// Rounds `value` to `decimal_places` using `mode`.
///
/// # Errors
///
/// Returns [`RoundingError::NegativeScale`] when `decimal_places < 0`.
pub fn round(
    value: Decimal,
    decimal_places: i32,
    mode: RoundingMode,
) -> Result<Decimal, RoundingError> {
    let Ok(scale) = u32::try_from(decimal_places) else {
        return Err(RoundingError::NegativeScale(decimal_places));
    };
    Ok(value.round_dp_with_strategy(scale, mode.strategy()))
}

/// Rounds a money amount with the default policy: two places, half-even.
///
/// # Errors
///
/// Propagates [`round`] errors; none occur with [`DEFAULT_DECIMAL_PLACES`].
pub fn round_money(value: Decimal) -> Result<Decimal, RoundingError> {
    round(value, DEFAULT_DECIMAL_PLACES, RoundingMode::HalfEven)
}

/// Rounds a binary float after converting it to its exact decimal reading.
///
/// `0.125_f64` becomes `0.125` and rounds half-even to `0.12`.
///
/// # Errors
///
/// Returns [`RoundingError::Unrepresentable`] for NaN, infinities and values the
/// decimal type cannot hold, and [`RoundingError::NegativeScale`] as [`round`].
pub fn round_f64(value: f64, decimal_places: i32, mode: RoundingMode) -> Result<Decimal, RoundingError> {
    round(to_decimal(value)?, decimal_places, mode)
}

/// Converts a float to the shortest decimal that round-trips it.
///
/// # Errors
///
/// Returns [`RoundingError::Unrepresentable`] for NaN, infinities and values the
/// decimal type cannot hold.
pub fn to_decimal(value: f64) -> Result<Decimal, RoundingError> {
    if !value.is_finite() {
        return Err(RoundingError::Unrepresentable(value.to_string()));
    }
    // `Display` for f64 prints the shortest round-tripping digits, never exponents.
    let digits = value.to_string();
    Decimal::from_str(&digits).map_err(|_| RoundingError::Unrepresentable(digits))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_half_even_is_default() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfEven);
        assert_eq!(round_money(dec("0.125")).unwrap(), dec("0.12"));
        assert_eq!(round_money(dec("0.135")).unwrap(), dec("0.14"));
    }

    #[test]
    fn test_money_rounding_goes_through_round() {
        for value in ["3.125", "9.375", "-0.005", "0.015", "970"] {
            assert_eq!(
                round_money(dec(value)),
                round(dec(value), DEFAULT_DECIMAL_PLACES, RoundingMode::HalfEven)
            );
        }
    }

    #[test]
    fn test_half_up_differs_on_ties() {
        assert_eq!(round(dec("0.125"), 2, RoundingMode::HalfUp).unwrap(), dec("0.13"));
        assert_eq!(round(dec("0.125"), 2, RoundingMode::HalfDown).unwrap(), dec("0.12"));
    }

    #[test]
    fn test_directional_modes() {
        assert_eq!(round(dec("1.231"), 2, RoundingMode::Up).unwrap(), dec("1.24"));
        assert_eq!(round(dec("1.239"), 2, RoundingMode::Down).unwrap(), dec("1.23"));
        assert_eq!(round(dec("-1.231"), 2, RoundingMode::Ceiling).unwrap(), dec("-1.23"));
        assert_eq!(round(dec("-1.231"), 2, RoundingMode::Floor).unwrap(), dec("-1.24"));
    }

    #[test]
    fn test_negative_scale_is_rejected() {
        assert_eq!(
            round(dec("1.5"), -1, RoundingMode::HalfEven),
            Err(RoundingError::NegativeScale(-1))
        );
    }

    #[test]
    fn test_float_input_uses_exact_decimal_reading() {
        assert_eq!(round_f64(0.125, 2, RoundingMode::HalfEven).unwrap(), dec("0.12"));
        // 2.675 is stored as 2.67499999... in binary; the decimal reading is 2.675.
        assert_eq!(round_f64(2.675, 2, RoundingMode::HalfUp).unwrap(), dec("2.68"));
        assert_eq!(round_f64(12.5 * 0.2, 2, RoundingMode::HalfEven).unwrap(), dec("2.5"));
    }

    #[test]
    fn test_non_finite_float_is_rejected() {
        assert!(matches!(
            round_f64(f64::NAN, 2, RoundingMode::HalfEven),
            Err(RoundingError::Unrepresentable(_))
        ));
        assert!(matches!(to_decimal(f64::INFINITY), Err(RoundingError::Unrepresentable(_))));
    }
}
