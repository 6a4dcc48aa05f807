//! Value objects for the theater: money, runtimes, seat capacity and customers.

use crate::error::{Result, TheaterError};
use crate::rounding::round_money;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Money Value Object (exact decimal, two-place rounding at the edges)
// ============================================================================

/// A non-rounded monetary amount backed by an exact decimal.
///
/// Intermediate results (a 25% share of a price, a fee times an audience) may
/// carry more than two decimals; [`Money::rounded`] applies the money rounding
/// policy once, where a value is stored or returned.
///
/// Serializes as a string with two decimals (`"12.50"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a `Money` value from cents (`1250` is `12.50`).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Creates a `Money` value from whole dollars.
    #[must_use]
    pub fn from_dollars(dollars: u32) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the amount is below zero
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Takes `percent`% of this amount, without rounding.
    #[must_use]
    pub fn percent(self, percent: u32) -> Self {
        Self(self.0 * Decimal::new(i64::from(percent), 2))
    }

    /// Multiplies by a quantity, without rounding. `None` if the product
    /// does not fit in a decimal.
    #[must_use]
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// Subtracts, clamping at zero.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - other.0)
        }
    }

    /// Applies the money rounding policy (two places, half-even).
    ///
    /// # Errors
    ///
    /// Returns [`TheaterError::Rounding`] if the policy cannot be applied.
    pub fn rounded(self) -> Result<Self> {
        Ok(Self(round_money(self.0)?))
    }

    /// Formats the amount with exactly two decimals and no currency sign.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = TheaterError;

    fn from_str(s: &str) -> Result<Self> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|e| TheaterError::validation("Money", format!("'{s}' is not an amount: {e}")))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{:.2}", self.0))
    }
}

// ============================================================================
// Runtime
// ============================================================================

/// Running time of a movie, in whole minutes.
///
/// Displays (and serializes) as `"H hour(s) M minute(s)"`, using the singular
/// only when the value is exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Runtime(u32);

impl Runtime {
    /// Creates a runtime of `minutes` minutes.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Total minutes.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.0
    }

    /// Whole hours.
    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.0 / 60
    }

    /// Minutes left over after the whole hours.
    #[must_use]
    pub const fn remaining_minutes(&self) -> u32 {
        self.0 % 60
    }

    /// Converts to a `chrono::Duration`.
    #[must_use]
    pub fn as_duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.0))
    }
}

impl TryFrom<chrono::Duration> for Runtime {
    type Error = TheaterError;

    fn try_from(duration: chrono::Duration) -> Result<Self> {
        u32::try_from(duration.num_minutes())
            .map(Self)
            .map_err(|_| TheaterError::validation("Runtime", format!("{duration} is out of range")))
    }
}

const fn plural_suffix(value: u32) -> &'static str {
    if value == 1 { "" } else { "s" }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.hours();
        let minutes = self.remaining_minutes();
        write!(
            f,
            "{hours} hour{} {minutes} minute{}",
            plural_suffix(hours),
            plural_suffix(minutes)
        )
    }
}

impl Serialize for Runtime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Capacity
// ============================================================================

/// Represents seat capacity of the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Capacity(pub u32);

impl Capacity {
    /// Creates a new `Capacity`
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the capacity value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seats available for every showing on the single screen.
pub const SEATING_CAPACITY: Capacity = Capacity::new(100);

// ============================================================================
// Customer
// ============================================================================

/// A person making a reservation.
///
/// The id takes part in equality but drives no business rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Customer {
    name: String,
    id: String,
}

impl Customer {
    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`TheaterError::Validation`] if `name` or `id` is blank.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let id = id.into();
        if name.trim().is_empty() {
            return Err(TheaterError::validation("Customer", "name is blank"));
        }
        if id.trim().is_empty() {
            return Err(TheaterError::validation("Customer", "id is blank"));
        }
        Ok(Self { name, id })
    }

    /// Customer name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Customer id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}
