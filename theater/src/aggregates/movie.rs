//! Movie catalog entry.

use crate::error::{Result, TheaterError};
use crate::types::{Money, Runtime, SEATING_CAPACITY};
use serde::Serialize;

/// Special code that marks a movie for the special-movie discount.
pub const SPECIAL_CODE: u32 = 1;

/// An immutable catalog entry.
///
/// Equality is by value over all four fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    title: String,
    #[serde(rename = "runningTime")]
    runtime: Runtime,
    ticket_price: Money,
    special_code: u32,
}

impl Movie {
    /// Creates a movie with no special code.
    ///
    /// # Errors
    ///
    /// Returns [`TheaterError::Validation`] if the title is blank, the price
    /// is negative, or a full house at that price cannot be totalled.
    pub fn new(title: impl Into<String>, runtime: Runtime, ticket_price: Money) -> Result<Self> {
        Self::with_special_code(title, runtime, ticket_price, 0)
    }

    /// Creates a movie carrying a special code.
    ///
    /// # Errors
    ///
    /// Returns [`TheaterError::Validation`] if the title is blank, the price
    /// is negative, or a full house at that price cannot be totalled.
    pub fn with_special_code(
        title: impl Into<String>,
        runtime: Runtime,
        ticket_price: Money,
        special_code: u32,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TheaterError::validation("Movie", "title is blank"));
        }
        // Free screenings are allowed, refunds are not.
        if ticket_price.is_negative() {
            return Err(TheaterError::validation(
                "Movie",
                format!("ticket price {ticket_price} is negative"),
            ));
        }
        if ticket_price.checked_times(SEATING_CAPACITY.value()).is_none() {
            return Err(TheaterError::validation(
                "Movie",
                format!("ticket price {ticket_price} is too large"),
            ));
        }
        Ok(Self {
            title,
            runtime,
            ticket_price,
            special_code,
        })
    }

    /// Movie title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Running time
    #[must_use]
    pub const fn runtime(&self) -> Runtime {
        self.runtime
    }

    /// Base ticket price
    #[must_use]
    pub const fn ticket_price(&self) -> Money {
        self.ticket_price
    }

    /// Special code, 0 when none was given
    #[must_use]
    pub const fn special_code(&self) -> u32 {
        self.special_code
    }

    /// Returns `true` if the movie qualifies for the special-movie discount.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        self.special_code == SPECIAL_CODE
    }
}
