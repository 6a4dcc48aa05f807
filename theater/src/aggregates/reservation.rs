//! Reservation record produced by a successful booking.

use crate::aggregates::showing::Showing;
use crate::error::{Result, TheaterError};
use crate::types::{Customer, Money};
use chrono::NaiveDate;
use std::sync::Arc;

/// An immutable booking.
///
/// Holds the same `Arc<Showing>` as the schedule, so [`Showing::seats_left`]
/// read through a reservation reflects every later booking too.
#[derive(Clone, Debug)]
pub struct Reservation {
    customer: Customer,
    show_date: NaiveDate,
    showing: Arc<Showing>,
    audience_count: u32,
}

impl Reservation {
    /// Creates a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`TheaterError::Validation`] if `audience_count` is 0.
    pub fn new(
        customer: Customer,
        show_date: NaiveDate,
        showing: Arc<Showing>,
        audience_count: u32,
    ) -> Result<Self> {
        if audience_count < 1 {
            return Err(TheaterError::validation(
                "Reservation",
                "audience count must be at least 1",
            ));
        }
        Ok(Self {
            customer,
            show_date,
            showing,
            audience_count,
        })
    }

    /// Who booked
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Date of the show
    #[must_use]
    pub const fn show_date(&self) -> NaiveDate {
        self.show_date
    }

    /// The booked showing
    #[must_use]
    pub const fn showing(&self) -> &Arc<Showing> {
        &self.showing
    }

    /// Number of tickets
    #[must_use]
    pub const fn audience_count(&self) -> u32 {
        self.audience_count
    }

    /// Discounted fee times audience count, rounded. Recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns [`TheaterError::Validation`] if the product overflows.
    pub fn total_fee(&self) -> Result<Money> {
        self.showing
            .discounted_fee()
            .checked_times(self.audience_count)
            .ok_or_else(|| {
                TheaterError::validation(
                    "Reservation",
                    format!("total fee for {} tickets is out of range", self.audience_count),
                )
            })?
            .rounded()
    }
}
