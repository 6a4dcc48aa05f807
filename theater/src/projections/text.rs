//! Plain-text rendering.

use crate::aggregates::{Reservation, Showing};
use crate::error::TheaterError;
use crate::types::Money;
use chrono::NaiveDate;
use std::fmt;

/// Format used for showing start times (`2025-03-04T09:00`).
pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One schedule line:
/// `1: 2025-03-04T09:00 Turning Red (1 hour 25 minutes) Seats left: 100 $11.00 (movieFee) --> $8.00 (discountedMovieFee)`
#[must_use]
pub fn showing_line(showing: &Showing) -> String {
    let movie = showing.movie();
    format!(
        "{}: {} {} ({}) Seats left: {} {} (movieFee) --> {} (discountedMovieFee)",
        showing.sequence(),
        showing.start_time().format(START_TIME_FORMAT),
        movie.title(),
        movie.runtime(),
        showing.seats_left(),
        showing.movie_fee(),
        showing.discounted_fee(),
    )
}

/// Snapshot of a reservation for the confirmation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationSummary {
    /// Customer name
    pub customer: String,
    /// Date of the show
    pub show_date: NaiveDate,
    /// Movie title
    pub title: String,
    /// Number of tickets
    pub tickets: u32,
    /// Total fee
    pub total_fee: Money,
}

impl TryFrom<&Reservation> for ReservationSummary {
    type Error = TheaterError;

    fn try_from(reservation: &Reservation) -> Result<Self, Self::Error> {
        Ok(Self {
            customer: reservation.customer().name().to_string(),
            show_date: reservation.show_date(),
            title: reservation.showing().movie().title().to_string(),
            tickets: reservation.audience_count(),
            total_fee: reservation.total_fee()?,
        })
    }
}

impl fmt::Display for ReservationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer: {} ShowDate: {} Movie: {} NoOfTickets: {} TotalFee: {}",
            self.customer, self.show_date, self.title, self.tickets, self.total_fee
        )
    }
}
