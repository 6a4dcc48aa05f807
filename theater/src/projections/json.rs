//! JSON rendering, one object per showing.

use crate::aggregates::{Discount, Movie, Showing};
use crate::error::{Result, TheaterError};
use crate::types::Money;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Serializable view of a showing.
///
/// ```json
/// {"movie":{"title":"Turning Red","runningTime":"1 hour 25 minutes","ticketPrice":"11.00","specialCode":0},
///  "sequenceOfTheDay":1,"startTime":"2025-03-04T09:00:00","movieFee":"11.00",
///  "discountedMovieFee":"8.00","seatsLeft":100,"discount":{"kind":"earlySequence","amount":"3.00"}}
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowingView<'a> {
    /// The movie
    pub movie: &'a Movie,
    /// 1-based position within the day
    pub sequence_of_the_day: u32,
    /// Start date and time
    pub start_time: NaiveDateTime,
    /// Base fee
    pub movie_fee: Money,
    /// Fee after the winning discount
    pub discounted_movie_fee: Money,
    /// Seats still available
    pub seats_left: u32,
    /// Winning discount
    pub discount: Discount,
}

impl<'a> From<&'a Showing> for ShowingView<'a> {
    fn from(showing: &'a Showing) -> Self {
        Self {
            movie: showing.movie().as_ref(),
            sequence_of_the_day: showing.sequence(),
            start_time: showing.start_time(),
            movie_fee: showing.movie_fee(),
            discounted_movie_fee: showing.discounted_fee(),
            seats_left: showing.seats_left(),
            discount: showing.applied_discount(),
        }
    }
}

/// Serializes one showing to a single-line JSON object.
///
/// # Errors
///
/// Returns [`TheaterError::Render`] if serialization fails.
pub fn showing_line(showing: &Showing) -> Result<String> {
    serde_json::to_string(&ShowingView::from(showing)).map_err(|e| TheaterError::Render(e.to_string()))
}
