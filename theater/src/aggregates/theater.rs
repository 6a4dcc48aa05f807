//! The schedule store and the `reserve` workflow.

use crate::aggregates::reservation::Reservation;
use crate::aggregates::showing::Showing;
use crate::error::{Result, TheaterError};
use crate::types::Customer;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A single-screen theater: date to ordered lineup of showings.
///
/// Cloning is cheap and clones share the same showings, so seats booked
/// through one clone are gone in all of them.
#[derive(Clone, Debug, Default)]
pub struct Theater {
    schedule: BTreeMap<NaiveDate, Vec<Arc<Showing>>>,
}

impl Theater {
    /// Creates a theater with an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the lineup for `date`, ordered by sequence number.
    ///
    /// Replaces any lineup already registered for that date.
    pub fn insert_lineup(&mut self, date: NaiveDate, showings: impl IntoIterator<Item = Showing>) {
        let mut lineup: Vec<Arc<Showing>> = showings.into_iter().map(Arc::new).collect();
        lineup.sort_by_key(|showing| showing.sequence());
        tracing::debug!(%date, showings = lineup.len(), "Lineup registered");
        self.schedule.insert(date, lineup);
    }

    /// Lineup for `date`, if any.
    #[must_use]
    pub fn schedule_for(&self, date: NaiveDate) -> Option<&[Arc<Showing>]> {
        self.schedule.get(&date).map(Vec::as_slice)
    }

    /// Scheduled dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.schedule.keys().copied()
    }

    /// Looks up the showing at `sequence` (1-based) on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`TheaterError::ScheduleNotFound`] if nothing is scheduled on
    /// `date`, and [`TheaterError::SequenceNotFound`] if the lineup has no
    /// showing at that position.
    pub fn showing(&self, date: NaiveDate, sequence: u32) -> Result<&Arc<Showing>> {
        let lineup = self
            .schedule_for(date)
            .ok_or(TheaterError::ScheduleNotFound { show_date: date })?;
        sequence
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| lineup.get(index))
            .ok_or(TheaterError::SequenceNotFound {
                show_date: date,
                sequence,
            })
    }

    /// Books `audience_count` seats for the showing at `sequence` on `show_date`.
    ///
    /// Checks run in order: past date, schedule, sequence, audience count,
    /// seats. Nothing is decremented unless the reservation is created.
    ///
    /// # Errors
    ///
    /// - [`TheaterError::PastDate`] if `show_date` is before `today`
    /// - [`TheaterError::ScheduleNotFound`] / [`TheaterError::SequenceNotFound`]
    ///   if the showing does not exist
    /// - [`TheaterError::Validation`] if `audience_count` is 0
    /// - [`TheaterError::CapacityExceeded`] if not enough seats are left
    pub fn reserve(
        &self,
        customer: Customer,
        show_date: NaiveDate,
        sequence: u32,
        audience_count: u32,
        today: NaiveDate,
    ) -> Result<Reservation> {
        if show_date < today {
            return Err(TheaterError::PastDate { show_date, today });
        }

        let showing = self.showing(show_date, sequence)?;

        if audience_count < 1 {
            return Err(TheaterError::validation(
                "Reservation",
                "audience count must be at least 1",
            ));
        }

        let seats_left = showing.reduce_seats_left(audience_count)?;

        tracing::info!(
            customer = customer.name(),
            %show_date,
            sequence,
            tickets = audience_count,
            seats_left,
            "Seats reserved"
        );

        Reservation::new(customer, show_date, Arc::clone(showing), audience_count)
    }
}
