//! Booking reducer.
//!
//! Runs the `reserve` workflow as a command and records its outcome as an
//! event. The reference date comes from the environment clock.

use crate::aggregates::reservation::Reservation;
use crate::aggregates::theater::Theater;
use crate::error::TheaterError;
use crate::types::Customer;
use chrono::NaiveDate;
use showtime_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer};
use std::sync::Arc;

// ============================================================================
// Actions (Commands + Events)
// ============================================================================

/// Actions for the booking reducer
#[derive(Clone, Debug)]
pub enum TheaterAction {
    // Commands
    /// Book seats for a showing
    Reserve {
        /// Who is booking
        customer: Customer,
        /// Date of the show
        show_date: NaiveDate,
        /// 1-based sequence within the day's lineup
        sequence: u32,
        /// Number of tickets
        audience_count: u32,
    },

    // Events
    /// Seats were taken and a reservation created
    SeatsReserved {
        /// The new reservation
        reservation: Reservation,
    },

    /// The booking was refused; no seats changed
    ReservationRejected {
        /// Why
        error: TheaterError,
    },
}

// ============================================================================
// State
// ============================================================================

/// State for the booking reducer
#[derive(Clone, Debug, Default)]
pub struct TheaterState {
    /// Schedule and seat inventory
    pub theater: Theater,
    /// Reservations made so far, oldest first
    pub reservations: Vec<Reservation>,
    /// Error from the last rejected command, cleared on success
    pub last_error: Option<TheaterError>,
}

impl TheaterState {
    /// Creates a state around a theater with no reservations yet.
    #[must_use]
    pub const fn new(theater: Theater) -> Self {
        Self {
            theater,
            reservations: Vec::new(),
            last_error: None,
        }
    }

    /// Most recent reservation, if any.
    #[must_use]
    pub fn last_reservation(&self) -> Option<&Reservation> {
        self.reservations.last()
    }
}

// ============================================================================
// Environment
// ============================================================================

/// Environment dependencies for the booking reducer
#[derive(Clone)]
pub struct TheaterEnvironment {
    /// Clock providing the reference date
    pub clock: Arc<dyn Clock>,
}

impl TheaterEnvironment {
    /// Creates a new `TheaterEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Reducer for seat reservations
#[derive(Clone, Debug)]
pub struct TheaterReducer;

impl TheaterReducer {
    /// Creates a new `TheaterReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an event to state
    fn apply_event(state: &mut TheaterState, action: &TheaterAction) {
        match action {
            TheaterAction::SeatsReserved { reservation } => {
                state.reservations.push(reservation.clone());
                state.last_error = None;
            }
            TheaterAction::ReservationRejected { error } => {
                state.last_error = Some(error.clone());
            }
            // Commands are not applied to state
            TheaterAction::Reserve { .. } => {}
        }
    }
}

impl Default for TheaterReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TheaterReducer {
    type State = TheaterState;
    type Action = TheaterAction;
    type Environment = TheaterEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            TheaterAction::Reserve {
                customer,
                show_date,
                sequence,
                audience_count,
            } => {
                let today = env.clock.today();
                let event = match state.theater.reserve(
                    customer,
                    show_date,
                    sequence,
                    audience_count,
                    today,
                ) {
                    Ok(reservation) => TheaterAction::SeatsReserved { reservation },
                    Err(error) => {
                        tracing::warn!(%show_date, sequence, audience_count, %error, "Reservation rejected");
                        TheaterAction::ReservationRejected { error }
                    }
                };

                Self::apply_event(state, &event);

                SmallVec::new()
            }

            // ========== Events ==========
            TheaterAction::SeatsReserved { .. } | TheaterAction::ReservationRejected { .. } => {
                Self::apply_event(state, &action);
                SmallVec::new()
            }
        }
    }
}
