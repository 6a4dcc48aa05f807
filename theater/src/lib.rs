//! Single-screen theater: daily schedule, discount pricing and seat reservations.
//!
//! Built on the Showtime reducer architecture. The booking workflow is an
//! ordinary method on [`Theater`](aggregates::Theater) and is also available as
//! a [`Reducer`](showtime_core::reducer::Reducer) whose reference date comes from
//! an injected clock.
//!
//! # Architecture
//!
//! ```text
//!   Movie (catalog, shared via Arc)
//!     │
//!     ▼
//!   Showing ── best-of-four discount, frozen at construction
//!     │        seats_left: AtomicU32 (CAS, never oversold)
//!     ▼
//!   Theater ── date -> ordered lineup ── reserve(customer, date, seq, n, today)
//!     │                                        │
//!     ▼                                        ▼
//!   projections (text / JSON)               Reservation (total = round(fee × n))
//! ```
//!
//! # Pricing
//!
//! Every showing evaluates four rules and applies only the largest:
//!
//! | Rule | Discount |
//! |---|---|
//! | Special movie (code 1) | 20% of the base price |
//! | 1st / 2nd showing of the day | $3 / $2 |
//! | Starts between 11:00 and 16:59 | 25% of the base price |
//! | Shown on the 7th | $1 |
//!
//! Amounts are exact decimals, rounded half-even to cents. The fee never goes
//! below zero.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use theater::aggregates::Theater;
//! use theater::lineup::{daily_lineup, default_catalog};
//! use theater::types::{Customer, Money};
//!
//! # fn main() -> theater::error::Result<()> {
//! let today = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap_or_default();
//! let mut theater = Theater::new();
//! theater.insert_lineup(today, daily_lineup(&default_catalog()?, today)?);
//!
//! let reservation = theater.reserve(Customer::new("John", "2")?, today, 1, 2, today)?;
//! assert_eq!(reservation.total_fee()?, Money::from_dollars(16));
//! # Ok(())
//! # }
//! ```

pub mod aggregates;
pub mod calendar;
pub mod config;
pub mod error;
pub mod lineup;
pub mod projections;
pub mod rounding;
pub mod types;

pub use aggregates::{
    Movie, Reservation, Showing, Theater, TheaterAction, TheaterEnvironment, TheaterReducer,
    TheaterState,
};
pub use config::Config;
pub use error::{Result, TheaterError};
pub use types::{Capacity, Customer, Money, Runtime, SEATING_CAPACITY};
