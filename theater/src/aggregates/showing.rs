//! Showing aggregate: one screening, its frozen price and its seat inventory.
//!
//! **Pricing**: four discount rules are evaluated up front and only the largest
//! one applies. The resulting fee is computed once, at construction, and never
//! changes afterwards.
//!
//! **Concurrency Strategy**: the seat counter is an `AtomicU32` updated through a
//! compare-and-swap loop, so the capacity check and the decrement happen as one
//! step and a `Showing` can be shared behind an `Arc` without a lock.

use crate::aggregates::movie::Movie;
use crate::calendar::hour_within_range;
use crate::error::{Result, TheaterError};
use crate::types::{Money, SEATING_CAPACITY};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// First hour (inclusive) of the matinee window.
pub const MATINEE_START_HOUR: u32 = 11;
/// Last hour (inclusive) of the matinee window.
pub const MATINEE_END_HOUR: u32 = 16;
/// Day of month that earns the lucky-day discount.
pub const LUCKY_DAY: u32 = 7;

const SPECIAL_MOVIE_PERCENT: u32 = 20;
const MATINEE_PERCENT: u32 = 25;
const FIRST_SHOWING_DISCOUNT: u32 = 3;
const SECOND_SHOWING_DISCOUNT: u32 = 2;
const LUCKY_DAY_DISCOUNT: u32 = 1;

// ============================================================================
// Discounts
// ============================================================================

/// Rule that produced the applied discount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountKind {
    /// No rule applied
    None,
    /// 20% off movies carrying the special code
    SpecialMovie,
    /// Flat amount off the first two showings of the day
    EarlySequence,
    /// 25% off showings starting between 11:00 and 16:59
    Matinee,
    /// Flat amount off showings on the 7th of the month
    LuckyDay,
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "none",
            Self::SpecialMovie => "special movie",
            Self::EarlySequence => "early showing",
            Self::Matinee => "matinee",
            Self::LuckyDay => "lucky day",
        };
        f.write_str(label)
    }
}

/// The single discount applied to a showing, already rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Discount {
    /// Winning rule
    pub kind: DiscountKind,
    /// Rounded amount taken off the base price
    pub amount: Money,
}

impl Discount {
    /// No discount.
    pub const NONE: Self = Self {
        kind: DiscountKind::None,
        amount: Money::ZERO,
    };
}

/// Evaluates all four rules and keeps the largest.
///
/// Ties go to the rule listed first. A zero winner is reported as
/// [`DiscountKind::None`].
fn best_discount(movie: &Movie, sequence: u32, start_time: NaiveDateTime) -> Result<Discount> {
    let price = movie.ticket_price();

    let special = if movie.is_special() {
        price.percent(SPECIAL_MOVIE_PERCENT)
    } else {
        Money::ZERO
    };
    let early = match sequence {
        1 => Money::from_dollars(FIRST_SHOWING_DISCOUNT),
        2 => Money::from_dollars(SECOND_SHOWING_DISCOUNT),
        _ => Money::ZERO,
    };
    let matinee = if hour_within_range(start_time.hour(), MATINEE_START_HOUR, MATINEE_END_HOUR)? {
        price.percent(MATINEE_PERCENT)
    } else {
        Money::ZERO
    };
    let lucky = if start_time.day() == LUCKY_DAY {
        Money::from_dollars(LUCKY_DAY_DISCOUNT)
    } else {
        Money::ZERO
    };

    let candidates = [
        (DiscountKind::SpecialMovie, special),
        (DiscountKind::EarlySequence, early),
        (DiscountKind::Matinee, matinee),
        (DiscountKind::LuckyDay, lucky),
    ];
    let winner = candidates
        .into_iter()
        .fold(Discount::NONE, |best, (kind, amount)| {
            if amount > best.amount {
                Discount { kind, amount }
            } else {
                best
            }
        });

    Ok(Discount {
        amount: winner.amount.rounded()?,
        ..winner
    })
}

// ============================================================================
// Showing
// ============================================================================

/// One scheduled screening of a movie.
#[derive(Debug)]
pub struct Showing {
    movie: Arc<Movie>,
    sequence: u32,
    start_time: NaiveDateTime,
    discount: Discount,
    discounted_fee: Money,
    seats_left: AtomicU32,
}

impl Showing {
    /// Creates a showing with a full house and computes its discounted fee.
    ///
    /// # Errors
    ///
    /// Returns [`TheaterError::Validation`] if `sequence` is 0.
    pub fn new(movie: Arc<Movie>, sequence: u32, start_time: NaiveDateTime) -> Result<Self> {
        if sequence < 1 {
            return Err(TheaterError::validation(
                "Showing",
                "sequence of the day starts at 1",
            ));
        }

        let discount = best_discount(&movie, sequence, start_time)?;
        let discounted_fee = movie.ticket_price().saturating_sub(discount.amount).rounded()?;

        tracing::debug!(
            title = movie.title(),
            sequence,
            %start_time,
            discount = %discount.kind,
            fee = %discounted_fee,
            "Priced showing"
        );

        Ok(Self {
            movie,
            sequence,
            start_time,
            discount,
            discounted_fee,
            seats_left: AtomicU32::new(SEATING_CAPACITY.value()),
        })
    }

    /// Takes `tickets` seats off the showing and returns the seats left.
    ///
    /// The count is left unchanged on failure.
    ///
    /// # Errors
    ///
    /// Returns [`TheaterError::CapacityExceeded`] if fewer than `tickets` seats
    /// remain.
    pub fn reduce_seats_left(&self, tickets: u32) -> Result<u32> {
        let mut current = self.seats_left.load(Ordering::Acquire);
        loop {
            let Some(next) = current.checked_sub(tickets) else {
                tracing::debug!(
                    sequence = self.sequence,
                    requested = tickets,
                    remaining = current,
                    "Not enough seats"
                );
                return Err(TheaterError::CapacityExceeded {
                    requested: tickets,
                    remaining: current,
                });
            };
            match self.seats_left.compare_exchange_weak(
                current,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    tracing::debug!(sequence = self.sequence, tickets, seats_left = next, "Seats reduced");
                    return Ok(next);
                }
                Err(actual) => current = actual,
            }
        }
    }

    /// The movie being shown
    #[must_use]
    pub fn movie(&self) -> &Arc<Movie> {
        &self.movie
    }

    /// Start date and time
    #[must_use]
    pub const fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// 1-based position within the day's lineup
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Base fee, before discounts
    #[must_use]
    pub fn movie_fee(&self) -> Money {
        self.movie.ticket_price()
    }

    /// Per-ticket fee after the winning discount
    #[must_use]
    pub const fn discounted_fee(&self) -> Money {
        self.discounted_fee
    }

    /// The discount that produced [`Showing::discounted_fee`]
    #[must_use]
    pub const fn applied_discount(&self) -> Discount {
        self.discount
    }

    /// Seats still available
    #[must_use]
    pub fn seats_left(&self) -> u32 {
        self.seats_left.load(Ordering::Acquire)
    }
}
