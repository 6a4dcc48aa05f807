//! The house catalog and its standard daily lineup.

use crate::aggregates::{Movie, SPECIAL_CODE, Showing};
use crate::error::{Result, TheaterError};
use crate::types::{Money, Runtime};
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

/// Movies currently in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Spider-Man: No Way Home
    SpiderMan,
    /// Turning Red
    TurningRed,
    /// The Batman
    TheBatman,
}

/// One entry of a lineup: what plays, and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Movie shown
    pub feature: Feature,
    /// Start hour
    pub hour: u32,
    /// Start minute
    pub minute: u32,
}

impl Slot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(feature: Feature, hour: u32, minute: u32) -> Self {
        Self {
            feature,
            hour,
            minute,
        }
    }
}

/// Standard daily lineup, in sequence order.
pub const DAILY_SLOTS: [Slot; 9] = [
    Slot::new(Feature::TurningRed, 9, 0),
    Slot::new(Feature::SpiderMan, 11, 0),
    Slot::new(Feature::TheBatman, 12, 50),
    Slot::new(Feature::TurningRed, 14, 30),
    Slot::new(Feature::SpiderMan, 16, 10),
    Slot::new(Feature::TheBatman, 17, 50),
    Slot::new(Feature::TurningRed, 19, 30),
    Slot::new(Feature::SpiderMan, 21, 10),
    Slot::new(Feature::TheBatman, 23, 0),
];

/// Shared movie instances for building lineups.
#[derive(Clone, Debug)]
pub struct Catalog {
    spider_man: Arc<Movie>,
    turning_red: Arc<Movie>,
    the_batman: Arc<Movie>,
}

impl Catalog {
    /// Returns the shared movie for `feature`.
    #[must_use]
    pub fn movie(&self, feature: Feature) -> &Arc<Movie> {
        match feature {
            Feature::SpiderMan => &self.spider_man,
            Feature::TurningRed => &self.turning_red,
            Feature::TheBatman => &self.the_batman,
        }
    }
}

/// Builds the house catalog.
///
/// # Errors
///
/// Returns [`TheaterError::Validation`] if a catalog entry is malformed.
pub fn default_catalog() -> Result<Catalog> {
    Ok(Catalog {
        spider_man: Arc::new(Movie::with_special_code(
            "Spider-Man: No Way Home",
            Runtime::from_minutes(90),
            Money::from_cents(1250),
            SPECIAL_CODE,
        )?),
        turning_red: Arc::new(Movie::new(
            "Turning Red",
            Runtime::from_minutes(85),
            Money::from_dollars(11),
        )?),
        the_batman: Arc::new(Movie::new(
            "The Batman",
            Runtime::from_minutes(95),
            Money::from_dollars(9),
        )?),
    })
}

/// Builds showings for `date` from `slots`; the slot index plus one is the
/// sequence number.
///
/// # Errors
///
/// Returns [`TheaterError::Validation`] if a slot has an invalid time.
pub fn build_lineup(catalog: &Catalog, date: NaiveDate, slots: &[Slot]) -> Result<Vec<Showing>> {
    (1_u32..)
        .zip(slots)
        .map(|(sequence, slot)| {
            let time = NaiveTime::from_hms_opt(slot.hour, slot.minute, 0).ok_or_else(|| {
                TheaterError::validation("Showing", format!("{}:{} is not a time", slot.hour, slot.minute))
            })?;
            Showing::new(Arc::clone(catalog.movie(slot.feature)), sequence, date.and_time(time))
        })
        .collect()
}

/// Builds the standard daily lineup for `date`.
///
/// # Errors
///
/// See [`build_lineup`].
pub fn daily_lineup(catalog: &Catalog, date: NaiveDate) -> Result<Vec<Showing>> {
    build_lineup(catalog, date, &DAILY_SLOTS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_lineup_prices() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let lineup = daily_lineup(&default_catalog().unwrap(), date).unwrap();
        let fees: Vec<String> = lineup.iter().map(|s| s.discounted_fee().to_plain_string()).collect();
        assert_eq!(
            fees,
            vec!["8.00", "9.38", "6.75", "8.25", "9.38", "9.00", "11.00", "10.00", "9.00"]
        );
        assert!(lineup.iter().all(|s| s.seats_left() == 100));
    }

    #[test]
    fn test_showings_share_catalog_movies() {
        let catalog = default_catalog().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let lineup = daily_lineup(&catalog, date).unwrap();
        assert!(Arc::ptr_eq(lineup[0].movie(), catalog.movie(Feature::TurningRed)));
        assert!(Arc::ptr_eq(lineup[3].movie(), lineup[6].movie()));
    }

    #[test]
    fn test_invalid_slot_time() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let slots = [Slot::new(Feature::TheBatman, 24, 0)];
        assert!(matches!(
            build_lineup(&default_catalog().unwrap(), date, &slots),
            Err(TheaterError::Validation { entity: "Showing", .. })
        ));
    }
}
