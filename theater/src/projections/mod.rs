//! Read-only views of the schedule and of reservations.
//!
//! Renderers only read accessors on [`Showing`](crate::aggregates::Showing) and
//! [`Reservation`]; nothing in the aggregates depends on this module, and no
//! renderer touches seat counts.
//!
//! Both schedule formats share the same frame:
//!
//! ```text
//! 2025-03-04
//! ===================================================
//! <one line per showing>
//! ===================================================
//! ```

pub mod json;
pub mod text;

use crate::aggregates::{Reservation, Theater};
use crate::error::{Result, TheaterError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use json::ShowingView;
pub use text::ReservationSummary;

/// Rule line framing a printed schedule.
pub const RULE: &str = "===================================================";

/// Output format for [`render_schedule`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleFormat {
    /// One human-readable line per showing
    #[default]
    Text,
    /// One JSON object per showing
    Json,
}

impl FromStr for ScheduleFormat {
    type Err = TheaterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(TheaterError::Render(format!("unknown schedule format '{other}'"))),
        }
    }
}

impl fmt::Display for ScheduleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Renders the lineup for `date` in `format`, framed by the date and rule lines.
///
/// # Errors
///
/// Returns [`TheaterError::ScheduleNotFound`] if nothing is scheduled on
/// `date`, or [`TheaterError::Render`] if a showing cannot be serialized.
pub fn render_schedule(theater: &Theater, date: NaiveDate, format: ScheduleFormat) -> Result<String> {
    let lineup = theater
        .schedule_for(date)
        .ok_or(TheaterError::ScheduleNotFound { show_date: date })?;

    let lines: Vec<String> = match format {
        ScheduleFormat::Text => lineup.iter().map(|showing| text::showing_line(showing)).collect(),
        ScheduleFormat::Json => lineup
            .iter()
            .map(|showing| json::showing_line(showing))
            .collect::<Result<Vec<_>>>()?,
    };

    let mut out = format!("{date}\n{RULE}\n");
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    Ok(out)
}

/// Renders the confirmation line for a reservation.
///
/// # Errors
///
/// Returns the error from [`Reservation::total_fee`].
pub fn render_reservation(reservation: &Reservation) -> Result<String> {
    Ok(ReservationSummary::try_from(reservation)?.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::lineup::{daily_lineup, default_catalog};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
    }

    fn theater() -> Theater {
        let mut theater = Theater::new();
        theater.insert_lineup(today(), daily_lineup(&default_catalog().unwrap(), today()).unwrap());
        theater
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("TEXT".parse::<ScheduleFormat>().unwrap(), ScheduleFormat::Text);
        assert_eq!(" json ".parse::<ScheduleFormat>().unwrap(), ScheduleFormat::Json);
        assert!("xml".parse::<ScheduleFormat>().is_err());
    }

    #[test]
    fn test_schedule_is_framed() {
        for format in [ScheduleFormat::Text, ScheduleFormat::Json] {
            let out = render_schedule(&theater(), today(), format).unwrap();
            let lines: Vec<&str> = out.lines().collect();
            assert_eq!(lines.len(), 12, "{format}");
            assert_eq!(lines[0], "2025-03-04");
            assert_eq!(lines[1], RULE);
            assert_eq!(lines[11], RULE);
        }
    }

    #[test]
    fn test_unknown_date_fails() {
        let tomorrow = today().succ_opt().unwrap();
        assert_eq!(
            render_schedule(&theater(), tomorrow, ScheduleFormat::Text),
            Err(TheaterError::ScheduleNotFound { show_date: tomorrow })
        );
    }

    #[test]
    fn test_rendering_does_not_touch_seats() {
        let theater = theater();
        render_schedule(&theater, today(), ScheduleFormat::Json).unwrap();
        render_schedule(&theater, today(), ScheduleFormat::Text).unwrap();
        for showing in theater.schedule_for(today()).unwrap() {
            assert_eq!(showing.seats_left(), 100);
        }
    }
}
