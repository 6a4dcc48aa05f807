//! Configuration management for the theater binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::projections::ScheduleFormat;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use showtime_core::environment::{Clock, SystemClock};
use std::env;
use std::sync::Arc;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracing filter directive (`THEATER_LOG`, falling back to `RUST_LOG`)
    pub log_filter: String,
    /// Reference date override (`THEATER_TODAY`, `YYYY-MM-DD`); system date when unset
    pub today: Option<NaiveDate>,
    /// Which schedule formats to print
    pub schedule_output: ScheduleOutput,
    /// Sample booking made at startup
    pub demo: DemoBookingConfig,
}

/// Schedule formats printed at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleOutput {
    /// Text only
    Text,
    /// JSON only
    Json,
    /// Text, then JSON
    #[default]
    Both,
}

impl ScheduleOutput {
    /// Formats to print, in order.
    #[must_use]
    pub fn formats(self) -> &'static [ScheduleFormat] {
        match self {
            Self::Text => &[ScheduleFormat::Text],
            Self::Json => &[ScheduleFormat::Json],
            Self::Both => &[ScheduleFormat::Text, ScheduleFormat::Json],
        }
    }

    fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("both") {
            return Some(Self::Both);
        }
        match value.parse::<ScheduleFormat>().ok()? {
            ScheduleFormat::Text => Some(Self::Text),
            ScheduleFormat::Json => Some(Self::Json),
        }
    }
}

/// Sample booking configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoBookingConfig {
    /// Customer name (`THEATER_DEMO_CUSTOMER`)
    pub customer_name: String,
    /// Customer id (`THEATER_DEMO_CUSTOMER_ID`)
    pub customer_id: String,
    /// Sequence to book (`THEATER_DEMO_SEQUENCE`)
    pub sequence: u32,
    /// Tickets to book (`THEATER_DEMO_TICKETS`)
    pub tickets: u32,
}

impl Default for DemoBookingConfig {
    fn default() -> Self {
        Self {
            customer_name: "Rajesh".to_string(),
            customer_id: "1".to_string(),
            sequence: 2,
            tickets: 3,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = DemoBookingConfig::default();
        Self {
            log_filter: lookup("THEATER_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| "theater=info".to_string()),
            today: lookup("THEATER_TODAY").and_then(|s| s.trim().parse().ok()),
            schedule_output: lookup("THEATER_SCHEDULE_FORMAT")
                .and_then(|s| ScheduleOutput::parse(&s))
                .unwrap_or_default(),
            demo: DemoBookingConfig {
                customer_name: lookup("THEATER_DEMO_CUSTOMER").unwrap_or(defaults.customer_name),
                customer_id: lookup("THEATER_DEMO_CUSTOMER_ID").unwrap_or(defaults.customer_id),
                sequence: lookup("THEATER_DEMO_SEQUENCE")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.sequence),
                tickets: lookup("THEATER_DEMO_TICKETS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.tickets),
            },
        }
    }

    /// Clock for the reference date: pinned when `today` is set, system time otherwise.
    #[must_use]
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.today {
            Some(date) => Arc::new(ReferenceDateClock::new(date)),
            None => Arc::new(SystemClock),
        }
    }
}

/// Clock pinned to a configured reference date (midnight UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDateClock {
    date: NaiveDate,
}

impl ReferenceDateClock {
    /// Creates a clock that always reports `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for ReferenceDateClock {
    fn now(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}
