//! Fixture lifecycle classification.
//!
//! Stored fixture dates may carry a stale year. Every time-derived signal
//! (status, same-day, started) is computed from one start instant whose year
//! has been coerced to the configured season year.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::domain::{Fixture, FixtureStatus, FixtureTiming};

pub const DEFAULT_SEASON_YEAR: i32 = 2025;
pub const DEFAULT_MATCH_DURATION_MINUTES: i64 = 240;

/// Season year and match length used to place fixtures in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonCalendar {
    season_year: i32,
    match_duration: Duration,
}

impl Default for SeasonCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_SEASON_YEAR)
    }
}

impl SeasonCalendar {
    pub fn new(season_year: i32) -> Self {
        Self {
            season_year,
            match_duration: Duration::minutes(DEFAULT_MATCH_DURATION_MINUTES),
        }
    }

    pub fn with_match_duration(mut self, match_duration: Duration) -> Self {
        self.match_duration = match_duration;
        self
    }

    pub fn season_year(&self) -> i32 {
        self.season_year
    }

    pub fn match_duration(&self) -> Duration {
        self.match_duration
    }

    /// Move `date` into the season year.
    ///
    /// Feb 29 in a non-leap season rolls over to Mar 1.
    pub fn normalize_date(&self, date: NaiveDate) -> NaiveDate {
        date.with_year(self.season_year)
            .or_else(|| NaiveDate::from_ymd_opt(self.season_year, 3, 1))
            .unwrap_or(date)
    }

    /// Normalized local start instant of a fixture.
    pub fn starts_at(&self, fixture: &Fixture) -> NaiveDateTime {
        self.normalize_date(fixture.date).and_time(fixture.time)
    }

    /// Live interval is `[start, start + duration]`, inclusive at both ends.
    pub fn status(&self, fixture: &Fixture, now: NaiveDateTime) -> FixtureStatus {
        self.timing(fixture, now).status
    }

    pub fn timing(&self, fixture: &Fixture, now: NaiveDateTime) -> FixtureTiming {
        let starts_at = self.starts_at(fixture);
        let ends_at = starts_at
            .checked_add_signed(self.match_duration)
            .unwrap_or(NaiveDateTime::MAX);

        let status = if now < starts_at {
            FixtureStatus::Upcoming
        } else if now <= ends_at {
            FixtureStatus::Live
        } else {
            FixtureStatus::Completed
        };

        FixtureTiming {
            status,
            is_today: starts_at.date() == now.date(),
            has_started: starts_at < now,
            starts_at,
        }
    }
}
