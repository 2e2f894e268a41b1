//! CSV schedule reader.
//!
//! Expects a header row of `Match,Home,Away,Date,Time,Day,Venue`.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use super::{ensure_unique_ids, ScheduleError, ScheduleSource};
use crate::domain::{Fixture, FixtureId};

// Two-digit years come before four-digit ones: "%Y" would read "25" as year 25.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d %b %Y", "%d-%b-%y", "%d-%b-%Y"];
const TIME_FORMATS: &[&str] = &["%H:%M", "%I:%M %p", "%I:%M%p"];

#[derive(Debug, Deserialize)]
struct ScheduleRow {
    #[serde(rename = "Match")]
    id: String,
    #[serde(rename = "Home")]
    home: String,
    #[serde(rename = "Away")]
    away: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Day", default)]
    weekday: String,
    #[serde(rename = "Venue")]
    venue: String,
}

impl ScheduleRow {
    fn into_fixture(self) -> Result<Fixture, ScheduleError> {
        let id = self.id.trim().to_string();
        let date = parse_date(&self.date).ok_or_else(|| ScheduleError::InvalidDate {
            id: id.clone(),
            value: self.date.clone(),
        })?;
        let time = parse_time(&self.time).ok_or_else(|| ScheduleError::InvalidTime {
            id: id.clone(),
            value: self.time.clone(),
        })?;

        Ok(Fixture {
            id: FixtureId::new(id),
            home: self.home.trim().to_string(),
            away: self.away.trim().to_string(),
            venue: self.venue.trim().to_string(),
            date,
            time,
            weekday: self.weekday.trim().to_string(),
        })
    }
}

/// Schedule stored as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvSchedule {
    path: PathBuf,
}

impl CsvSchedule {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse fixtures from any CSV reader.
    pub fn parse<R: std::io::Read>(reader: R) -> Result<Vec<Fixture>, ScheduleError> {
        let mut csv_reader = ::csv::ReaderBuilder::new()
            .trim(::csv::Trim::Headers)
            .from_reader(reader);

        let fixtures = csv_reader
            .deserialize::<ScheduleRow>()
            .map(|row| row.map_err(ScheduleError::from).and_then(ScheduleRow::into_fixture))
            .collect::<Result<Vec<_>, _>>()?;

        ensure_unique_ids(&fixtures)?;
        Ok(fixtures)
    }
}

impl ScheduleSource for CsvSchedule {
    fn load(&self) -> Result<Vec<Fixture>, ScheduleError> {
        let file = std::fs::File::open(&self.path).map_err(::csv::Error::from)?;
        let fixtures = Self::parse(file)?;
        info!("Loaded {} fixtures from {}", fixtures.len(), self.path.display());
        Ok(fixtures)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
}
