//! Fixture schedule sources.
//!
//! The schedule is read once per session and handed to the tracker as an
//! immutable, id-unique list.

use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::domain::Fixture;

pub mod csv;

pub use self::csv::CsvSchedule;

/// Supplies the season's fixtures in display order.
pub trait ScheduleSource: Send + Sync + fmt::Debug {
    fn load(&self) -> Result<Vec<Fixture>, ScheduleError>;
}

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Failed to read schedule: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("Fixture {id}: unrecognised date {value:?}")]
    InvalidDate { id: String, value: String },
    #[error("Fixture {id}: unrecognised time {value:?}")]
    InvalidTime { id: String, value: String },
    #[error("Duplicate fixture id: {0}")]
    DuplicateId(String),
}

/// Fixed in-memory schedule.
#[derive(Debug, Clone, Default)]
pub struct StaticSchedule {
    fixtures: Vec<Fixture>,
}

impl StaticSchedule {
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }
}

impl ScheduleSource for StaticSchedule {
    fn load(&self) -> Result<Vec<Fixture>, ScheduleError> {
        ensure_unique_ids(&self.fixtures)?;
        Ok(self.fixtures.clone())
    }
}

/// Reject schedules where two fixtures share an id.
pub fn ensure_unique_ids(fixtures: &[Fixture]) -> Result<(), ScheduleError> {
    let mut seen = HashSet::new();
    for fixture in fixtures {
        if !seen.insert(fixture.id.as_str()) {
            return Err(ScheduleError::DuplicateId(fixture.id.to_string()));
        }
    }
    Ok(())
}
