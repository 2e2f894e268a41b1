//! Scheduled fixtures and their derived lifecycle view.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{FixtureId, Position};

/// One scheduled match. Supplied by the schedule and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub home: String,
    pub away: String,
    pub venue: String,
    /// Stored calendar date; its year may be stale and is normalized before use.
    pub date: NaiveDate,
    /// Local start time.
    pub time: NaiveTime,
    pub weekday: String,
}

impl Fixture {
    /// Whether `team` plays in this fixture, home or away.
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }
}

/// Lifecycle state of a fixture relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureStatus {
    Upcoming,
    Live,
    Completed,
}

impl std::fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            FixtureStatus::Upcoming => "Upcoming",
            FixtureStatus::Live => "Live",
            FixtureStatus::Completed => "Completed",
        })
    }
}

/// Time-derived facts about a fixture, all computed from one start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureTiming {
    pub status: FixtureStatus,
    /// Start falls on the same calendar day as now.
    pub is_today: bool,
    /// Start instant is strictly before now.
    pub has_started: bool,
    pub starts_at: NaiveDateTime,
}

/// A fixture as presented: timing, bookmark flag and any recorded position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureView<'a> {
    pub fixture: &'a Fixture,
    pub timing: FixtureTiming,
    pub bookmarked: bool,
    pub position: Option<&'a Position>,
}
