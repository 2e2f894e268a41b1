pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod schedule;
pub mod tracker;

pub use config::Config;
pub use db::{init_db, MemorySlotStore, SlotStore, SqliteSlotStore};
pub use domain::{
    parse_amount, CasinoDraft, CasinoEntry, EntryId, Fixture, FixtureId, FixtureStatus,
    FixtureTiming, FixtureView, Outcome, Position,
};
pub use engine::{
    Aggregates, BookmarkSet, Clock, FilterState, FixedClock, Ledger, NetStatus, SeasonCalendar,
    SystemClock,
};
pub use error::AppError;
pub use schedule::{CsvSchedule, ScheduleSource, StaticSchedule};
pub use tracker::{Tracker, TrackerState};
