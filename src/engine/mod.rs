//! Pure computation over the schedule and the ledgers.

pub mod aggregate;
pub mod bookmarks;
pub mod clock;
pub mod filter;
pub mod ledger;
pub mod status;

pub use aggregate::{summarize, Aggregates, LedgerTotals, NetStatus};
pub use bookmarks::BookmarkSet;
pub use clock::{Clock, FixedClock, SystemClock, ENTRY_TIMESTAMP_FORMAT};
pub use filter::{distinct_teams, distinct_venues, filter_fixtures, FilterState};
pub use ledger::Ledger;
pub use status::SeasonCalendar;
