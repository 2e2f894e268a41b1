//! The tracker session: one owner for the schedule, ledgers, bookmarks and filters.
//!
//! "Now" is sampled once when the session loads, so fixture status stays
//! stable across reads for the life of the session. Every mutation is applied
//! in memory and then written through to the slot store before returning.
//! Writes are not batched; a failed write is logged and the session carries on.

pub mod persistence;

pub use persistence::{load_state, save_state, TrackerState};

use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::db::{init_db, SlotStore, SqliteSlotStore};
use crate::domain::{
    CasinoDraft, CasinoEntry, EntryId, Fixture, FixtureId, FixtureTiming, FixtureView, Outcome,
};
use crate::engine::{
    distinct_teams, distinct_venues, summarize, Aggregates, BookmarkSet, Clock, FilterState,
    Ledger, SeasonCalendar,
};
use crate::error::AppError;
use crate::schedule::{CsvSchedule, ScheduleSource};

#[derive(Debug)]
pub struct Tracker {
    fixtures: Vec<Fixture>,
    calendar: SeasonCalendar,
    now: NaiveDateTime,
    clock: Arc<dyn Clock>,
    store: Arc<dyn SlotStore>,
    state: TrackerState,
    filter: FilterState,
}

impl Tracker {
    /// Hydrate a session from `store` and sample the clock for "now".
    pub async fn load(
        fixtures: Vec<Fixture>,
        calendar: SeasonCalendar,
        clock: Arc<dyn Clock>,
        store: Arc<dyn SlotStore>,
    ) -> Self {
        let state = load_state(store.as_ref()).await;
        let now = clock.now();

        info!(
            fixtures = fixtures.len(),
            positions = state.ledger.positions.len(),
            casino_entries = state.ledger.casino.len(),
            %now,
            "tracker session loaded"
        );

        Self {
            fixtures,
            calendar,
            now,
            clock,
            store,
            state,
            filter: FilterState::default(),
        }
    }

    /// Open a session from configuration: CSV schedule plus SQLite-backed slots.
    pub async fn open(config: &Config, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let fixtures = CsvSchedule::new(&config.schedule_path).load()?;
        let pool = init_db(&config.database_path).await?;
        let store: Arc<dyn SlotStore> = Arc::new(SqliteSlotStore::new(pool));

        Ok(Self::load(fixtures, config.calendar(), clock, store).await)
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn calendar(&self) -> &SeasonCalendar {
        &self.calendar
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn ledger(&self) -> &Ledger {
        &self.state.ledger
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.state.bookmarks
    }

    pub fn casino_entries(&self) -> &[CasinoEntry] {
        &self.state.ledger.casino
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Filter selection is session-only and never persisted.
    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub async fn set_outcome(&mut self, fixture_id: &FixtureId, outcome: Option<Outcome>) {
        self.note_unknown(fixture_id);
        self.state.ledger.set_outcome(fixture_id, outcome);
        self.persist().await;
    }

    /// Record an amount typed by the user; returns the stored value.
    pub async fn set_amount(&mut self, fixture_id: &FixtureId, raw: &str) -> i64 {
        self.note_unknown(fixture_id);
        let amount = self.state.ledger.set_amount(fixture_id, raw);
        self.persist().await;
        amount
    }

    /// Flip a fixture's bookmark; returns the new flag.
    pub async fn toggle_bookmark(&mut self, fixture_id: &FixtureId) -> bool {
        self.note_unknown(fixture_id);
        let bookmarked = self.state.bookmarks.toggle(fixture_id);
        debug!(fixture = %fixture_id, bookmarked, "bookmark toggled");
        self.persist().await;
        bookmarked
    }

    /// Add a casino entry, or replace `original` when it exists.
    ///
    /// The entry is stamped with the current clock time, not the session "now".
    pub async fn upsert_casino_entry(
        &mut self,
        draft: CasinoDraft,
        original: Option<EntryId>,
    ) -> EntryId {
        let stamped_at = self.clock.timestamp();
        let id = self
            .state
            .ledger
            .upsert_casino_entry(draft, original, stamped_at);
        self.persist().await;
        id
    }

    /// Remove a casino entry. Returns false, and writes nothing, on a miss.
    pub async fn delete_casino_entry(&mut self, id: EntryId) -> bool {
        let removed = self.state.ledger.delete_casino_entry(id);
        if removed {
            self.persist().await;
        }
        removed
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    pub fn summary(&self) -> Aggregates {
        summarize(&self.state.ledger)
    }

    pub fn timing(&self, fixture: &Fixture) -> FixtureTiming {
        self.calendar.timing(fixture, self.now)
    }

    /// Fixtures passing the current filter, classified, in schedule order.
    pub fn visible(&self) -> Vec<FixtureView<'_>> {
        self.fixtures
            .iter()
            .filter(|f| self.filter.matches(f, &self.state.bookmarks))
            .map(|f| self.view_of(f))
            .collect()
    }

    /// Classified view of one fixture regardless of the filter.
    pub fn view(&self, fixture_id: &FixtureId) -> Option<FixtureView<'_>> {
        self.fixtures
            .iter()
            .find(|f| &f.id == fixture_id)
            .map(|f| self.view_of(f))
    }

    pub fn venues(&self) -> Vec<&str> {
        distinct_venues(&self.fixtures)
    }

    pub fn teams(&self) -> Vec<&str> {
        distinct_teams(&self.fixtures)
    }

    fn view_of<'a>(&'a self, fixture: &'a Fixture) -> FixtureView<'a> {
        FixtureView {
            fixture,
            timing: self.timing(fixture),
            bookmarked: self.state.bookmarks.is_bookmarked(&fixture.id),
            position: self.state.ledger.position(&fixture.id),
        }
    }

    fn note_unknown(&self, fixture_id: &FixtureId) {
        if !self.fixtures.iter().any(|f| &f.id == fixture_id) {
            warn!(fixture = %fixture_id, "fixture not in schedule");
        }
    }

    async fn persist(&self) {
        let failed = save_state(self.store.as_ref(), &self.state).await;
        if failed > 0 {
            warn!(failed, "tracker state only partially persisted");
        }
    }
}
