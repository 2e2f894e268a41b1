//! Load and save of tracker state across three independent slots.
//!
//! Each slot is read and written on its own: a slot that is missing,
//! unreadable or malformed falls back to its empty default without affecting
//! the other two. Write failures are logged and swallowed; the in-memory state
//! stays authoritative for the session.
//!
//! Casino entries stored without an id are given one on load and the slot is
//! rewritten at once, so later sessions see the same ids.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::db::SlotStore;
use crate::domain::primitives::non_negative_amount;
use crate::domain::{CasinoEntry, EntryId, FixtureId, Outcome, Position};
use crate::engine::{BookmarkSet, Ledger};

pub const POSITIONS_SLOT: &str = "fixture_positions";
pub const BOOKMARKS_SLOT: &str = "bookmarks";
pub const CASINO_SLOT: &str = "casino_entries";

/// Everything the tracker persists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerState {
    pub ledger: Ledger,
    pub bookmarks: BookmarkSet,
}

/// Casino entry as found in storage, where `id` may predate id assignment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCasinoEntry {
    #[serde(default)]
    id: Option<EntryId>,
    description: String,
    #[serde(deserialize_with = "non_negative_amount")]
    amount: i64,
    #[serde(rename = "type")]
    kind: Outcome,
    #[serde(default)]
    created_at: String,
}

pub async fn load_state(store: &dyn SlotStore) -> TrackerState {
    let positions: BTreeMap<FixtureId, Position> = load_slot(store, POSITIONS_SLOT).await;
    let bookmarks: BookmarkSet = load_slot(store, BOOKMARKS_SLOT).await;
    let casino = load_casino(store).await;

    debug!(
        positions = positions.len(),
        casino_entries = casino.len(),
        "tracker state loaded"
    );

    TrackerState {
        ledger: Ledger { positions, casino },
        bookmarks,
    }
}

/// Write all three slots. Returns the number of slots that failed to write.
pub async fn save_state(store: &dyn SlotStore, state: &TrackerState) -> usize {
    let results = [
        save_slot(store, POSITIONS_SLOT, &state.ledger.positions).await,
        save_slot(store, BOOKMARKS_SLOT, &state.bookmarks).await,
        save_slot(store, CASINO_SLOT, &state.ledger.casino).await,
    ];
    results.iter().filter(|ok| !**ok).count()
}

async fn load_casino(store: &dyn SlotStore) -> Vec<CasinoEntry> {
    let stored: Vec<StoredCasinoEntry> = load_slot(store, CASINO_SLOT).await;

    let mut assigned = 0usize;
    let casino: Vec<CasinoEntry> = stored
        .into_iter()
        .map(|entry| CasinoEntry {
            id: entry.id.unwrap_or_else(|| {
                assigned += 1;
                EntryId::generate()
            }),
            description: entry.description,
            amount: entry.amount,
            kind: entry.kind,
            created_at: entry.created_at,
        })
        .collect();

    if assigned > 0 {
        info!(assigned, "assigned ids to stored casino entries");
        save_slot(store, CASINO_SLOT, &casino).await;
    }
    casino
}

async fn load_slot<T>(store: &dyn SlotStore, slot: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let payload = match store.read(slot).await {
        Ok(Some(payload)) => payload,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!(slot, error = %e, "failed to read slot, using empty default");
            return T::default();
        }
    };

    match serde_json::from_str(&payload) {
        Ok(value) => value,
        Err(e) => {
            warn!(slot, error = %e, "malformed slot contents, using empty default");
            T::default()
        }
    }
}

async fn save_slot<T: Serialize>(store: &dyn SlotStore, slot: &str, value: &T) -> bool {
    let payload = match serde_json::to_string(value) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(slot, error = %e, "failed to serialize slot");
            return false;
        }
    };

    match store.write(slot, &payload).await {
        Ok(()) => true,
        Err(e) => {
            warn!(slot, error = %e, "failed to write slot");
            false
        }
    }
}
