//! Ledger store: per-fixture positions and casino entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    parse_amount, CasinoDraft, CasinoEntry, EntryId, FixtureId, Outcome, Position,
};

/// Both ledgers. All mutations are synchronous and visible immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub positions: BTreeMap<FixtureId, Position>,
    pub casino: Vec<CasinoEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self, fixture_id: &FixtureId) -> Option<&Position> {
        self.positions.get(fixture_id)
    }

    /// Set or clear the outcome of a fixture's position, keeping any amount.
    pub fn set_outcome(&mut self, fixture_id: &FixtureId, outcome: Option<Outcome>) {
        let position = self.positions.entry(fixture_id.clone()).or_default();
        position.outcome = outcome;
        debug!(fixture = %fixture_id, ?outcome, "position outcome set");
    }

    /// Store the parsed amount for a fixture's position and return it.
    ///
    /// Unparseable input stores 0.
    pub fn set_amount(&mut self, fixture_id: &FixtureId, raw: &str) -> i64 {
        let amount = parse_amount(raw);
        let position = self.positions.entry(fixture_id.clone()).or_default();
        position.amount = Some(amount);
        debug!(fixture = %fixture_id, amount, "position amount set");
        amount
    }

    pub fn casino_entry(&self, id: EntryId) -> Option<&CasinoEntry> {
        self.casino.iter().find(|e| e.id == id)
    }

    /// Replace the entry named by `original`, or append a new one.
    ///
    /// A replaced entry keeps its id and its place in the list. The entry is
    /// always stamped with `stamped_at`.
    pub fn upsert_casino_entry(
        &mut self,
        draft: CasinoDraft,
        original: Option<EntryId>,
        stamped_at: String,
    ) -> EntryId {
        let existing = original.and_then(|id| self.casino.iter().position(|e| e.id == id));
        let id = match existing {
            Some(index) => self.casino[index].id,
            None => EntryId::generate(),
        };

        let entry = CasinoEntry {
            id,
            description: draft.description,
            amount: draft.amount.max(0),
            kind: draft.kind,
            created_at: stamped_at,
        };

        match existing {
            Some(index) => {
                debug!(entry = %id, "casino entry replaced");
                self.casino[index] = entry;
            }
            None => {
                debug!(entry = %id, "casino entry appended");
                self.casino.push(entry);
            }
        }
        id
    }

    /// Remove the entry with `id`. Returns false when there was none.
    pub fn delete_casino_entry(&mut self, id: EntryId) -> bool {
        match self.casino.iter().position(|e| e.id == id) {
            Some(index) => {
                self.casino.remove(index);
                debug!(entry = %id, "casino entry deleted");
                true
            }
            None => false,
        }
    }
}
