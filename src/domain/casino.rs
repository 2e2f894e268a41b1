//! Free-standing casino ledger entries.

use serde::{Deserialize, Serialize};

use super::primitives::non_negative_amount;
use super::{EntryId, Outcome};

/// A profit/loss record not tied to any fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoEntry {
    pub id: EntryId,
    pub description: String,
    #[serde(deserialize_with = "non_negative_amount")]
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: Outcome,
    /// Formatted local timestamp of the last add or edit.
    pub created_at: String,
}

impl CasinoEntry {
    /// Amount counted towards `outcome`.
    pub fn contribution(&self, outcome: Outcome) -> i64 {
        if self.kind == outcome {
            self.amount
        } else {
            0
        }
    }
}

/// Caller-supplied fields of a casino entry; id and timestamp are assigned by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasinoDraft {
    pub description: String,
    pub amount: i64,
    pub kind: Outcome,
}

impl CasinoDraft {
    pub fn new(description: impl Into<String>, amount: i64, kind: Outcome) -> Self {
        Self {
            description: description.into(),
            amount,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casino_entry_json_keys() {
        let entry = CasinoEntry {
            id: EntryId::generate(),
            description: "Roulette".to_string(),
            amount: 100,
            kind: Outcome::Loss,
            created_at: "22/03/2025, 20:00:00".to_string(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "Loss");
        assert_eq!(value["createdAt"], "22/03/2025, 20:00:00");
        assert_eq!(value["amount"], 100);
    }

    #[test]
    fn test_negative_stored_amount_reads_as_zero() {
        let json = format!(
            r#"{{"id":"{}","description":"Slots","amount":-50,"type":"Loss","createdAt":"x"}}"#,
            EntryId::generate()
        );
        let entry: CasinoEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry.amount, 0);
        assert_eq!(entry.contribution(Outcome::Loss), 0);
    }
}
