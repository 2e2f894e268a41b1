//! Per-fixture position.

use serde::{Deserialize, Serialize};

use super::primitives::non_negative_amount_opt;
use super::Outcome;

/// A profit/loss stance recorded against one fixture.
///
/// Both fields are optional: a position may be created by an amount edit
/// before any outcome is chosen, and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_negative_amount_opt"
    )]
    pub amount: Option<i64>,
}

impl Position {
    /// Amount counted towards `outcome`, zero when the outcome differs or is unset.
    pub fn contribution(&self, outcome: Outcome) -> i64 {
        match self.outcome {
            Some(o) if o == outcome => self.amount.unwrap_or(0),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_json_shape() {
        let position = Position {
            outcome: Some(Outcome::Profit),
            amount: Some(500),
        };
        let json = serde_json::to_string(&position).unwrap();
        assert_eq!(json, r#"{"outcome":"Profit","amount":500}"#);
    }

    #[test]
    fn test_position_missing_fields_default() {
        let position: Position = serde_json::from_str(r#"{"outcome":"Loss"}"#).unwrap();
        assert_eq!(position.outcome, Some(Outcome::Loss));
        assert_eq!(position.amount, None);

        let empty: Position = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Position::default());
    }

    #[test]
    fn test_negative_stored_amount_reads_as_zero() {
        let position: Position =
            serde_json::from_str(r#"{"outcome":"Profit","amount":-200}"#).unwrap();
        assert_eq!(position.amount, Some(0));
        assert_eq!(position.contribution(Outcome::Profit), 0);

        let null_amount: Position = serde_json::from_str(r#"{"amount":null}"#).unwrap();
        assert_eq!(null_amount.amount, None);
    }

    #[test]
    fn test_contribution() {
        let position = Position {
            outcome: Some(Outcome::Loss),
            amount: Some(200),
        };
        assert_eq!(position.contribution(Outcome::Loss), 200);
        assert_eq!(position.contribution(Outcome::Profit), 0);

        let unset = Position {
            outcome: None,
            amount: Some(200),
        };
        assert_eq!(unset.contribution(Outcome::Loss), 0);
    }
}
