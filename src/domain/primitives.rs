//! Domain primitives: FixtureId, EntryId, Outcome.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Identifier of a scheduled fixture (e.g. "M1").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureId(pub String);

impl FixtureId {
    /// Create a FixtureId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        FixtureId(id.into())
    }

    /// Get the identifier as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FixtureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for FixtureId {
    fn from(s: &str) -> Self {
        FixtureId(s.to_string())
    }
}

/// Generated identifier of a casino entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4())
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(EntryId)
    }
}

/// Declared result of a position: Profit or Loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Profit,
    Loss,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Outcome::Profit => "Profit",
            Outcome::Loss => "Loss",
        })
    }
}

impl std::str::FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "profit" => Ok(Outcome::Profit),
            "loss" => Ok(Outcome::Loss),
            other => Err(format!("unknown outcome: {}", other)),
        }
    }
}

/// Parse user-entered amount text into a non-negative integer.
///
/// Takes the leading run of decimal digits (an optional `+` is allowed), so
/// `"12.5"` reads as 12. Empty, negative, non-numeric or overflowing input
/// reads as 0; malformed amounts are never an error.
pub fn parse_amount(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end].parse::<i64>().unwrap_or(0)
}

/// Read a stored amount, clamping negatives to 0.
pub fn non_negative_amount<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(i64::deserialize(deserializer)?.max(0))
}

/// Optional form of [`non_negative_amount`].
pub fn non_negative_amount_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.map(|amount| amount.max(0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&Outcome::Profit).unwrap();
        assert_eq!(json, "\"Profit\"");

        let loss: Outcome = serde_json::from_str("\"Loss\"").unwrap();
        assert_eq!(loss, Outcome::Loss);
    }

    #[test]
    fn test_outcome_from_str_is_case_insensitive() {
        assert_eq!("profit".parse::<Outcome>().unwrap(), Outcome::Profit);
        assert_eq!(" LOSS ".parse::<Outcome>().unwrap(), Outcome::Loss);
        assert!("draw".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("500"), 500);
        assert_eq!(parse_amount(" 42 "), 42);
        assert_eq!(parse_amount("+7"), 7);
    }

    #[test]
    fn test_parse_amount_invalid_is_zero() {
        assert_eq!(parse_amount("abc"), 0);
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("-200"), 0);
        assert_eq!(parse_amount("99999999999999999999999"), 0);
    }

    #[test]
    fn test_parse_amount_takes_integer_prefix() {
        assert_eq!(parse_amount("12.5"), 12);
        assert_eq!(parse_amount("300rs"), 300);
    }

    #[test]
    fn test_fixture_id_display() {
        let id = FixtureId::new("M1");
        assert_eq!(id.to_string(), "M1");
        assert_eq!(FixtureId::from("M1"), id);
    }

    #[test]
    fn test_entry_id_roundtrips_through_string() {
        let id = EntryId::generate();
        let parsed: EntryId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
