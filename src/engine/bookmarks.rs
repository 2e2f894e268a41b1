use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::FixtureId;

/// Per-fixture bookmark flags. A missing key means not bookmarked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkSet(pub BTreeMap<FixtureId, bool>);

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_bookmarked(&self, fixture_id: &FixtureId) -> bool {
        self.0.get(fixture_id).copied().unwrap_or(false)
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self, fixture_id: &FixtureId) -> bool {
        let flag = self.0.entry(fixture_id.clone()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn set(&mut self, fixture_id: &FixtureId, bookmarked: bool) {
        self.0.insert(fixture_id.clone(), bookmarked);
    }

    pub fn bookmarked_ids(&self) -> impl Iterator<Item = &FixtureId> {
        self.0.iter().filter(|(_, flag)| **flag).map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_false() {
        let bookmarks = BookmarkSet::new();
        assert!(!bookmarks.is_bookmarked(&FixtureId::new("M1")));
    }

    #[test]
    fn test_toggle_flips() {
        let mut bookmarks = BookmarkSet::new();
        let m1 = FixtureId::new("M1");
        assert!(bookmarks.toggle(&m1));
        assert!(bookmarks.is_bookmarked(&m1));
        assert!(!bookmarks.toggle(&m1));
        assert!(!bookmarks.is_bookmarked(&m1));
    }

    #[test]
    fn test_bookmarked_ids_skips_false_flags() {
        let mut bookmarks = BookmarkSet::new();
        bookmarks.set(&FixtureId::new("M1"), true);
        bookmarks.set(&FixtureId::new("M2"), false);
        bookmarks.set(&FixtureId::new("M3"), true);

        let ids: Vec<&str> = bookmarks.bookmarked_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["M1", "M3"]);
    }

    #[test]
    fn test_json_shape_is_flat_map() {
        let mut bookmarks = BookmarkSet::new();
        bookmarks.set(&FixtureId::new("M1"), true);
        let json = serde_json::to_string(&bookmarks).unwrap();
        assert_eq!(json, r#"{"M1":true}"#);
    }
}
