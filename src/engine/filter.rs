//! Team, venue and bookmark filtering over the schedule.

use std::collections::{BTreeSet, HashSet};

use super::BookmarkSet;
use crate::domain::Fixture;

/// Current filter selection. Empty team or venue sets mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub teams: BTreeSet<String>,
    pub venues: BTreeSet<String>,
    pub bookmarked_only: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `team` if unselected, otherwise deselect it.
    pub fn toggle_team(&mut self, team: &str) {
        if !self.teams.remove(team) {
            self.teams.insert(team.to_string());
        }
    }

    /// Select `venue` if unselected, otherwise deselect it.
    pub fn toggle_venue(&mut self, venue: &str) {
        if !self.venues.remove(venue) {
            self.venues.insert(venue.to_string());
        }
    }

    pub fn clear_teams(&mut self) {
        self.teams.clear();
    }

    pub fn clear_venues(&mut self) {
        self.venues.clear();
    }

    pub fn set_bookmarked_only(&mut self, bookmarked_only: bool) {
        self.bookmarked_only = bookmarked_only;
    }

    /// True when every fixture passes.
    pub fn is_unrestricted(&self) -> bool {
        self.teams.is_empty() && self.venues.is_empty() && !self.bookmarked_only
    }

    pub fn matches(&self, fixture: &Fixture, bookmarks: &BookmarkSet) -> bool {
        let team_ok = self.teams.is_empty()
            || self.teams.contains(&fixture.home)
            || self.teams.contains(&fixture.away);
        let venue_ok = self.venues.is_empty() || self.venues.contains(&fixture.venue);
        let bookmark_ok = !self.bookmarked_only || bookmarks.is_bookmarked(&fixture.id);

        team_ok && venue_ok && bookmark_ok
    }
}

/// Fixtures passing `filter`, in schedule order.
pub fn filter_fixtures<'a>(
    fixtures: &'a [Fixture],
    filter: &FilterState,
    bookmarks: &BookmarkSet,
) -> Vec<&'a Fixture> {
    fixtures
        .iter()
        .filter(|f| filter.matches(f, bookmarks))
        .collect()
}

/// Distinct venues in first-occurrence order.
pub fn distinct_venues(fixtures: &[Fixture]) -> Vec<&str> {
    first_occurrences(fixtures.iter().map(|f| f.venue.as_str()))
}

/// Distinct team names (home then away) in first-occurrence order.
pub fn distinct_teams(fixtures: &[Fixture]) -> Vec<&str> {
    first_occurrences(
        fixtures
            .iter()
            .flat_map(|f| [f.home.as_str(), f.away.as_str()]),
    )
}

fn first_occurrences<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.filter(|name| seen.insert(*name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixtureId;
    use chrono::{NaiveDate, NaiveTime};

    fn fixture(id: &str, home: &str, away: &str, venue: &str) -> Fixture {
        Fixture {
            id: FixtureId::new(id),
            home: home.to_string(),
            away: away.to_string(),
            venue: venue.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 22).unwrap(),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            weekday: "Sat".to_string(),
        }
    }

    fn schedule() -> Vec<Fixture> {
        vec![
            fixture("M1", "KKR", "RCB", "Eden Gardens"),
            fixture("M2", "SRH", "RR", "Hyderabad"),
            fixture("M3", "CSK", "MI", "Chepauk"),
            fixture("M4", "RCB", "CSK", "Chinnaswamy"),
            fixture("M5", "KKR", "SRH", "Eden Gardens"),
        ]
    }

    fn ids(fixtures: &[&Fixture]) -> Vec<String> {
        fixtures.iter().map(|f| f.id.to_string()).collect()
    }

    #[test]
    fn test_unrestricted_returns_input_in_order() {
        let fixtures = schedule();
        let filter = FilterState::new();
        assert!(filter.is_unrestricted());

        let out = filter_fixtures(&fixtures, &filter, &BookmarkSet::new());
        assert_eq!(ids(&out), vec!["M1", "M2", "M3", "M4", "M5"]);
    }

    #[test]
    fn test_team_filter_matches_home_or_away() {
        let fixtures = schedule();
        let mut filter = FilterState::new();
        filter.toggle_team("RCB");

        let out = filter_fixtures(&fixtures, &filter, &BookmarkSet::new());
        assert_eq!(ids(&out), vec!["M1", "M4"]);

        filter.toggle_team("MI");
        let out = filter_fixtures(&fixtures, &filter, &BookmarkSet::new());
        assert_eq!(ids(&out), vec!["M1", "M3", "M4"]);
    }

    #[test]
    fn test_team_and_venue_are_conjunctive() {
        let fixtures = schedule();
        let mut filter = FilterState::new();
        filter.toggle_team("KKR");
        filter.toggle_venue("Eden Gardens");
        filter.toggle_venue("Chepauk");

        let out = filter_fixtures(&fixtures, &filter, &BookmarkSet::new());
        assert_eq!(ids(&out), vec!["M1", "M5"]);
    }

    #[test]
    fn test_bookmarked_only() {
        let fixtures = schedule();
        let mut bookmarks = BookmarkSet::new();
        bookmarks.set(&FixtureId::new("M4"), true);
        bookmarks.set(&FixtureId::new("M2"), true);
        bookmarks.set(&FixtureId::new("M3"), false);

        let mut filter = FilterState::new();
        filter.set_bookmarked_only(true);

        let out = filter_fixtures(&fixtures, &filter, &bookmarks);
        assert_eq!(ids(&out), vec!["M2", "M4"]);
    }

    #[test]
    fn test_toggle_twice_clears_selection() {
        let mut filter = FilterState::new();
        filter.toggle_team("CSK");
        filter.toggle_team("CSK");
        assert!(filter.teams.is_empty());

        filter.toggle_venue("Chepauk");
        filter.clear_venues();
        assert!(filter.is_unrestricted());
    }

    #[test]
    fn test_distinct_venues_first_occurrence() {
        let fixtures = schedule();
        assert_eq!(
            distinct_venues(&fixtures),
            vec!["Eden Gardens", "Hyderabad", "Chepauk", "Chinnaswamy"]
        );
    }

    #[test]
    fn test_distinct_teams_first_occurrence() {
        let fixtures = schedule();
        assert_eq!(
            distinct_teams(&fixtures),
            vec!["KKR", "RCB", "SRH", "RR", "CSK", "MI"]
        );
    }
}
