//! Matches, standings, competitions and seasons, as the football feed
//! projects them.

use crate::models::{format_datetime, timestamp_millis};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub goals: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub round: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatus {
    #[serde(default)]
    pub long: String,
    #[serde(default)]
    pub short: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfScore {
    #[serde(default)]
    pub home: i32,
    #[serde(default)]
    pub away: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(default)]
    pub home: i32,
    #[serde(default)]
    pub away: i32,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub halftime: HalfScore,
}

/// Club-perspective summary the feed attaches to each match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubSummary {
    #[serde(default)]
    pub is_home: bool,
    #[serde(default)]
    pub opponent: String,
    #[serde(default)]
    pub opponent_logo: String,
    #[serde(default)]
    pub venue_type: String,
    #[serde(default)]
    pub goals_for: Option<i32>,
    #[serde(default)]
    pub goals_against: Option<i32>,
    #[serde(default)]
    pub result: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub venue: Venue,
    #[serde(default)]
    pub league: League,
    pub home: Team,
    pub away: Team,
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub score: Option<MatchScore>,
    /// The feed names this block after the supported team.
    #[serde(default, rename = "arsenal")]
    pub club: Option<ClubSummary>,
}

impl Match {
    #[must_use]
    pub fn kickoff_label(&self) -> String {
        format_datetime(&self.date)
    }

    #[must_use]
    pub fn kickoff_millis(&self) -> Option<i64> {
        timestamp_millis(&self.date)
    }

    #[must_use]
    pub fn is_home_for(&self, team: &str) -> bool {
        contains_ignore_case(&self.home.name, team)
    }

    #[must_use]
    pub fn is_away_for(&self, team: &str) -> bool {
        contains_ignore_case(&self.away.name, team)
    }

    /// `"2 - 1"` from the score block, `"vs"` when unplayed.
    #[must_use]
    pub fn score_display(&self) -> String {
        match &self.score {
            Some(score) if !score.display.is_empty() => score.display.clone(),
            Some(score) => format!("{} - {}", score.home, score.away),
            None => "vs".to_string(),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Venue-side filter the fixtures page applies after fetching. Pagination
/// metadata still describes the unfiltered server page, so filtered views
/// can undercount; the backend does not support this filter yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VenueFilter {
    #[default]
    All,
    Home,
    Away,
}

impl VenueFilter {
    #[must_use]
    pub fn accepts(self, m: &Match, team: &str) -> bool {
        match self {
            VenueFilter::All => true,
            VenueFilter::Home => m.is_home_for(team),
            VenueFilter::Away => m.is_away_for(team),
        }
    }
}

// --- Match report ---

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventActor {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventClock {
    #[serde(default)]
    pub elapsed: i32,
    #[serde(default)]
    pub extra: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    #[serde(default)]
    pub time: EventClock,
    pub team: Team,
    #[serde(default)]
    pub player: EventActor,
    #[serde(default)]
    pub assist: EventActor,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub comments: Option<String>,
}

impl MatchEvent {
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.kind == "Goal"
    }

    /// `"45+2'"` style minute label.
    #[must_use]
    pub fn minute_label(&self) -> String {
        match self.time.extra {
            Some(extra) if extra > 0 => format!("{}+{extra}'", self.time.elapsed),
            _ => format!("{}'", self.time.elapsed),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub number: i32,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub grid: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub team: Team,
    #[serde(default)]
    pub formation: String,
    #[serde(default)]
    pub coach: Coach,
    #[serde(rename = "startXI", default)]
    pub start_xi: Vec<Player>,
    #[serde(default)]
    pub substitutes: Vec<Player>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamStatistics {
    pub team: Team,
    #[serde(default)]
    pub statistics: HashMap<String, serde_json::Value>,
}

impl TeamStatistics {
    /// Numbers and strings render as-is; anything else is blank.
    #[must_use]
    pub fn stat_display(&self, key: &str) -> String {
        match self.statistics.get(key) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

/// A played match plus its timeline, lineups and statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(rename = "match")]
    pub fixture: Match,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
    #[serde(default)]
    pub lineups: Vec<Lineup>,
    #[serde(default)]
    pub statistics: Vec<TeamStatistics>,
}

/// One scoring entry for the report header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scorer {
    pub name: String,
    pub minute: String,
    pub penalty: bool,
}

impl MatchReport {
    /// Goal scorers for one side, in timeline order.
    #[must_use]
    pub fn goal_scorers(&self, team_id: i64) -> Vec<Scorer> {
        self.events
            .iter()
            .filter(|e| e.is_goal() && e.team.id == team_id)
            .map(|e| Scorer {
                name: e.player.name.clone().unwrap_or_default(),
                minute: e.minute_label(),
                penalty: e.detail == "Penalty",
            })
            .collect()
    }
}

// --- Standings ---

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRecord {
    #[serde(default)]
    pub played: i32,
    #[serde(default)]
    pub won: i32,
    #[serde(default)]
    pub drawn: i32,
    #[serde(default)]
    pub lost: i32,
    #[serde(default)]
    pub goals_for: i32,
    #[serde(default)]
    pub goals_against: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub rank: i32,
    pub team: Team,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub goals_diff: i32,
    #[serde(default)]
    pub form: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stats: SplitRecord,
    #[serde(default)]
    pub home: Option<SplitRecord>,
    #[serde(default)]
    pub away: Option<SplitRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionSeason {
    #[serde(default)]
    pub year: u16,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub country: Country,
    #[serde(default)]
    pub season: CompetitionSeason,
    #[serde(default)]
    pub match_count: u32,
}

impl Competition {
    #[must_use]
    pub fn is_cup(&self) -> bool {
        self.kind == "Cup"
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingsGroup {
    pub name: String,
    #[serde(default)]
    pub standings: Vec<StandingRow>,
}

/// One competition's standings block from the aggregate endpoint: league
/// tables carry `standings`, cups may carry `groups` instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompetitionStanding {
    pub competition: Competition,
    #[serde(default)]
    pub team_position: Option<StandingRow>,
    #[serde(default)]
    pub standings: Option<Vec<StandingRow>>,
    #[serde(default)]
    pub groups: Option<Vec<StandingsGroup>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub year: u16,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub competitions_count: u32,
    #[serde(default)]
    pub matches_count: u32,
    #[serde(default)]
    pub is_current: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_between(home: &str, away: &str) -> Match {
        serde_json::from_value(serde_json::json!({
            "id": 11,
            "date": "2026-04-18T16:30:00Z",
            "home": { "id": 42, "name": home, "logo": "" },
            "away": { "id": 47, "name": away, "logo": "" }
        }))
        .unwrap()
    }

    #[test]
    fn venue_filter_matches_by_side() {
        let home_game = match_between("Arsenal", "Chelsea");
        let away_game = match_between("Everton", "Arsenal FC");
        assert!(VenueFilter::Home.accepts(&home_game, "arsenal"));
        assert!(!VenueFilter::Home.accepts(&away_game, "arsenal"));
        assert!(VenueFilter::Away.accepts(&away_game, "arsenal"));
        assert!(VenueFilter::All.accepts(&away_game, "arsenal"));
    }

    #[test]
    fn club_block_deserializes_from_feed_name() {
        let m: Match = serde_json::from_value(serde_json::json!({
            "id": 3,
            "home": { "id": 42, "name": "Arsenal", "logo": "" },
            "away": { "id": 50, "name": "City", "logo": "" },
            "arsenal": { "is_home": true, "opponent": "City", "venue_type": "H", "result": "W" }
        }))
        .unwrap();
        let club = m.club.expect("club summary");
        assert!(club.is_home);
        assert_eq!(club.result.as_deref(), Some("W"));
    }

    #[test]
    fn goal_scorers_filter_team_and_mark_penalties() {
        let report: MatchReport = serde_json::from_value(serde_json::json!({
            "match": {
                "id": 9,
                "home": { "id": 42, "name": "Arsenal", "logo": "" },
                "away": { "id": 47, "name": "Spurs", "logo": "" }
            },
            "events": [
                {
                    "time": { "elapsed": 23, "extra": null },
                    "team": { "id": 42, "name": "Arsenal", "logo": "" },
                    "player": { "id": 1, "name": "Saka" },
                    "assist": { "id": null, "name": null },
                    "type": "Goal", "detail": "Normal Goal", "comments": null
                },
                {
                    "time": { "elapsed": 45, "extra": 2 },
                    "team": { "id": 42, "name": "Arsenal", "logo": "" },
                    "player": { "id": 2, "name": "Ødegaard" },
                    "assist": { "id": null, "name": null },
                    "type": "Goal", "detail": "Penalty", "comments": null
                },
                {
                    "time": { "elapsed": 60, "extra": null },
                    "team": { "id": 47, "name": "Spurs", "logo": "" },
                    "player": { "id": 3, "name": "Son" },
                    "assist": { "id": null, "name": null },
                    "type": "Card", "detail": "Yellow Card", "comments": null
                }
            ]
        }))
        .unwrap();
        let scorers = report.goal_scorers(42);
        assert_eq!(scorers.len(), 2);
        assert_eq!(scorers[0].minute, "23'");
        assert!(!scorers[0].penalty);
        assert_eq!(scorers[1].minute, "45+2'");
        assert!(scorers[1].penalty);
        assert!(report.goal_scorers(47).is_empty());
    }

    #[test]
    fn score_display_prefers_feed_string() {
        let mut m = match_between("Arsenal", "Chelsea");
        assert_eq!(m.score_display(), "vs");
        m.score = Some(MatchScore {
            home: 2,
            away: 1,
            display: String::new(),
            halftime: HalfScore::default(),
        });
        assert_eq!(m.score_display(), "2 - 1");
    }
}
