//! Football feed endpoints: fixtures, results, reports, standings.

use crate::error::ApiError;
use crate::http;
use crate::models::football::{
    Competition, CompetitionStanding, Match, MatchReport, Season, StandingRow,
};
use crate::models::paging::{Paginated, Wrapped};
use serde::Deserialize;

pub async fn get_fixtures(page: u32, per_page: u32) -> Result<Paginated<Match>, ApiError> {
    http::fetch_json(
        http::get("/api/football/fixtures").query([
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ]),
    )
    .await
}

/// Nearest upcoming match, if the feed has one scheduled.
pub async fn get_next_match() -> Result<Option<Match>, ApiError> {
    let envelope: Wrapped<Option<Match>> =
        http::fetch_json(http::get("/api/football/fixtures/next")).await?;
    Ok(envelope.data)
}

/// Played results, optionally narrowed to one competition and season.
pub async fn get_results(
    page: u32,
    per_page: u32,
    league: Option<i64>,
    season: u16,
) -> Result<Paginated<Match>, ApiError> {
    let mut query = vec![
        ("page", page.to_string()),
        ("per_page", per_page.to_string()),
        ("season", season.to_string()),
    ];
    if let Some(league) = league {
        query.push(("league", league.to_string()));
    }
    http::fetch_json(http::get("/api/football/results").query(query)).await
}

/// Most recently played match.
pub async fn get_last_match() -> Result<Option<Match>, ApiError> {
    let envelope: Wrapped<Option<Match>> =
        http::fetch_json(http::get("/api/football/results/last")).await?;
    Ok(envelope.data)
}

/// Full report (timeline, lineups, statistics) for a played match.
pub async fn get_match_report(id: i64) -> Result<MatchReport, ApiError> {
    let envelope: Wrapped<MatchReport> =
        http::fetch_json(http::get(&format!("/api/football/results/{id}/report"))).await?;
    Ok(envelope.data)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LeagueStandingsMeta {
    #[serde(default)]
    pub season: u16,
    #[serde(default)]
    pub league_id: i64,
    #[serde(default)]
    pub league_name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LeagueStandings {
    pub data: Vec<StandingRow>,
    #[serde(default)]
    pub meta: LeagueStandingsMeta,
}

/// Single-league table, used by the dashboard snippet.
pub async fn get_standings(league: i64, season: u16) -> Result<LeagueStandings, ApiError> {
    http::fetch_json(
        http::get("/api/football/standings").query([
            ("league", league.to_string()),
            ("season", season.to_string()),
        ]),
    )
    .await
}

/// Every competition's standings for a season, league and cup alike.
pub async fn get_all_standings(season: u16) -> Result<Vec<CompetitionStanding>, ApiError> {
    let envelope: Wrapped<Vec<CompetitionStanding>> = http::fetch_json(
        http::get("/api/football/standings/all").query([("season", season.to_string())]),
    )
    .await?;
    Ok(envelope.data)
}

pub async fn get_competitions(season: u16) -> Result<Vec<Competition>, ApiError> {
    let envelope: Wrapped<Vec<Competition>> = http::fetch_json(
        http::get("/api/football/competitions").query([("season", season.to_string())]),
    )
    .await?;
    Ok(envelope.data)
}

pub async fn get_seasons() -> Result<Vec<Season>, ApiError> {
    let envelope: Wrapped<Vec<Season>> =
        http::fetch_json(http::get("/api/football/seasons")).await?;
    Ok(envelope.data)
}
