//! Server-side render checks for presentational components.

use futures::executor::block_on;
use northbank_api::models::{Event, Match, NewsItem, StandingRow, StandingsGroup};
use northbank_web::components::events::event_card::{EventCard, EventCardProps};
use northbank_web::components::matches::match_card::{MatchCard, MatchCardProps};
use northbank_web::components::member::member_card::{MemberCard, MemberCardProps};
use northbank_web::components::news::news_card::{NewsCard, NewsCardProps};
use northbank_web::components::standings::cup_groups::{CupGroups, CupGroupsProps};
use northbank_web::components::standings::standings_table::{StandingsTable, StandingsTableProps};
use northbank_web::components::ui::empty_state::{EmptyState, EmptyStateProps};
use yew::prelude::*;
use yew::{AttrValue, Callback, Classes, LocalServerRenderer};
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

/// Router shell so components containing `Link` render outside a browser.
#[derive(Properties, PartialEq)]
struct RoutedProps {
    content: Html,
}

#[function_component(Routed)]
fn routed(props: &RoutedProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router history={history}>
            { props.content.clone() }
        </Router>
    }
}

fn render_routed(content: Html) -> String {
    block_on(LocalServerRenderer::<Routed>::with_props(RoutedProps { content }).render())
}

fn news_item() -> NewsItem {
    serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Cup run continues",
        "excerpt": "A night to remember at the Emirates.",
        "created_at": "2026-01-15T08:00:00Z",
        "author": { "id": 1, "name": "Club Media" },
        "categories": [{ "id": 2, "name": "Matchday", "slug": "matchday" }]
    }))
    .unwrap()
}

fn played_match() -> Match {
    serde_json::from_value(serde_json::json!({
        "id": 31,
        "date": "2026-02-01T17:30:00Z",
        "venue": { "name": "Emirates Stadium", "city": "London" },
        "league": { "id": 39, "name": "Premier League", "round": "Round 24", "logo": "" },
        "home": { "id": 42, "name": "Arsenal", "logo": "" },
        "away": { "id": 47, "name": "Spurs", "logo": "" },
        "score": { "home": 2, "away": 1, "display": "2 - 1", "halftime": { "home": 1, "away": 0 } }
    }))
    .unwrap()
}

fn club_event(member_only: bool) -> Event {
    serde_json::from_value(serde_json::json!({
        "id": 5,
        "title": "Season kickoff watch party",
        "location": "Clubhouse, Jakarta",
        "fee": "50000.00",
        "start_datetime": "2026-08-09T19:00:00Z",
        "member_only": member_only,
        "category": { "id": 1, "name": "Watch Party", "slug": "watch-party" }
    }))
    .unwrap()
}

fn standing_row(rank: i32, name: &str, points: i32) -> StandingRow {
    serde_json::from_value(serde_json::json!({
        "rank": rank,
        "team": { "id": rank, "name": name, "logo": "" },
        "points": points,
        "goals_diff": 10,
        "form": "WWDWL",
        "stats": { "played": 24, "won": 16, "drawn": 5, "lost": 3, "goals_for": 52, "goals_against": 20 }
    }))
    .unwrap()
}

#[test]
fn news_card_renders_title_category_and_meta() {
    let props = NewsCardProps { item: news_item() };
    let html = render_routed(yew::html! { <NewsCard ..props /> });
    assert!(html.contains("Cup run continues"));
    assert!(html.contains("Matchday"));
    assert!(html.contains("Jan 15, 2026"));
    assert!(html.contains("Club Media"));
}

#[test]
fn match_card_links_only_for_played_matches() {
    let played_props = MatchCardProps {
        fixture: played_match(),
        is_fixture: false,
    };
    let played = render_routed(yew::html! { <MatchCard ..played_props /> });
    assert!(played.contains("2 - 1"));
    assert!(played.contains("/matches/31"));

    let fixture_props = MatchCardProps {
        fixture: played_match(),
        is_fixture: true,
    };
    let fixture = render_routed(yew::html! { <MatchCard ..fixture_props /> });
    assert!(!fixture.contains("/matches/31"));
}

#[test]
fn event_card_shows_fee_and_member_badge() {
    let member_props = EventCardProps {
        event: club_event(true),
    };
    let html = render_routed(yew::html! { <EventCard ..member_props /> });
    assert!(html.contains("Season kickoff watch party"));
    assert!(html.contains("Rp 50.000"));
    assert!(html.contains("Members only"));
    assert!(html.contains("Clubhouse, Jakarta"));

    let open_props = EventCardProps {
        event: club_event(false),
    };
    let open_event = render_routed(yew::html! { <EventCard ..open_props /> });
    assert!(!open_event.contains("Members only"));
}

#[test]
fn standings_table_highlights_the_supported_team() {
    let props = StandingsTableProps {
        standings: vec![
            standing_row(1, "Arsenal", 57),
            standing_row(2, "Manchester City", 54),
        ],
        class: Classes::new(),
    };
    let html = block_on(LocalServerRenderer::<StandingsTable>::with_props(props).render());
    assert!(html.contains("standings__row--ours"));
    assert!(html.contains("Arsenal"));
    assert!(html.contains("57"));
    assert!(html.contains("WWDWL"));
}

#[test]
fn cup_groups_render_one_table_per_group() {
    let groups: Vec<StandingsGroup> = vec![
        StandingsGroup {
            name: "Group A".to_string(),
            standings: vec![standing_row(1, "Arsenal", 9)],
        },
        StandingsGroup {
            name: "Group B".to_string(),
            standings: vec![standing_row(1, "Porto", 7)],
        },
    ];
    let html = block_on(
        LocalServerRenderer::<CupGroups>::with_props(CupGroupsProps { groups }).render(),
    );
    assert!(html.contains("Group A"));
    assert!(html.contains("Group B"));
    assert!(html.contains("Porto"));
}

#[test]
fn member_card_carries_identity_and_qr_payload() {
    let props = MemberCardProps {
        name: AttrValue::from("Ian Wright"),
        member_number: AttrValue::from("8092124"),
        status: AttrValue::from("active"),
        qr_payload: AttrValue::from("http://localhost:8000/member/verify/8092124"),
    };
    let html = block_on(LocalServerRenderer::<MemberCard>::with_props(props).render());
    assert!(html.contains("Ian Wright"));
    assert!(html.contains("8092124"));
    assert!(html.contains("active"));
    assert!(html.contains("/member/verify/8092124"));
    assert!(html.contains("Entry Pass"));
}

#[test]
fn empty_state_offers_the_action_when_wired() {
    let props = EmptyStateProps {
        title: AttrValue::from("No events found"),
        message: Some(AttrValue::from("Try a different filter")),
        action_label: Some(AttrValue::from("View all events")),
        on_action: Some(Callback::noop()),
    };
    let html = block_on(LocalServerRenderer::<EmptyState>::with_props(props).render());
    assert!(html.contains("No events found"));
    assert!(html.contains("Try a different filter"));
    assert!(html.contains("View all events"));

    let bare = EmptyStateProps {
        title: AttrValue::from("Nothing here"),
        message: None,
        action_label: None,
        on_action: None,
    };
    let html = block_on(LocalServerRenderer::<EmptyState>::with_props(bare).render());
    assert!(!html.contains("empty-state__action"));
}
