//! Landing dashboard: hero greeting plus self-contained widgets. Each
//! widget fetches on mount and degrades to its empty state on failure.

use crate::components::matches::Countdown;
use crate::components::ui::{Card, SkeletonList};
use crate::context::use_session;
use crate::routes::Route;
use northbank_api::config::{DEFAULT_LEAGUE_ID, DEFAULT_SEASON};
use northbank_api::models::{Event, Match, NewsItem, StandingRow};
use northbank_api::{events as events_api, football, news as news_api};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const PREVIEW_COUNT: u32 = 3;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <div class="page page--dashboard">
            <HeroSection />
            <div class="dashboard-grid">
                <LatestResultWidget />
                <NextMatchWidget />
                <LeagueTableWidget />
            </div>
            <NewsWidget />
            <EventsWidget />
        </div>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let session = use_session();
    let Some(current) = session.session() else {
        return Html::default();
    };
    html! {
        <section class="dashboard-hero">
            <h2 class="dashboard-hero__greeting">
                { format!("Welcome back, {}", current.user.name) }
            </h2>
            { if current.is_member() {
                html! {
                    <div class="dashboard-hero__member">
                        <span class="dashboard-hero__status">{ current.display_status().to_string() }</span>
                        <Link<Route> to={Route::MemberCard} classes={classes!("dashboard-hero__card-link")}>
                            { "View member card" }
                        </Link<Route>>
                    </div>
                }
            } else {
                html! {
                    <p class="dashboard-hero__join">
                        { "Activate your membership to unlock the digital member card." }
                    </p>
                }
            } }
        </section>
    }
}

#[function_component(NextMatchWidget)]
fn next_match_widget() -> Html {
    let fixture = use_state(|| None::<Match>);
    let loading = use_state(|| true);

    {
        let fixture = fixture.clone();
        let loading = loading.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match football::get_next_match().await {
                    Ok(found) => fixture.set(found),
                    Err(err) => log::warn!("dashboard next match fetch failed: {err}"),
                }
                loading.set(false);
            });
            || {}
        });
    }

    html! {
        <Card title="Next Match" class={classes!("widget", "widget--next-match")}>
            { if *loading {
                html! { <SkeletonList rows={2} /> }
            } else if let Some(m) = (*fixture).clone() {
                html! {
                    <div class="widget-match">
                        <div class="widget-match__teams">
                            <span>{ &m.home.name }</span>
                            <span class="widget-match__vs">{ "vs" }</span>
                            <span>{ &m.away.name }</span>
                        </div>
                        <span class="widget-match__league">{ &m.league.name }</span>
                        { m.kickoff_millis().map(|target| html! {
                            <Countdown target_millis={target} />
                        }).unwrap_or_default() }
                        <Link<Route> to={Route::Fixtures} classes={classes!("widget__link")}>
                            { "Match centre" }
                        </Link<Route>>
                    </div>
                }
            } else {
                html! { <p class="widget__empty">{ "No upcoming match scheduled." }</p> }
            } }
        </Card>
    }
}

#[function_component(LatestResultWidget)]
fn latest_result_widget() -> Html {
    let fixture = use_state(|| None::<Match>);
    let loading = use_state(|| true);

    {
        let fixture = fixture.clone();
        let loading = loading.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match football::get_last_match().await {
                    Ok(found) => fixture.set(found),
                    Err(err) => log::warn!("dashboard latest result fetch failed: {err}"),
                }
                loading.set(false);
            });
            || {}
        });
    }

    html! {
        <Card title="Latest Result" class={classes!("widget", "widget--latest-result")}>
            { if *loading {
                html! { <SkeletonList rows={2} /> }
            } else if let Some(m) = (*fixture).clone() {
                html! {
                    <div class="widget-match">
                        <div class="widget-match__teams">
                            <span>{ &m.home.name }</span>
                            <span class="widget-match__score">{ m.score_display() }</span>
                            <span>{ &m.away.name }</span>
                        </div>
                        <span class="widget-match__league">{ &m.league.name }</span>
                        <Link<Route> to={Route::MatchDetail { id: m.id }} classes={classes!("widget__link")}>
                            { "Match report" }
                        </Link<Route>>
                    </div>
                }
            } else {
                html! { <p class="widget__empty">{ "No recent result." }</p> }
            } }
        </Card>
    }
}

#[function_component(LeagueTableWidget)]
fn league_table_widget() -> Html {
    let rows = use_state(Vec::<StandingRow>::new);
    let loading = use_state(|| true);

    {
        let rows = rows.clone();
        let loading = loading.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match football::get_standings(i64::from(DEFAULT_LEAGUE_ID), DEFAULT_SEASON).await {
                    Ok(standings) => rows.set(standings.data),
                    Err(err) => log::warn!("dashboard standings fetch failed: {err}"),
                }
                loading.set(false);
            });
            || {}
        });
    }

    // A five-row slice around the table is plenty for the widget.
    let preview: Vec<StandingRow> = rows.iter().take(5).cloned().collect();

    html! {
        <Card title="League Table" class={classes!("widget", "widget--table")}>
            { if *loading {
                html! { <SkeletonList rows={5} /> }
            } else if preview.is_empty() {
                html! { <p class="widget__empty">{ "Standings unavailable." }</p> }
            } else {
                html! {
                    <>
                        <table class="widget-table">
                            <tbody>
                                { for preview.iter().map(|row| html! {
                                    <tr key={row.team.id}>
                                        <td class="widget-table__rank">{ row.rank }</td>
                                        <td class="widget-table__team">{ &row.team.name }</td>
                                        <td class="widget-table__points">{ row.points }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                        <Link<Route> to={Route::Standings} classes={classes!("widget__link")}>
                            { "Full standings" }
                        </Link<Route>>
                    </>
                }
            } }
        </Card>
    }
}

#[function_component(NewsWidget)]
fn news_widget() -> Html {
    let items = use_state(Vec::<NewsItem>::new);
    let loading = use_state(|| true);

    {
        let items = items.clone();
        let loading = loading.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match news_api::get_news(1, PREVIEW_COUNT).await {
                    Ok(page) => items.set(page.data),
                    Err(err) => log::warn!("dashboard news fetch failed: {err}"),
                }
                loading.set(false);
            });
            || {}
        });
    }

    html! {
        <Card title="Latest News" class={classes!("widget", "widget--news")}>
            { if *loading {
                html! { <SkeletonList rows={3} /> }
            } else if items.is_empty() {
                html! { <p class="widget__empty">{ "No news yet." }</p> }
            } else {
                html! {
                    <>
                        <ul class="widget-list">
                            { for items.iter().map(|item| html! {
                                <li key={item.id} class="widget-list__item">
                                    <Link<Route> to={Route::NewsDetail { id: item.id }}>
                                        { &item.title }
                                    </Link<Route>>
                                    <span class="widget-list__date">{ item.published_on() }</span>
                                </li>
                            }) }
                        </ul>
                        <Link<Route> to={Route::News} classes={classes!("widget__link")}>
                            { "All news" }
                        </Link<Route>>
                    </>
                }
            } }
        </Card>
    }
}

#[function_component(EventsWidget)]
fn events_widget() -> Html {
    let items = use_state(Vec::<Event>::new);
    let loading = use_state(|| true);

    {
        let items = items.clone();
        let loading = loading.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match events_api::get_events(1, PREVIEW_COUNT, None).await {
                    Ok(page) => items.set(page.data),
                    Err(err) => log::warn!("dashboard events fetch failed: {err}"),
                }
                loading.set(false);
            });
            || {}
        });
    }

    html! {
        <Card title="Upcoming Events" class={classes!("widget", "widget--events")}>
            { if *loading {
                html! { <SkeletonList rows={3} /> }
            } else if items.is_empty() {
                html! { <p class="widget__empty">{ "No events planned right now." }</p> }
            } else {
                html! {
                    <>
                        <ul class="widget-list">
                            { for items.iter().map(|event| html! {
                                <li key={event.id} class="widget-list__item">
                                    <Link<Route> to={Route::EventDetail { id: event.id }}>
                                        { &event.title }
                                    </Link<Route>>
                                    <span class="widget-list__date">{ event.starts_at() }</span>
                                </li>
                            }) }
                        </ul>
                        <Link<Route> to={Route::Events} classes={classes!("widget__link")}>
                            { "All events" }
                        </Link<Route>>
                    </>
                }
            } }
        </Card>
    }
}
