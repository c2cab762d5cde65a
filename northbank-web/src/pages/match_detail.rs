//! Match report: header with goal scorers, then overview, lineups and
//! statistics tabs.

use crate::components::ui::Spinner;
use crate::routes::Route;
use northbank_api::football;
use northbank_api::models::MatchReport;
use northbank_api::models::football::{Lineup, Scorer, TeamStatistics};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Lineups,
    Stats,
}

#[derive(Properties, PartialEq, Clone)]
pub struct MatchDetailPageProps {
    pub id: i64,
}

#[function_component(MatchDetailPage)]
pub fn match_detail_page(props: &MatchDetailPageProps) -> Html {
    let report = use_state(|| None::<MatchReport>);
    let loading = use_state(|| true);
    let tab = use_state(|| Tab::Overview);

    {
        let report = report.clone();
        let loading = loading.clone();
        use_effect_with(props.id, move |&id| {
            loading.set(true);
            spawn_local(async move {
                match football::get_match_report(id).await {
                    Ok(found) => report.set(Some(found)),
                    Err(err) => {
                        log::warn!("failed to fetch match report {id}: {err}");
                        report.set(None);
                    }
                }
                loading.set(false);
            });
            || {}
        });
    }

    if *loading {
        return html! {
            <div class="page page--match-detail"><Spinner /></div>
        };
    }

    let Some(report) = (*report).clone() else {
        return html! {
            <div class="not-found">
                <h2 class="not-found__title">{ "Match not found" }</h2>
                <Link<Route> to={Route::Matches} classes={classes!("not-found__link")}>
                    { "Back to Matches" }
                </Link<Route>>
            </div>
        };
    };

    let m = &report.fixture;
    let home_scorers = report.goal_scorers(m.home.id);
    let away_scorers = report.goal_scorers(m.away.id);

    let pick_tab = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(target))
    };
    let tab_button = |target: Tab, label: &str| {
        let active = *tab == target;
        let class = classes!("tabs__tab", active.then_some("tabs__tab--active"));
        html! {
            <button type="button" class={class} aria-selected={active.to_string()} onclick={pick_tab(target)}>
                { label.to_string() }
            </button>
        }
    };

    let body = match *tab {
        Tab::Overview => overview_tab(&report),
        Tab::Lineups => lineups_tab(&report.lineups),
        Tab::Stats => stats_tab(&report.statistics),
    };

    html! {
        <div class="page page--match-detail">
            <Link<Route> to={Route::Matches} classes={classes!("page__back-link")}>
                { "Back to Matches" }
            </Link<Route>>

            <header class="report-header">
                <div class="report-header__league">
                    <span>{ &m.league.name }</span>
                    { (!m.league.round.is_empty()).then(|| html! {
                        <span class="report-header__round">{ &m.league.round }</span>
                    }).unwrap_or_default() }
                </div>
                <div class="report-header__teams">
                    <div class="report-header__team">
                        <img src={m.home.logo.clone()} alt={m.home.name.clone()} />
                        <span>{ &m.home.name }</span>
                    </div>
                    <span class="report-header__score">{ m.score_display() }</span>
                    <div class="report-header__team">
                        <img src={m.away.logo.clone()} alt={m.away.name.clone()} />
                        <span>{ &m.away.name }</span>
                    </div>
                </div>
                <div class="report-header__scorers">
                    <ul class="report-header__scorer-list">{ for home_scorers.iter().map(scorer_line) }</ul>
                    <ul class="report-header__scorer-list report-header__scorer-list--away">
                        { for away_scorers.iter().map(scorer_line) }
                    </ul>
                </div>
                <div class="report-header__meta">
                    <span>{ m.kickoff_label() }</span>
                    { (!m.venue.name.is_empty()).then(|| html! {
                        <span>{ format!("{}, {}", m.venue.name, m.venue.city) }</span>
                    }).unwrap_or_default() }
                </div>
            </header>

            <nav class="tabs" role="tablist" aria-label="Match report sections">
                { tab_button(Tab::Overview, "Overview") }
                { tab_button(Tab::Lineups, "Lineups") }
                { tab_button(Tab::Stats, "Stats") }
            </nav>

            { body }
        </div>
    }
}

fn scorer_line(scorer: &Scorer) -> Html {
    let suffix = if scorer.penalty { " (pen)" } else { "" };
    html! {
        <li class="scorer">
            { format!("{} {}{suffix}", scorer.minute, scorer.name) }
        </li>
    }
}

fn overview_tab(report: &MatchReport) -> Html {
    if report.events.is_empty() {
        return html! {
            <p class="report-empty">{ "No timeline available for this match." }</p>
        };
    }
    html! {
        <ol class="timeline">
            { for report.events.iter().map(|event| html! {
                <li class="timeline__entry">
                    <span class="timeline__minute">{ event.minute_label() }</span>
                    <span class="timeline__kind">{ &event.kind }</span>
                    <span class="timeline__detail">
                        { format!(
                            "{} ({})",
                            event.player.name.as_deref().unwrap_or("Unknown"),
                            event.team.name,
                        ) }
                    </span>
                    { (!event.detail.is_empty()).then(|| html! {
                        <span class="timeline__note">{ &event.detail }</span>
                    }).unwrap_or_default() }
                </li>
            }) }
        </ol>
    }
}

fn lineups_tab(lineups: &[Lineup]) -> Html {
    if lineups.is_empty() {
        return html! {
            <p class="report-empty">{ "No lineups available for this match." }</p>
        };
    }
    html! {
        <div class="lineups">
            { for lineups.iter().map(|lineup| html! {
                <section class="lineups__team">
                    <header class="lineups__header">
                        <img src={lineup.team.logo.clone()} alt={lineup.team.name.clone()} />
                        <h3>{ &lineup.team.name }</h3>
                        <span class="lineups__formation">{ &lineup.formation }</span>
                    </header>
                    { lineup.coach.name.as_ref().map(|name| html! {
                        <p class="lineups__coach">{ format!("Coach: {name}") }</p>
                    }).unwrap_or_default() }
                    <h4>{ "Starting XI" }</h4>
                    <ul class="lineups__players">
                        { for lineup.start_xi.iter().map(|player| html! {
                            <li key={player.id}>
                                <span class="lineups__number">{ player.number }</span>
                                <span>{ &player.name }</span>
                                <span class="lineups__pos">{ &player.pos }</span>
                            </li>
                        }) }
                    </ul>
                    { (!lineup.substitutes.is_empty()).then(|| html! {
                        <>
                            <h4>{ "Substitutes" }</h4>
                            <ul class="lineups__players lineups__players--subs">
                                { for lineup.substitutes.iter().map(|player| html! {
                                    <li key={player.id}>
                                        <span class="lineups__number">{ player.number }</span>
                                        <span>{ &player.name }</span>
                                    </li>
                                }) }
                            </ul>
                        </>
                    }).unwrap_or_default() }
                </section>
            }) }
        </div>
    }
}

fn stats_tab(statistics: &[TeamStatistics]) -> Html {
    if statistics.is_empty() {
        return html! {
            <p class="report-empty">{ "No statistics available for this match." }</p>
        };
    }
    // Stat keys come from the first team's block; both sides share them.
    let mut keys: Vec<&String> = statistics[0].statistics.keys().collect();
    keys.sort();
    html! {
        <table class="stats-table">
            <thead>
                <tr>
                    <th scope="col">{ "Stat" }</th>
                    { for statistics.iter().map(|team| html! {
                        <th scope="col">{ &team.team.name }</th>
                    }) }
                </tr>
            </thead>
            <tbody>
                { for keys.iter().map(|key| html! {
                    <tr key={key.as_str()}>
                        <th scope="row">{ key.as_str() }</th>
                        { for statistics.iter().map(|team| html! {
                            <td>{ team.stat_display(key) }</td>
                        }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
