//! Match results: latest-match hero, season and competition filters,
//! load-more list.

use crate::components::football::SeasonSelector;
use crate::components::matches::{CompetitionFilter, LatestMatchHero, MatchList};
use crate::components::ui::{EmptyState, SkeletonList};
use crate::state::{Paged, PagedMsg, RequestSeq};
use northbank_api::config::{DEFAULT_SEASON, PAGE_SIZE};
use northbank_api::football;
use northbank_api::models::{Competition, Match, Season};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(MatchesPage)]
pub fn matches_page() -> Html {
    let results = use_reducer(Paged::<Match>::default);
    let competitions = use_state(Vec::<Competition>::new);
    let seasons = use_state(Vec::<Season>::new);
    let selected_league = use_state(|| None::<i64>);
    let season = use_state(|| DEFAULT_SEASON);
    let latest = use_state(|| None::<Match>);
    let seq = use_mut_ref(RequestSeq::default);

    {
        let seasons = seasons.clone();
        let latest = latest.clone();
        use_effect_with((), move |()| {
            {
                let seasons = seasons.clone();
                spawn_local(async move {
                    match football::get_seasons().await {
                        Ok(list) => seasons.set(list),
                        Err(err) => log::warn!("failed to load seasons: {err}"),
                    }
                });
            }
            spawn_local(async move {
                match football::get_last_match().await {
                    Ok(found) => latest.set(found),
                    Err(err) => log::warn!("failed to fetch latest match: {err}"),
                }
            });
            || {}
        });
    }

    // Competitions follow the season; a season change also clears the
    // league filter.
    {
        let competitions = competitions.clone();
        let selected_league = selected_league.clone();
        use_effect_with(*season, move |&year| {
            selected_league.set(None);
            spawn_local(async move {
                match football::get_competitions(year).await {
                    Ok(list) => competitions.set(list),
                    Err(err) => log::warn!("failed to load competitions: {err}"),
                }
            });
            || {}
        });
    }

    {
        let results = results.clone();
        let seq = seq.clone();
        use_effect_with((*selected_league, *season), move |&(league, year)| {
            results.dispatch(PagedMsg::Reset);
            results.dispatch(PagedMsg::Started);
            let token = seq.borrow().issue();
            spawn_local(async move {
                let fetched = football::get_results(1, PAGE_SIZE, league, year).await;
                if !seq.borrow().is_current(token) {
                    log::debug!("discarding superseded results response");
                    return;
                }
                match fetched {
                    Ok(page) => results.dispatch(PagedMsg::Loaded {
                        page: 1,
                        has_more: page.has_more(),
                        items: page.data,
                        replace: true,
                    }),
                    Err(err) => {
                        log::warn!("failed to fetch results: {err}");
                        results.dispatch(PagedMsg::Failed);
                    }
                }
            });
            || {}
        });
    }

    let load_more = {
        let results = results.clone();
        let selected_league = selected_league.clone();
        let season = season.clone();
        let seq = seq.clone();
        Callback::from(move |_| {
            if results.busy || !results.has_more {
                return;
            }
            let page = results.next_page();
            let league = *selected_league;
            let year = *season;
            results.dispatch(PagedMsg::Started);
            let token = seq.borrow().issue();
            let results = results.clone();
            let seq = seq.clone();
            spawn_local(async move {
                let fetched = football::get_results(page, PAGE_SIZE, league, year).await;
                if !seq.borrow().is_current(token) {
                    return;
                }
                match fetched {
                    Ok(response) => results.dispatch(PagedMsg::Loaded {
                        page,
                        has_more: response.has_more(),
                        items: response.data,
                        replace: false,
                    }),
                    Err(err) => {
                        log::warn!("failed to fetch results page {page}: {err}");
                        results.dispatch(PagedMsg::Failed);
                    }
                }
            });
        })
    };

    // Toggling the active chip clears the filter.
    let on_league = {
        let selected_league = selected_league.clone();
        Callback::from(move |id: Option<i64>| {
            if id == *selected_league {
                selected_league.set(None);
            } else {
                selected_league.set(id);
            }
        })
    };
    let on_season = {
        let season = season.clone();
        Callback::from(move |year: u16| season.set(year))
    };
    let clear_filters = {
        let selected_league = selected_league.clone();
        let season = season.clone();
        Callback::from(move |()| {
            selected_league.set(None);
            season.set(DEFAULT_SEASON);
        })
    };

    let hero_id = latest.as_ref().map(|m| m.id);
    let visible: Vec<Match> = results
        .items
        .iter()
        .filter(|m| Some(m.id) != hero_id)
        .cloned()
        .collect();

    html! {
        <div class="page page--matches">
            { latest.as_ref().map(|m| html! {
                <LatestMatchHero fixture={m.clone()} />
            }).unwrap_or_default() }

            <header class="page__header">
                <h2 class="page__title">{ "Match Results" }</h2>
                <SeasonSelector
                    seasons={(*seasons).clone()}
                    selected={*season}
                    on_change={on_season}
                />
            </header>

            <CompetitionFilter
                competitions={(*competitions).clone()}
                selected={*selected_league}
                on_select={on_league}
            />

            { if results.initial_loading() {
                html! { <SkeletonList rows={6} /> }
            } else if visible.is_empty() {
                html! {
                    <EmptyState
                        title="No matches found"
                        message="We couldn't find any match results for the selected criteria."
                        action_label="Clear filters"
                        on_action={clear_filters}
                    />
                }
            } else {
                html! {
                    <>
                        <MatchList matches={visible} />
                        { results.has_more.then(|| html! {
                            <div class="load-more">
                                <button
                                    type="button"
                                    class="load-more__button"
                                    disabled={results.busy}
                                    onclick={load_more.clone()}
                                >
                                    { if results.busy { "Loading..." } else { "Load More Matches" } }
                                </button>
                            </div>
                        }).unwrap_or_default() }
                    </>
                }
            } }
        </div>
    }
}
