//! Upcoming fixtures: next-match banner, home/away filter, load-more list.
//!
//! The venue filter runs client-side on each fetched page while the
//! pagination metadata still describes the unfiltered server page, so a
//! filtered view can show fewer than a full page per fetch. The backend
//! does not take this filter yet.

use crate::components::matches::{MatchList, NextMatchBanner};
use crate::components::ui::{EmptyState, SkeletonList, Spinner};
use crate::state::{Paged, PagedMsg, RequestSeq};
use northbank_api::config::{PAGE_SIZE, TEAM_NAME};
use northbank_api::football;
use northbank_api::models::Match;
use northbank_api::models::football::VenueFilter;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(FixturesPage)]
pub fn fixtures_page() -> Html {
    let fixtures = use_reducer(Paged::<Match>::default);
    let filter = use_state(VenueFilter::default);
    let next_match = use_state(|| None::<Match>);
    let next_loading = use_state(|| true);
    let seq = use_mut_ref(RequestSeq::default);

    {
        let next_match = next_match.clone();
        let next_loading = next_loading.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match football::get_next_match().await {
                    Ok(found) => next_match.set(found),
                    Err(err) => log::warn!("failed to fetch next match: {err}"),
                }
                next_loading.set(false);
            });
            || {}
        });
    }

    {
        let fixtures = fixtures.clone();
        let seq = seq.clone();
        use_effect_with(*filter, move |&venue| {
            fixtures.dispatch(PagedMsg::Reset);
            fixtures.dispatch(PagedMsg::Started);
            let token = seq.borrow().issue();
            spawn_local(async move {
                let result = football::get_fixtures(1, PAGE_SIZE).await;
                if !seq.borrow().is_current(token) {
                    log::debug!("discarding superseded fixtures response");
                    return;
                }
                match result {
                    Ok(page) => {
                        let has_more = page.has_more();
                        let items = page
                            .data
                            .into_iter()
                            .filter(|m| venue.accepts(m, TEAM_NAME))
                            .collect();
                        fixtures.dispatch(PagedMsg::Loaded {
                            page: 1,
                            items,
                            has_more,
                            replace: true,
                        });
                    }
                    Err(err) => {
                        log::warn!("failed to fetch fixtures: {err}");
                        fixtures.dispatch(PagedMsg::Failed);
                    }
                }
            });
            || {}
        });
    }

    let load_more = {
        let fixtures = fixtures.clone();
        let filter = filter.clone();
        let seq = seq.clone();
        Callback::from(move |_| {
            if fixtures.busy || !fixtures.has_more {
                return;
            }
            let page = fixtures.next_page();
            let venue = *filter;
            fixtures.dispatch(PagedMsg::Started);
            let token = seq.borrow().issue();
            let fixtures = fixtures.clone();
            let seq = seq.clone();
            spawn_local(async move {
                let result = football::get_fixtures(page, PAGE_SIZE).await;
                if !seq.borrow().is_current(token) {
                    return;
                }
                match result {
                    Ok(response) => {
                        let has_more = response.has_more();
                        let items = response
                            .data
                            .into_iter()
                            .filter(|m| venue.accepts(m, TEAM_NAME))
                            .collect();
                        fixtures.dispatch(PagedMsg::Loaded {
                            page,
                            items,
                            has_more,
                            replace: false,
                        });
                    }
                    Err(err) => {
                        log::warn!("failed to fetch fixtures page {page}: {err}");
                        fixtures.dispatch(PagedMsg::Failed);
                    }
                }
            });
        })
    };

    let pick_filter = |venue: VenueFilter| {
        let filter = filter.clone();
        Callback::from(move |_| filter.set(venue))
    };
    let filter_chip = |venue: VenueFilter, label: &str| {
        let active = *filter == venue;
        let class = classes!("chip", active.then_some("chip--active"));
        html! {
            <button type="button" class={class} aria-pressed={active.to_string()} onclick={pick_filter(venue)}>
                { label.to_string() }
            </button>
        }
    };

    // The banner match stays out of the list below it.
    let banner_id = next_match.as_ref().map(|m| m.id);
    let visible: Vec<Match> = fixtures
        .items
        .iter()
        .filter(|m| Some(m.id) != banner_id)
        .cloned()
        .collect();

    html! {
        <div class="page page--fixtures">
            { if *next_loading {
                html! { <Spinner class={classes!("next-match-placeholder")} /> }
            } else {
                next_match.as_ref().map(|m| html! {
                    <NextMatchBanner fixture={m.clone()} />
                }).unwrap_or_default()
            } }

            <header class="page__header">
                <h2 class="page__title">{ "Upcoming Fixtures" }</h2>
                <div class="chip-row" role="group" aria-label="Venue filter">
                    { filter_chip(VenueFilter::All, "All") }
                    { filter_chip(VenueFilter::Home, "Home") }
                    { filter_chip(VenueFilter::Away, "Away") }
                </div>
            </header>

            { if fixtures.initial_loading() {
                html! { <SkeletonList rows={6} /> }
            } else if visible.is_empty() {
                html! {
                    <EmptyState
                        title="No upcoming fixtures"
                        message="We couldn't find any upcoming matches for the selected criteria."
                        action_label="View all fixtures"
                        on_action={{
                            let filter = filter.clone();
                            Callback::from(move |()| filter.set(VenueFilter::All))
                        }}
                    />
                }
            } else {
                html! {
                    <>
                        <MatchList matches={visible} is_fixture={true} />
                        { fixtures.has_more.then(|| html! {
                            <div class="load-more">
                                <button
                                    type="button"
                                    class="load-more__button"
                                    disabled={fixtures.busy}
                                    onclick={load_more.clone()}
                                >
                                    { if fixtures.busy { "Loading..." } else { "Load More Fixtures" } }
                                </button>
                            </div>
                        }).unwrap_or_default() }
                    </>
                }
            } }
        </div>
    }
}
