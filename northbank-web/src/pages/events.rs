//! Club events list: category chips plus a load-more feed.

use crate::components::events::{CategoryFilter, EventList};
use crate::components::ui::{EmptyState, SkeletonList};
use crate::state::{Paged, PagedMsg, RequestSeq};
use northbank_api::config::PAGE_SIZE;
use northbank_api::events as events_api;
use northbank_api::models::{Event, EventCategory};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(EventsPage)]
pub fn events_page() -> Html {
    let events = use_reducer(Paged::<Event>::default);
    let categories = use_state(Vec::<EventCategory>::new);
    let selected = use_state(|| None::<i64>);
    let seq = use_mut_ref(RequestSeq::default);

    {
        let categories = categories.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match events_api::get_event_categories().await {
                    Ok(list) => categories.set(list),
                    Err(err) => log::warn!("failed to load event categories: {err}"),
                }
            });
            || {}
        });
    }

    // Page 1 on mount and on every filter change; a newer fetch
    // supersedes anything still in flight.
    {
        let events = events.clone();
        let seq = seq.clone();
        use_effect_with(*selected, move |&category| {
            events.dispatch(PagedMsg::Reset);
            events.dispatch(PagedMsg::Started);
            let token = seq.borrow().issue();
            spawn_local(async move {
                let result = events_api::get_events(1, PAGE_SIZE, category).await;
                if !seq.borrow().is_current(token) {
                    log::debug!("discarding superseded events response");
                    return;
                }
                match result {
                    Ok(page) => events.dispatch(PagedMsg::Loaded {
                        page: 1,
                        has_more: page.has_more(),
                        items: page.data,
                        replace: true,
                    }),
                    Err(err) => {
                        log::warn!("failed to fetch events: {err}");
                        events.dispatch(PagedMsg::Failed);
                    }
                }
            });
            || {}
        });
    }

    let load_more = {
        let events = events.clone();
        let selected = selected.clone();
        let seq = seq.clone();
        Callback::from(move |_| {
            if events.busy || !events.has_more {
                return;
            }
            let page = events.next_page();
            let category = *selected;
            events.dispatch(PagedMsg::Started);
            let token = seq.borrow().issue();
            let events = events.clone();
            let seq = seq.clone();
            spawn_local(async move {
                let result = events_api::get_events(page, PAGE_SIZE, category).await;
                if !seq.borrow().is_current(token) {
                    return;
                }
                match result {
                    Ok(response) => events.dispatch(PagedMsg::Loaded {
                        page,
                        has_more: response.has_more(),
                        items: response.data,
                        replace: false,
                    }),
                    Err(err) => {
                        log::warn!("failed to fetch events page {page}: {err}");
                        events.dispatch(PagedMsg::Failed);
                    }
                }
            });
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: Option<i64>| {
            if id == *selected {
                return;
            }
            selected.set(id);
        })
    };
    let clear_filter = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    html! {
        <div class="page page--events">
            <header class="page__header">
                <h2 class="page__title">{ "Club Events" }</h2>
            </header>

            <CategoryFilter
                categories={(*categories).clone()}
                selected={*selected}
                on_select={on_select}
            />

            { if events.initial_loading() {
                html! { <SkeletonList rows={6} /> }
            } else if events.items.is_empty() {
                html! {
                    <EmptyState
                        title="No events found"
                        message="We couldn't find any events matching your selection."
                        action_label="View all events"
                        on_action={clear_filter}
                    />
                }
            } else {
                html! {
                    <>
                        <EventList events={events.items.clone()} />
                        { events.has_more.then(|| html! {
                            <div class="load-more">
                                <button
                                    type="button"
                                    class="load-more__button"
                                    disabled={events.busy}
                                    onclick={load_more.clone()}
                                >
                                    { if events.busy { "Loading..." } else { "Load More Events" } }
                                </button>
                            </div>
                        }).unwrap_or_default() }
                    </>
                }
            } }
        </div>
    }
}
