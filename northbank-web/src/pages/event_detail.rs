//! Single event. Fetch by id on mount; failure means not found.

use crate::components::ui::Spinner;
use crate::routes::Route;
use northbank_api::events as events_api;
use northbank_api::models::Event;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EventDetailPageProps {
    pub id: i64,
}

#[function_component(EventDetailPage)]
pub fn event_detail_page(props: &EventDetailPageProps) -> Html {
    let event = use_state(|| None::<Event>);
    let loading = use_state(|| true);

    {
        let event = event.clone();
        let loading = loading.clone();
        use_effect_with(props.id, move |&id| {
            loading.set(true);
            spawn_local(async move {
                match events_api::get_event_by_id(id).await {
                    Ok(found) => event.set(Some(found)),
                    Err(err) => {
                        log::warn!("failed to fetch event {id}: {err}");
                        event.set(None);
                    }
                }
                loading.set(false);
            });
            || {}
        });
    }

    if *loading {
        return html! {
            <div class="page page--event-detail"><Spinner /></div>
        };
    }

    let Some(event) = (*event).clone() else {
        return html! {
            <div class="not-found">
                <h2 class="not-found__title">{ "Event not found" }</h2>
                <Link<Route> to={Route::Events} classes={classes!("not-found__link")}>
                    { "Back to Events" }
                </Link<Route>>
            </div>
        };
    };

    html! {
        <article class="page page--event-detail">
            <Link<Route> to={Route::Events} classes={classes!("page__back-link")}>
                { "Back to Events" }
            </Link<Route>>
            <img class="event-detail__cover" src={event.cover_url()} alt={event.title.clone()} />
            <header class="event-detail__header">
                { event.category_name().map(|name| html! {
                    <span class="event-detail__category">{ name.to_string() }</span>
                }).unwrap_or_default() }
                { event.member_only.then(|| html! {
                    <span class="event-detail__badge">{ "Members only" }</span>
                }).unwrap_or_default() }
                <h1 class="event-detail__title">{ &event.title }</h1>
            </header>
            <dl class="event-detail__facts">
                <div><dt>{ "Starts" }</dt><dd>{ event.starts_at() }</dd></div>
                <div><dt>{ "Location" }</dt><dd>{ &event.location }</dd></div>
                <div><dt>{ "Fee" }</dt><dd>{ event.fee_display() }</dd></div>
            </dl>
            <div class="event-detail__description">{ &event.description }</div>
        </article>
    }
}
