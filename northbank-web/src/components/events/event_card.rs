use crate::routes::Route;
use northbank_api::models::Event;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EventCardProps {
    pub event: Event,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;
    html! {
        <article class="event-card">
            <Link<Route> to={Route::EventDetail { id: event.id }} classes={classes!("event-card__cover-link")}>
                <img class="event-card__cover" src={event.cover_url()} alt={event.title.clone()} loading="lazy" />
                { event.member_only.then(|| html! {
                    <span class="event-card__badge event-card__badge--member">{ "Members only" }</span>
                }).unwrap_or_default() }
            </Link<Route>>
            <div class="event-card__body">
                { event.category_name().map(|name| html! {
                    <span class="event-card__category">{ name.to_string() }</span>
                }).unwrap_or_default() }
                <Link<Route> to={Route::EventDetail { id: event.id }} classes={classes!("event-card__title-link")}>
                    <h3 class="event-card__title">{ &event.title }</h3>
                </Link<Route>>
                <dl class="event-card__facts">
                    <div class="event-card__fact">
                        <dt>{ "When" }</dt>
                        <dd>{ event.starts_at() }</dd>
                    </div>
                    <div class="event-card__fact">
                        <dt>{ "Where" }</dt>
                        <dd>{ &event.location }</dd>
                    </div>
                    <div class="event-card__fact">
                        <dt>{ "Fee" }</dt>
                        <dd>{ event.fee_display() }</dd>
                    </div>
                </dl>
            </div>
        </article>
    }
}
