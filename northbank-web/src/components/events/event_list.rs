use crate::components::events::EventCard;
use northbank_api::models::Event;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EventListProps {
    pub events: Vec<Event>,
}

#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    html! {
        <div class="event-list">
            { for props.events.iter().map(|event| html! {
                <EventCard key={event.id} event={event.clone()} />
            }) }
        </div>
    }
}
