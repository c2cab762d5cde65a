use crate::components::matches::Countdown;
use northbank_api::models::Match;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NextMatchBannerProps {
    pub fixture: Match,
}

/// Hero strip for the nearest upcoming match, with a live countdown.
#[function_component(NextMatchBanner)]
pub fn next_match_banner(props: &NextMatchBannerProps) -> Html {
    let m = &props.fixture;
    html! {
        <section class="next-match">
            <h2 class="next-match__heading">{ "Next Match" }</h2>
            <div class="next-match__teams">
                <div class="next-match__team">
                    <img class="next-match__logo" src={m.home.logo.clone()} alt={m.home.name.clone()} />
                    <h3 class="next-match__team-name">{ &m.home.name }</h3>
                </div>
                <div class="next-match__centre">
                    <span class="next-match__vs">{ "VS" }</span>
                    <span class="next-match__league">{ &m.league.name }</span>
                    <span class="next-match__date">{ m.kickoff_label() }</span>
                </div>
                <div class="next-match__team">
                    <img class="next-match__logo" src={m.away.logo.clone()} alt={m.away.name.clone()} />
                    <h3 class="next-match__team-name">{ &m.away.name }</h3>
                </div>
            </div>
            { m.kickoff_millis().map(|target| html! {
                <Countdown target_millis={target} />
            }).unwrap_or_default() }
            { (!m.venue.name.is_empty()).then(|| html! {
                <p class="next-match__venue">{ format!("{}, {}", m.venue.name, m.venue.city) }</p>
            }).unwrap_or_default() }
        </section>
    }
}
