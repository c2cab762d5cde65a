use crate::routes::Route;
use northbank_api::models::Match;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LatestMatchHeroProps {
    pub fixture: Match,
}

/// Full-width banner for the most recently played match.
#[function_component(LatestMatchHero)]
pub fn latest_match_hero(props: &LatestMatchHeroProps) -> Html {
    let m = &props.fixture;
    html! {
        <section class="latest-hero">
            <span class="latest-hero__label">{ "Latest Result" }</span>
            <div class="latest-hero__teams">
                <div class="latest-hero__team">
                    <img class="latest-hero__logo" src={m.home.logo.clone()} alt={m.home.name.clone()} />
                    <span class="latest-hero__team-name">{ &m.home.name }</span>
                </div>
                <span class="latest-hero__score">{ m.score_display() }</span>
                <div class="latest-hero__team">
                    <img class="latest-hero__logo" src={m.away.logo.clone()} alt={m.away.name.clone()} />
                    <span class="latest-hero__team-name">{ &m.away.name }</span>
                </div>
            </div>
            <div class="latest-hero__meta">
                <span>{ &m.league.name }</span>
                <span>{ m.kickoff_label() }</span>
            </div>
            <Link<Route> to={Route::MatchDetail { id: m.id }} classes={classes!("latest-hero__link")}>
                { "Match report" }
            </Link<Route>>
        </section>
    }
}
