use crate::routes::Route;
use northbank_api::models::Match;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MatchCardProps {
    pub fixture: Match,
    /// Fixtures have no report yet, so no detail link.
    #[prop_or_default]
    pub is_fixture: bool,
}

#[function_component(MatchCard)]
pub fn match_card(props: &MatchCardProps) -> Html {
    let m = &props.fixture;
    let body = html! {
        <>
            <div class="match-card__league">
                <span class="match-card__league-name">{ &m.league.name }</span>
                { (!m.league.round.is_empty()).then(|| html! {
                    <span class="match-card__round">{ &m.league.round }</span>
                }).unwrap_or_default() }
            </div>
            <div class="match-card__teams">
                <div class="match-card__team">
                    <img class="match-card__logo" src={m.home.logo.clone()} alt={m.home.name.clone()} loading="lazy" />
                    <span class="match-card__team-name">{ &m.home.name }</span>
                </div>
                <span class="match-card__score">{ m.score_display() }</span>
                <div class="match-card__team">
                    <img class="match-card__logo" src={m.away.logo.clone()} alt={m.away.name.clone()} loading="lazy" />
                    <span class="match-card__team-name">{ &m.away.name }</span>
                </div>
            </div>
            <div class="match-card__meta">
                <span class="match-card__date">{ m.kickoff_label() }</span>
                { (!m.venue.name.is_empty()).then(|| html! {
                    <span class="match-card__venue">{ &m.venue.name }</span>
                }).unwrap_or_default() }
            </div>
        </>
    };
    if props.is_fixture {
        html! { <article class="match-card">{ body }</article> }
    } else {
        html! {
            <article class="match-card match-card--played">
                <Link<Route> to={Route::MatchDetail { id: m.id }} classes={classes!("match-card__link")}>
                    { body }
                </Link<Route>>
            </article>
        }
    }
}
