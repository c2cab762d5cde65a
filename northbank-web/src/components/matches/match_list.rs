use crate::components::matches::MatchCard;
use northbank_api::models::Match;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MatchListProps {
    pub matches: Vec<Match>,
    #[prop_or_default]
    pub is_fixture: bool,
}

#[function_component(MatchList)]
pub fn match_list(props: &MatchListProps) -> Html {
    html! {
        <div class="match-list">
            { for props.matches.iter().map(|m| html! {
                <MatchCard key={m.id} fixture={m.clone()} is_fixture={props.is_fixture} />
            }) }
        </div>
    }
}
