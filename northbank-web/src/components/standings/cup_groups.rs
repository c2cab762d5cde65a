use crate::components::standings::StandingsTable;
use northbank_api::models::StandingsGroup;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CupGroupsProps {
    pub groups: Vec<StandingsGroup>,
}

/// Cup competitions arrive as named groups, one mini table each.
#[function_component(CupGroups)]
pub fn cup_groups(props: &CupGroupsProps) -> Html {
    html! {
        <div class="cup-groups">
            { for props.groups.iter().map(|group| html! {
                <section key={group.name.clone()} class="cup-groups__group">
                    <h4 class="cup-groups__name">{ &group.name }</h4>
                    <StandingsTable standings={group.standings.clone()} class={classes!("standings--compact")} />
                </section>
            }) }
        </div>
    }
}
