use northbank_api::config;
use northbank_api::models::StandingRow;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StandingsTableProps {
    pub standings: Vec<StandingRow>,
    #[prop_or_default]
    pub class: Classes,
}

/// League table. The supported team's row is highlighted.
#[function_component(StandingsTable)]
pub fn standings_table(props: &StandingsTableProps) -> Html {
    html! {
        <div class={classes!("standings", props.class.clone())}>
            <table class="standings__table">
                <thead>
                    <tr>
                        <th scope="col">{ "#" }</th>
                        <th scope="col" class="standings__team-col">{ "Team" }</th>
                        <th scope="col">{ "P" }</th>
                        <th scope="col">{ "W" }</th>
                        <th scope="col">{ "D" }</th>
                        <th scope="col">{ "L" }</th>
                        <th scope="col">{ "GD" }</th>
                        <th scope="col">{ "Pts" }</th>
                        <th scope="col" class="standings__form-col">{ "Form" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.standings.iter().map(|row| {
                        let ours = row
                            .team
                            .name
                            .to_lowercase()
                            .contains(&config::TEAM_NAME.to_lowercase());
                        let class = classes!(ours.then_some("standings__row--ours"));
                        html! {
                            <tr key={row.team.id} class={class}>
                                <td>{ row.rank }</td>
                                <td class="standings__team">
                                    <img class="standings__logo" src={row.team.logo.clone()} alt="" loading="lazy" />
                                    <span>{ &row.team.name }</span>
                                </td>
                                <td>{ row.stats.played }</td>
                                <td>{ row.stats.won }</td>
                                <td>{ row.stats.drawn }</td>
                                <td>{ row.stats.lost }</td>
                                <td>{ format!("{:+}", row.goals_diff) }</td>
                                <td class="standings__points">{ row.points }</td>
                                <td class="standings__form">{ &row.form }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
