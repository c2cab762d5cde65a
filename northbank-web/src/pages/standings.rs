//! Standings: one aggregate fetch per season, competition chips derived
//! from the response, league table or cup groups per competition type.

use crate::components::football::SeasonSelector;
use crate::components::matches::CompetitionFilter;
use crate::components::standings::{CupGroups, StandingsTable};
use crate::components::ui::{EmptyState, SkeletonList};
use northbank_api::config::{DEFAULT_LEAGUE_ID, DEFAULT_SEASON};
use northbank_api::football;
use northbank_api::models::{Competition, CompetitionStanding, Season};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Keep the current selection when the new season still has it, fall back
/// to the default league, then to whatever comes first.
fn select_league(current: Option<i64>, competitions: &[Competition]) -> Option<i64> {
    if let Some(id) = current {
        if competitions.iter().any(|c| c.id == id) {
            return Some(id);
        }
    }
    let default_id = i64::from(DEFAULT_LEAGUE_ID);
    if competitions.iter().any(|c| c.id == default_id) {
        return Some(default_id);
    }
    competitions.first().map(|c| c.id)
}

#[function_component(StandingsPage)]
pub fn standings_page() -> Html {
    let data = use_state(Vec::<CompetitionStanding>::new);
    let loading = use_state(|| true);
    let seasons = use_state(Vec::<Season>::new);
    let season = use_state(|| DEFAULT_SEASON);
    let selected = use_state(|| Some(i64::from(DEFAULT_LEAGUE_ID)));

    {
        let seasons = seasons.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match football::get_seasons().await {
                    Ok(list) => seasons.set(list),
                    Err(err) => log::warn!("failed to load seasons: {err}"),
                }
            });
            || {}
        });
    }

    {
        let data = data.clone();
        let loading = loading.clone();
        let selected = selected.clone();
        use_effect_with(*season, move |&year| {
            loading.set(true);
            spawn_local(async move {
                match football::get_all_standings(year).await {
                    Ok(standings) => {
                        let competitions: Vec<Competition> =
                            standings.iter().map(|s| s.competition.clone()).collect();
                        selected.set(select_league(*selected, &competitions));
                        data.set(standings);
                    }
                    Err(err) => {
                        log::warn!("failed to fetch standings: {err}");
                        data.set(Vec::new());
                    }
                }
                loading.set(false);
            });
            || {}
        });
    }

    let on_season = {
        let season = season.clone();
        Callback::from(move |year: u16| season.set(year))
    };
    let on_league = {
        let selected = selected.clone();
        Callback::from(move |id: Option<i64>| {
            if id.is_some() {
                selected.set(id);
            }
        })
    };

    let competitions: Vec<Competition> = data.iter().map(|s| s.competition.clone()).collect();
    let current = data
        .iter()
        .find(|s| Some(s.competition.id) == *selected)
        .cloned();

    html! {
        <div class="page page--standings">
            <header class="page__header">
                <h2 class="page__title">{ "Standings" }</h2>
                <SeasonSelector
                    seasons={(*seasons).clone()}
                    selected={*season}
                    on_change={on_season}
                />
            </header>

            { (!competitions.is_empty()).then(|| html! {
                <CompetitionFilter
                    competitions={competitions.clone()}
                    selected={*selected}
                    on_select={on_league.clone()}
                    show_all={false}
                    show_counts={false}
                />
            }).unwrap_or_default() }

            { if *loading {
                html! { <SkeletonList rows={10} /> }
            } else if let Some(block) = current {
                let competition = &block.competition;
                html! {
                    <section class="standings-panel">
                        <header class="standings-panel__header">
                            <img
                                class="standings-panel__logo"
                                src={competition.logo.clone()}
                                alt={competition.name.clone()}
                            />
                            <div>
                                <h3 class="standings-panel__name">{ &competition.name }</h3>
                                <p class="standings-panel__season">
                                    { format!("Season {}", competition.season.year) }
                                </p>
                            </div>
                        </header>
                        { match (&block.groups, &block.standings) {
                            // Cup with groups takes priority; some cups come
                            // flattened as a plain table.
                            (Some(groups), _) if competition.is_cup() => html! {
                                <CupGroups groups={groups.clone()} />
                            },
                            (_, Some(rows)) => html! {
                                <StandingsTable standings={rows.clone()} />
                            },
                            _ => html! {
                                <EmptyState
                                    title="No standings available"
                                    message="Standings for this competition are not available or it hasn't started yet."
                                />
                            },
                        } }
                    </section>
                }
            } else {
                html! {
                    <EmptyState
                        title="No standings available"
                        message="Standings for this competition are not available or it hasn't started yet."
                    />
                }
            } }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competition(id: i64) -> Competition {
        serde_json::from_value(serde_json::json!({
            "id": id, "name": format!("Comp {id}"), "type": "League"
        }))
        .unwrap()
    }

    #[test]
    fn keeps_valid_selection() {
        let comps = vec![competition(2), competition(39)];
        assert_eq!(select_league(Some(2), &comps), Some(2));
    }

    #[test]
    fn falls_back_to_default_league_then_first() {
        let with_default = vec![competition(2), competition(39)];
        assert_eq!(select_league(Some(999), &with_default), Some(39));
        let without_default = vec![competition(2), competition(3)];
        assert_eq!(select_league(Some(999), &without_default), Some(2));
        assert_eq!(select_league(None, &[]), None);
    }
}
