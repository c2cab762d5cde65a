use northbank_api::models::Season;
use web_sys::HtmlSelectElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SeasonSelectorProps {
    pub seasons: Vec<Season>,
    pub selected: u16,
    pub on_change: Callback<u16>,
}

/// `<select>` over the seasons the feed knows about. The page owns the
/// season list; an empty list renders just the selected year.
#[function_component(SeasonSelector)]
pub fn season_selector(props: &SeasonSelectorProps) -> Html {
    let on_change = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(year) = select.value().parse::<u16>() {
                    cb.emit(year);
                }
            }
        })
    };

    let label_for = |season: &Season| {
        if season.label.is_empty() {
            season.year.to_string()
        } else {
            season.label.clone()
        }
    };

    html! {
        <label class="season-select">
            <span class="season-select__label">{ "Season" }</span>
            <select class="season-select__input" onchange={on_change} value={props.selected.to_string()}>
                { if props.seasons.is_empty() {
                    html! { <option value={props.selected.to_string()} selected=true>{ props.selected }</option> }
                } else {
                    html! {
                        { for props.seasons.iter().map(|season| html! {
                            <option
                                value={season.year.to_string()}
                                selected={season.year == props.selected}
                            >
                                { label_for(season) }
                            </option>
                        }) }
                    }
                } }
            </select>
        </label>
    }
}
