use northbank_api::models::Competition;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CompetitionFilterProps {
    pub competitions: Vec<Competition>,
    #[prop_or_default]
    pub selected: Option<i64>,
    pub on_select: Callback<Option<i64>>,
    /// Whether the leading "All" chip is offered.
    #[prop_or(true)]
    pub show_all: bool,
    #[prop_or(true)]
    pub show_counts: bool,
}

/// Chip row narrowing a list to one competition.
#[function_component(CompetitionFilter)]
pub fn competition_filter(props: &CompetitionFilterProps) -> Html {
    let chip = |id: Option<i64>, label: Html, active: bool| {
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_| on_select.emit(id));
        let class = classes!("chip", active.then_some("chip--active"));
        html! {
            <button type="button" class={class} aria-pressed={active.to_string()} onclick={onclick}>
                { label }
            </button>
        }
    };

    html! {
        <div class="chip-row" role="group" aria-label="Competition filter">
            { if props.show_all {
                chip(None, html! { { "All" } }, props.selected.is_none())
            } else {
                Html::default()
            } }
            { for props.competitions.iter().map(|competition| {
                let label = html! {
                    <>
                        <img class="chip__logo" src={competition.logo.clone()} alt="" loading="lazy" />
                        <span>{ &competition.name }</span>
                        { (props.show_counts && competition.match_count > 0).then(|| html! {
                            <span class="chip__count">{ competition.match_count }</span>
                        }).unwrap_or_default() }
                    </>
                };
                chip(
                    Some(competition.id),
                    label,
                    props.selected == Some(competition.id),
                )
            }) }
        </div>
    }
}
