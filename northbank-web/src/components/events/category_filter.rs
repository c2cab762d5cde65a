use northbank_api::models::EventCategory;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryFilterProps {
    pub categories: Vec<EventCategory>,
    #[prop_or_default]
    pub selected: Option<i64>,
    pub on_select: Callback<Option<i64>>,
}

/// "All" plus one chip per event category.
#[function_component(CategoryFilter)]
pub fn category_filter(props: &CategoryFilterProps) -> Html {
    let chip = |id: Option<i64>, label: String, active: bool| {
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
        <div class="chip-row" role="group" aria-label="Category filter">
            { chip(None, "All".to_string(), props.selected.is_none()) }
            { for props.categories.iter().map(|category| chip(
                Some(category.id),
                category.name.clone(),
                props.selected == Some(category.id),
            )) }
        </div>
    }
}
