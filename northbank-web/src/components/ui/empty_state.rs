use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub message: Option<AttrValue>,
    /// Optional call to action, e.g. clearing an active filter.
    #[prop_or_default]
    pub action_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_action: Option<Callback<()>>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let action = match (&props.action_label, &props.on_action) {
        (Some(label), Some(on_action)) => {
            let on_action = on_action.clone();
            let onclick = Callback::from(move |_| on_action.emit(()));
            html! {
                <button type="button" class="empty-state__action" onclick={onclick}>
                    { label.clone() }
                </button>
            }
        }
        _ => Html::default(),
    };
    html! {
        <div class="empty-state">
            <h3 class="empty-state__title">{ props.title.clone() }</h3>
            { props.message.as_ref().map(|m| html! {
                <p class="empty-state__message">{ m.clone() }</p>
            }).unwrap_or_default() }
            { action }
        </div>
    }
}
