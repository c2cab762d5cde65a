use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plain content panel; pages compose everything inside these.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let class = classes!("card", props.class.clone());
    html! {
        <section class={class}>
            { props.title.as_ref().map(|title| html! {
                <header class="card__header">
                    <h3 class="card__title">{ title.clone() }</h3>
                </header>
            }).unwrap_or_default() }
            <div class="card__body">
                { for props.children.iter() }
            </div>
        </section>
    }
}
