use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class={classes!("spinner-wrap", props.class.clone())} role="status" aria-live="polite">
            <span class="spinner" aria-hidden="true"></span>
            <span class="sr-only">{ "Loading" }</span>
        </div>
    }
}
