use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SkeletonListProps {
    /// How many placeholder rows to draw.
    #[prop_or(6)]
    pub rows: usize,
    #[prop_or_default]
    pub class: Classes,
}

/// Grey pulse blocks shown while a list is on its first fetch.
#[function_component(SkeletonList)]
pub fn skeleton_list(props: &SkeletonListProps) -> Html {
    html! {
        <div class={classes!("skeleton-list", props.class.clone())} aria-busy="true">
            { for (0..props.rows).map(|idx| html! {
                <div key={idx} class="skeleton-list__row"></div>
            }) }
        </div>
    }
}
