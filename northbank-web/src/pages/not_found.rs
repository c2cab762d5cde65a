use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Catch-all for routes that match nothing.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found">
            <h1 class="not-found__title">{ "Page not found" }</h1>
            <p class="not-found__message">{ "The page you were looking for does not exist." }</p>
            <Link<Route> to={Route::Home} classes={classes!("not-found__link")}>
                { "Back to dashboard" }
            </Link<Route>>
        </div>
    }
}
