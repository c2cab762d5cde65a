//! Mobile tab bar; mirrors the sidebar's gating.

use crate::context::use_session;
use crate::routes::Route;
use northbank_api::Session;
use yew::prelude::*;
use yew_router::prelude::*;

const TABS: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("News", Route::News),
    ("Matches", Route::Matches),
    ("Card", Route::MemberCard),
    ("Profile", Route::Profile),
];

#[function_component(BottomNav)]
pub fn bottom_nav() -> Html {
    let session = use_session();
    let current = use_route::<Route>();
    let is_member = session.session().is_some_and(Session::is_member);

    html! {
        <nav class="bottom-nav" aria-label="Mobile navigation">
            { for TABS.iter().filter(|(_, route)| is_member || !route.is_member_only()).map(|(label, route)| {
                let active = current.as_ref() == Some(route);
                let class = classes!(
                    "bottom-nav__tab",
                    active.then_some("bottom-nav__tab--active"),
                );
                html! {
                    <Link<Route> to={route.clone()} classes={class}>{ *label }</Link<Route>>
                }
            }) }
        </nav>
    }
}
