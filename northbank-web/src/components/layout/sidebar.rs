//! Desktop navigation rail.

use crate::context::use_session;
use crate::routes::Route;
use northbank_api::{Session, config};
use yew::prelude::*;
use yew_router::prelude::*;

/// Static menu; the member-card entry only shows for members.
const MENU: &[(&str, Route)] = &[
    ("Dashboard", Route::Home),
    ("Profile", Route::Profile),
    ("Member Card", Route::MemberCard),
    ("News", Route::News),
    ("Fixtures", Route::Fixtures),
    ("Matches", Route::Matches),
    ("Standings", Route::Standings),
    ("Events", Route::Events),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let is_member = session.session().is_some_and(Session::is_member);

    let logout = {
        let session = session.clone();
        Callback::from(move |_| session.logout(navigator.clone()))
    };

    html! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <h1 class="sidebar__title">{ config::CLUB_NAME }</h1>
                <p class="sidebar__tagline">{ format!("{} supporters, one terrace", config::TEAM_NAME) }</p>
            </div>
            <nav class="sidebar__nav" aria-label="Main navigation">
                { for MENU.iter().filter(|(_, route)| is_member || !route.is_member_only()).map(|(label, route)| {
                    let active = current.as_ref() == Some(route);
                    let class = classes!(
                        "sidebar__link",
                        active.then_some("sidebar__link--active"),
                    );
                    html! {
                        <Link<Route> to={route.clone()} classes={class}>{ *label }</Link<Route>>
                    }
                }) }
            </nav>
            <div class="sidebar__footer">
                <button type="button" class="sidebar__logout" onclick={logout}>
                    { "Logout" }
                </button>
            </div>
        </aside>
    }
}
