//! The gate every dashboard page sits behind.

use crate::components::layout::{BottomNav, Sidebar};
use crate::components::ui::Spinner;
use crate::context::{SessionState, use_session};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders a spinner while the session bootstraps, redirects anonymous
/// visitors to the login screen, and only mounts protected content once
/// the session is authenticated.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();

    {
        let state = session.state().clone();
        use_effect_with(state, move |state| {
            if matches!(state, SessionState::Anonymous) {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Login);
                }
            }
            || {}
        });
    }

    match session.state() {
        SessionState::Loading => html! {
            <div class="shell shell--loading">
                <Spinner />
            </div>
        },
        // Render nothing while the redirect effect runs.
        SessionState::Anonymous => Html::default(),
        SessionState::Authenticated(_) => html! {
            <div class="shell">
                <Sidebar />
                <main class="shell__main">
                    <div class="shell__content">
                        { for props.children.iter() }
                    </div>
                </main>
                <BottomNav />
            </div>
        },
    }
}
