//! Application root: router, toast overlay, session store, route switch.

use crate::components::layout::DashboardLayout;
use crate::context::{SessionProvider, ToastProvider};
use crate::pages::account::AccountPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::event_detail::EventDetailPage;
use crate::pages::events::EventsPage;
use crate::pages::fixtures::FixturesPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::login::LoginPage;
use crate::pages::match_detail::MatchDetailPage;
use crate::pages::matches::MatchesPage;
use crate::pages::member_card::MemberCardPage;
use crate::pages::news::NewsPage;
use crate::pages::news_detail::NewsDetailPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::standings::StandingsPage;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <SessionProvider>
                    <Switch<Route> render={switch} />
                </SessionProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

/// Public routes render bare; everything else mounts behind the session
/// gate.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::ResetPassword => html! { <ResetPasswordPage /> },
        gated => {
            let page = match gated {
                Route::Home => html! { <DashboardPage /> },
                Route::News => html! { <NewsPage /> },
                Route::NewsDetail { id } => html! { <NewsDetailPage {id} /> },
                Route::Fixtures => html! { <FixturesPage /> },
                Route::Matches => html! { <MatchesPage /> },
                Route::MatchDetail { id } => html! { <MatchDetailPage {id} /> },
                Route::Standings => html! { <StandingsPage /> },
                Route::Events => html! { <EventsPage /> },
                Route::EventDetail { id } => html! { <EventDetailPage {id} /> },
                Route::Profile => html! { <ProfilePage /> },
                Route::Account => html! { <AccountPage /> },
                Route::MemberCard => html! { <MemberCardPage /> },
                Route::NotFound => html! { <NotFoundPage /> },
                Route::Login | Route::ForgotPassword | Route::ResetPassword => Html::default(),
            };
            html! { <DashboardLayout>{ page }</DashboardLayout> }
        }
    }
}
