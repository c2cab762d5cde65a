//! Server-side render checks for pages and the session gate. Effects do
//! not run during SSR, so pages show their mount state: spinners,
//! skeletons and gating decisions.

use futures::executor::block_on;
use northbank_api::Session;
use northbank_api::models::user::{Profile, User};
use northbank_web::components::layout::DashboardLayout;
use northbank_web::context::session::{SessionHandle, SessionStore};
use northbank_web::context::{SessionState, ToastProvider};
use northbank_web::pages::account::AccountPage;
use northbank_web::pages::dashboard::DashboardPage;
use northbank_web::pages::events::EventsPage;
use northbank_web::pages::fixtures::FixturesPage;
use northbank_web::pages::login::LoginPage;
use northbank_web::pages::member_card::MemberCardPage;
use northbank_web::pages::news::NewsPage;
use northbank_web::pages::not_found::NotFoundPage;
use northbank_web::pages::reset_password::ResetPasswordPage;
use northbank_web::pages::standings::StandingsPage;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

fn member_session() -> Session {
    Session::from_parts(
        User {
            id: 1,
            name: "Ian Wright".into(),
            email: "ian@example.com".into(),
            role: vec!["member".into()],
            member_number: None,
            status: None,
        },
        Some(Profile {
            member_number: Some("8092124".into()),
            status: Some("active".into()),
            ..Profile::default()
        }),
    )
}

fn guest_session() -> Session {
    Session::from_parts(
        User {
            id: 2,
            name: "Day Tripper".into(),
            email: "guest@example.com".into(),
            role: vec!["guest".into()],
            member_number: None,
            status: None,
        },
        None,
    )
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    state: SessionState,
    content: Html,
}

/// Router + toast overlay + a session store preset to the given state.
#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let state = props.state.clone();
    let store = use_reducer(move || SessionStore { state });
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router history={history}>
            <ToastProvider>
                <ContextProvider<SessionHandle> context={SessionHandle::new(store)}>
                    { props.content.clone() }
                </ContextProvider<SessionHandle>>
            </ToastProvider>
        </Router>
    }
}

fn render_with(state: SessionState, content: Html) -> String {
    block_on(LocalServerRenderer::<Shell>::with_props(ShellProps { state, content }).render())
}

#[test]
fn layout_spins_while_the_session_loads() {
    let html = render_with(
        SessionState::Loading,
        html! { <DashboardLayout><p>{ "secret" }</p></DashboardLayout> },
    );
    assert!(html.contains("shell--loading"));
    assert!(!html.contains("secret"));
}

#[test]
fn layout_renders_nothing_for_anonymous_visitors() {
    let html = render_with(
        SessionState::Anonymous,
        html! { <DashboardLayout><p>{ "secret" }</p></DashboardLayout> },
    );
    assert!(!html.contains("secret"));
    assert!(!html.contains("sidebar"));
}

#[test]
fn layout_shows_chrome_and_content_when_authenticated() {
    let html = render_with(
        SessionState::Authenticated(member_session()),
        html! { <DashboardLayout><p>{ "secret" }</p></DashboardLayout> },
    );
    assert!(html.contains("secret"));
    assert!(html.contains("sidebar"));
    assert!(html.contains("Logout"));
}

#[test]
fn member_card_nav_entry_is_hidden_from_non_members() {
    let member = render_with(
        SessionState::Authenticated(member_session()),
        html! { <DashboardLayout><p>{ "body" }</p></DashboardLayout> },
    );
    assert!(member.contains("Member Card"));

    let guest = render_with(
        SessionState::Authenticated(guest_session()),
        html! { <DashboardLayout><p>{ "body" }</p></DashboardLayout> },
    );
    assert!(!guest.contains("Member Card"));
}

#[test]
fn member_card_page_renders_the_card_for_members() {
    let html = render_with(
        SessionState::Authenticated(member_session()),
        html! { <MemberCardPage /> },
    );
    assert!(html.contains("Digital Member Card"));
    assert!(html.contains("Ian Wright"));
    assert!(html.contains("8092124"));
    assert!(html.contains("/member/verify/8092124"));
}

#[test]
fn member_card_page_blanks_for_guests_pending_redirect() {
    let html = render_with(
        SessionState::Authenticated(guest_session()),
        html! { <MemberCardPage /> },
    );
    assert!(!html.contains("8092124"));
    assert!(!html.contains("member-card__face"));
}

#[test]
fn login_page_renders_the_credential_form() {
    let html = render_with(SessionState::Anonymous, html! { <LoginPage /> });
    assert!(html.contains("type=\"email\""));
    assert!(html.contains("type=\"password\""));
    assert!(html.contains("Remember me"));
    assert!(html.contains("Forgot your password?"));
}

#[test]
fn reset_page_flags_a_linkless_visit() {
    let html = render_with(SessionState::Anonymous, html! { <ResetPasswordPage /> });
    assert!(html.contains("Invalid password reset link"));
}

#[test]
fn list_pages_open_with_skeletons() {
    let state = SessionState::Authenticated(member_session());
    let events = render_with(state.clone(), html! { <EventsPage /> });
    assert!(events.contains("skeleton-list"));
    assert!(events.contains("Club Events"));

    let news = render_with(state.clone(), html! { <NewsPage /> });
    assert!(news.contains("skeleton-list"));
    assert!(news.contains("Search news..."));

    let standings = render_with(state.clone(), html! { <StandingsPage /> });
    assert!(standings.contains("skeleton-list"));

    let fixtures = render_with(state, html! { <FixturesPage /> });
    assert!(fixtures.contains("Upcoming Fixtures"));
    assert!(fixtures.contains("skeleton-list"));
}

#[test]
fn dashboard_greets_the_member() {
    let html = render_with(
        SessionState::Authenticated(member_session()),
        html! { <DashboardPage /> },
    );
    assert!(html.contains("Welcome back, Ian Wright"));
    assert!(html.contains("Next Match"));
    assert!(html.contains("Latest Result"));
    assert!(html.contains("League Table"));
}

#[test]
fn account_page_shows_the_email_read_only() {
    let html = render_with(
        SessionState::Authenticated(member_session()),
        html! { <AccountPage /> },
    );
    assert!(html.contains("ian@example.com"));
    assert!(html.contains("Change Password"));
    assert!(html.contains("disabled"));
}

#[test]
fn not_found_links_back_home() {
    let html = render_with(SessionState::Anonymous, html! { <NotFoundPage /> });
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to dashboard"));
}
