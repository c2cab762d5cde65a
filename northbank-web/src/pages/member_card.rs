//! Member card page. Members only: anyone without a member number, or
//! carrying the guest role, is sent back to the dashboard.

use crate::components::member::MemberCard;
use crate::components::ui::Spinner;
use crate::context::{SessionState, use_session};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(MemberCardPage)]
pub fn member_card_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let is_member = session
        .session()
        .map(northbank_api::Session::is_member)
        .unwrap_or(false);

    {
        let state = session.state().clone();
        use_effect_with((state, is_member), move |(state, is_member)| {
            if matches!(state, SessionState::Authenticated(_)) && !*is_member {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
            || {}
        });
    }

    let Some(current) = session.session() else {
        return html! { <div class="page page--member-card"><Spinner /></div> };
    };
    if !is_member {
        // Render nothing while the redirect effect runs.
        return Html::default();
    }
    let member_number = current.member_number.clone().unwrap_or_default();
    let qr_payload = current.qr_payload().unwrap_or_default();

    html! {
        <div class="page page--member-card">
            <header class="page__header">
                <h2 class="page__title">{ "Digital Member Card" }</h2>
                <p class="page__subtitle">
                    { "Access the stadium and redeem rewards with your digital ID." }
                </p>
            </header>
            <div class="member-card-stage">
                <MemberCard
                    name={current.user.name.clone()}
                    member_number={member_number}
                    status={current.display_status().to_string()}
                    qr_payload={qr_payload}
                />
                <div class="member-card-stage__hints">
                    <p>{ "Tap the card to view the QR code." }</p>
                    <p>{ "Screen brightness will increase automatically when scanning." }</p>
                </div>
            </div>
        </div>
    }
}
