//! The digital membership card: front shows identity, back shows the
//! entry QR. Purely presentational; the session decides who sees it.

use northbank_api::config;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MemberCardProps {
    pub name: AttrValue,
    pub member_number: AttrValue,
    pub status: AttrValue,
    /// Backend verification URL; an external scanner surface renders it.
    pub qr_payload: AttrValue,
}

#[function_component(MemberCard)]
pub fn member_card(props: &MemberCardProps) -> Html {
    let flipped = use_state(|| false);
    let flip = {
        let flipped = flipped.clone();
        Callback::from(move |_| flipped.set(!*flipped))
    };

    let class = classes!("member-card", (*flipped).then_some("member-card--flipped"));
    html! {
        <div class={class} onclick={flip} role="button" tabindex="0" aria-label="Membership card, tap to flip">
            <div class="member-card__face member-card__face--front">
                <header class="member-card__brand">
                    <span class="member-card__club">{ config::CLUB_NAME }</span>
                    <span class="member-card__team">{ config::TEAM_NAME }</span>
                </header>
                <div class="member-card__identity">
                    <div>
                        <span class="member-card__label">{ "Member name" }</span>
                        <span class="member-card__name">{ props.name.clone() }</span>
                    </div>
                    <span class="member-card__tier">{ props.status.clone() }</span>
                </div>
                <footer class="member-card__number-row">
                    <span class="member-card__label">{ "Member no." }</span>
                    <span class="member-card__number">{ props.member_number.clone() }</span>
                </footer>
            </div>
            <div class="member-card__face member-card__face--back">
                <span class="member-card__entry">{ "Entry Pass" }</span>
                <div class="member-card__qr" data-qr={props.qr_payload.clone()}>
                    <span class="member-card__qr-hint">{ "Scan at the gate" }</span>
                </div>
                <code class="member-card__payload">{ props.qr_payload.clone() }</code>
                <p class="member-card__flip-hint">{ "Tap card to flip back" }</p>
            </div>
        </div>
    }
}
