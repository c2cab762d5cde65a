//! Request a password-reset email.

use crate::routes::Route;
use northbank_api::{auth, validate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let sent = use_state(|| false);
    let submitting = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let error = error.clone();
        let sent = sent.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let address = (*email).clone();
            if !validate::is_valid_email(&address) {
                error.set(Some("Please enter a valid email address".to_string()));
                return;
            }
            error.set(None);
            submitting.set(true);
            let error = error.clone();
            let sent = sent.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match auth::forgot_password(&address).await {
                    Ok(()) => sent.set(true),
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                { if *sent {
                    html! {
                        <div class="auth-card__success">
                            <h1 class="auth-card__title">{ "Check your inbox" }</h1>
                            <p>{ "If that address belongs to an account, a reset link is on its way." }</p>
                            <Link<Route> to={Route::Login} classes={classes!("auth-card__link")}>
                                { "Back to login" }
                            </Link<Route>>
                        </div>
                    }
                } else {
                    html! {
                        <form onsubmit={on_submit}>
                            <h1 class="auth-card__title">{ "Forgot password" }</h1>
                            <p class="auth-card__subtitle">{ "We'll email you a reset link." }</p>
                            { error.as_ref().map(|message| html! {
                                <div class="auth-card__error" role="alert">{ message.clone() }</div>
                            }).unwrap_or_default() }
                            <label class="auth-card__field">
                                <span>{ "Email" }</span>
                                <input
                                    type="email"
                                    required=true
                                    value={(*email).clone()}
                                    oninput={on_email}
                                    placeholder="you@example.com"
                                />
                            </label>
                            <button type="submit" class="auth-card__submit" disabled={*submitting}>
                                { if *submitting { "Sending..." } else { "Send reset link" } }
                            </button>
                            <Link<Route> to={Route::Login} classes={classes!("auth-card__link")}>
                                { "Back to login" }
                            </Link<Route>>
                        </form>
                    }
                } }
            </div>
        </div>
    }
}
