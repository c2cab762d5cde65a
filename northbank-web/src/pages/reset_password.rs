//! Set a new password from an emailed reset link. Token and email arrive
//! in the query string; the 8-character and confirmation rules run before
//! any network call.

use crate::routes::Route;
use northbank_api::{auth, validate};
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
struct ResetQuery {
    #[serde(default)]
    token: String,
    #[serde(default)]
    email: String,
}

#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    let location = use_location();
    let query = location
        .as_ref()
        .and_then(|loc| loc.query::<ResetQuery>().ok())
        .unwrap_or_default();
    let link_valid = !query.token.is_empty() && !query.email.is_empty();

    let password = use_state(String::new);
    let confirmation = use_state(String::new);
    let error = use_state(|| None::<String>);
    let done = use_state(|| false);
    let submitting = use_state(|| false);

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let on_confirmation = {
        let confirmation = confirmation.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                confirmation.set(input.value());
            }
        })
    };

    let on_submit = {
        let password = password.clone();
        let confirmation = confirmation.clone();
        let error = error.clone();
        let done = done.clone();
        let submitting = submitting.clone();
        let query = query.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let new_password = (*password).clone();
            let confirm = (*confirmation).clone();
            if let Some(problem) = validate::password_error(&new_password, &confirm) {
                error.set(Some(problem.to_string()));
                return;
            }
            error.set(None);
            submitting.set(true);
            let error = error.clone();
            let done = done.clone();
            let submitting = submitting.clone();
            let query = query.clone();
            spawn_local(async move {
                let result = auth::reset_password(
                    &query.token,
                    &query.email,
                    &new_password,
                    &confirm,
                )
                .await;
                match result {
                    Ok(()) => done.set(true),
                    Err(err) => {
                        let messages = err.field_messages();
                        let message = if messages.is_empty() {
                            err.to_string()
                        } else {
                            messages.join(", ")
                        };
                        error.set(Some(message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let body = if *done {
        html! {
            <div class="auth-card__success">
                <h1 class="auth-card__title">{ "Password reset complete" }</h1>
                <p>{ "Your password has been updated. You can now log in with your new password." }</p>
                <Link<Route> to={Route::Login} classes={classes!("auth-card__link")}>
                    { "Go to login" }
                </Link<Route>>
            </div>
        }
    } else {
        html! {
            <form onsubmit={on_submit}>
                <h1 class="auth-card__title">{ "Set new password" }</h1>
                <p class="auth-card__subtitle">{ "Please enter your new password below." }</p>
                { if !link_valid {
                    html! {
                        <div class="auth-card__error" role="alert">
                            { "Invalid password reset link. Please check your email and try again." }
                        </div>
                    }
                } else {
                    Html::default()
                } }
                { error.as_ref().map(|message| html! {
                    <div class="auth-card__error" role="alert">{ message.clone() }</div>
                }).unwrap_or_default() }
                <label class="auth-card__field">
                    <span>{ "New password" }</span>
                    <input
                        type="password"
                        required=true
                        value={(*password).clone()}
                        oninput={on_password}
                        placeholder="Min 8 characters"
                    />
                </label>
                <label class="auth-card__field">
                    <span>{ "Confirm password" }</span>
                    <input
                        type="password"
                        required=true
                        value={(*confirmation).clone()}
                        oninput={on_confirmation}
                        placeholder="Confirm new password"
                    />
                </label>
                <button
                    type="submit"
                    class="auth-card__submit"
                    disabled={*submitting || !link_valid}
                >
                    { if *submitting { "Resetting..." } else { "Reset Password" } }
                </button>
            </form>
        }
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">{ body }</div>
        </div>
    }
}
