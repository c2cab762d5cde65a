//! Email/password sign-in. A successful login re-runs the session
//! bootstrap before navigating, so membership fields are fresh.

use crate::context::use_session;
use crate::routes::Route;
use northbank_api::{ApiError, config};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember = use_state(|| false);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let on_remember = {
        let remember = remember.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                remember.set(input.checked());
            }
        })
    };

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let remember = remember.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            error.set(None);
            submitting.set(true);
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let remember_value = *remember;
            spawn_local(async move {
                match session
                    .login(&email_value, &password_value, remember_value)
                    .await
                {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        error.set(Some(login_error_message(&err)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <form class="auth-card" onsubmit={on_submit}>
                <h1 class="auth-card__title">{ config::CLUB_NAME }</h1>
                <p class="auth-card__subtitle">{ "Sign in to your member account" }</p>

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
                <label class="auth-card__field">
                    <span>{ "Password" }</span>
                    <input
                        type="password"
                        required=true
                        value={(*password).clone()}
                        oninput={on_password}
                        placeholder="Your password"
                    />
                </label>
                <label class="auth-card__remember">
                    <input type="checkbox" checked={*remember} onchange={on_remember} />
                    <span>{ "Remember me" }</span>
                </label>

                <button type="submit" class="auth-card__submit" disabled={*submitting}>
                    { if *submitting { "Signing in..." } else { "Sign In" } }
                </button>

                <Link<Route> to={Route::ForgotPassword} classes={classes!("auth-card__link")}>
                    { "Forgot your password?" }
                </Link<Route>>
            </form>
        </div>
    }
}

fn login_error_message(err: &ApiError) -> String {
    let messages = err.field_messages();
    if messages.is_empty() {
        match err {
            ApiError::Http { status: 401 | 422, .. } => {
                "Invalid email or password".to_string()
            }
            other => other.to_string(),
        }
    } else {
        messages.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_failures_get_a_friendly_message() {
        let err = ApiError::from_status(422, r#"{"message":"These credentials do not match our records."}"#);
        assert_eq!(login_error_message(&err), "Invalid email or password");
    }

    #[test]
    fn validation_messages_pass_through() {
        let err = ApiError::from_status(
            422,
            r#"{"message":"invalid","errors":{"email":["The email field is required."]}}"#,
        );
        assert_eq!(
            login_error_message(&err),
            "The email field is required."
        );
    }
}
