//! Account settings: read-only email plus the change-password form. The
//! field checks run before any network call goes out.

use crate::context::use_session;
use crate::routes::Route;
use northbank_api::{ApiError, auth, validate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;
use yew_router::prelude::*;

/// First client-side problem with the change-password form, if any.
fn form_error(current: &str, new: &str, confirm: &str) -> Option<&'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Some("All fields are required");
    }
    if new != confirm {
        return Some("New password and confirmation do not match");
    }
    if new.chars().count() < validate::MIN_PASSWORD_LEN {
        return Some("Password must be at least 8 characters long");
    }
    None
}

fn server_error_message(err: &ApiError) -> String {
    let messages = err.field_messages();
    if messages.is_empty() {
        err.to_string()
    } else {
        messages.join(", ")
    }
}

#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let session = use_session();
    let current = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<&'static str>);
    let submitting = use_state(|| false);

    let email = session
        .session()
        .map(|s| s.user.email.clone())
        .unwrap_or_default();

    let bind = |target: &UseStateHandle<String>| {
        let target = target.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                target.set(input.value());
                error.set(None);
                success.set(None);
            }
        })
    };
    let on_current = bind(&current);
    let on_new = bind(&new_password);
    let on_confirm = bind(&confirm);

    let on_submit = {
        let current = current.clone();
        let new_password = new_password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let success = success.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            error.set(None);
            success.set(None);
            let current_value = (*current).clone();
            let new_value = (*new_password).clone();
            let confirm_value = (*confirm).clone();
            if let Some(problem) = form_error(&current_value, &new_value, &confirm_value) {
                error.set(Some(problem.to_string()));
                return;
            }
            submitting.set(true);
            let current = current.clone();
            let new_password = new_password.clone();
            let confirm = confirm.clone();
            let error = error.clone();
            let success = success.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match auth::update_password(&current_value, &new_value, &confirm_value).await {
                    Ok(()) => {
                        success.set(Some("Password updated successfully!"));
                        current.set(String::new());
                        new_password.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(err) => {
                        log::warn!("password update failed: {err}");
                        error.set(Some(server_error_message(&err)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="page page--account">
            <Link<Route> to={Route::Profile} classes={classes!("page__back-link")}>
                { "Back to Profile" }
            </Link<Route>>
            <header class="page__header">
                <h2 class="page__title">{ "Account Settings" }</h2>
                <p class="page__subtitle">{ "Manage your login and security preferences" }</p>
            </header>

            <form class="account-form" onsubmit={on_submit}>
                <label class="field">
                    <span>{ "Email Address" }</span>
                    <input type="email" value={email} disabled=true />
                    <small class="field__note">{ "Read only" }</small>
                </label>

                <h3 class="account-form__section-title">{ "Change Password" }</h3>

                <label class="field">
                    <span>{ "Current Password" }</span>
                    <input
                        type="password"
                        value={(*current).clone()}
                        oninput={on_current}
                        placeholder="Enter current password"
                    />
                </label>
                <label class="field">
                    <span>{ "New Password" }</span>
                    <input
                        type="password"
                        value={(*new_password).clone()}
                        oninput={on_new}
                        placeholder="Enter new password"
                    />
                </label>
                <label class="field">
                    <span>{ "Confirm New Password" }</span>
                    <input
                        type="password"
                        value={(*confirm).clone()}
                        oninput={on_confirm}
                        placeholder="Confirm new password"
                    />
                </label>

                { error.as_ref().map(|message| html! {
                    <div class="form-alert form-alert--error" role="alert">{ message.clone() }</div>
                }).unwrap_or_default() }
                { success.map(|message| html! {
                    <div class="form-alert form-alert--success" role="status">{ message }</div>
                }).unwrap_or_default() }

                <button type="submit" class="account-form__submit" disabled={*submitting}>
                    { if *submitting { "Saving..." } else { "Update Password" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_are_required() {
        assert_eq!(
            form_error("", "longenough", "longenough"),
            Some("All fields are required")
        );
    }

    #[test]
    fn mismatch_is_reported_before_length() {
        assert_eq!(
            form_error("old", "longenough", "different"),
            Some("New password and confirmation do not match")
        );
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert_eq!(
            form_error("old", "short", "short"),
            Some("Password must be at least 8 characters long")
        );
        assert_eq!(form_error("old", "longenough", "longenough"), None);
    }
}
