//! Personal details form: loads the profile, submits multipart updates,
//! manages the profile picture.

use crate::components::ui::Spinner;
use crate::context::{use_session, use_toast};
use crate::routes::Route;
use northbank_api::models::Profile;
use northbank_api::profile as profile_api;
use northbank_api::{ApiError, config, validate};
use std::collections::HashMap;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::TargetCast;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct ProfileForm {
    name: String,
    email: String,
    phone: String,
    gender: String,
    birthdate: String,
    address: String,
    city: String,
    province: String,
    country: String,
    picture_url: String,
    picture_file: Option<web_sys::File>,
}

impl ProfileForm {
    fn from_profile(profile: &Profile, fallback_name: &str, fallback_email: &str) -> Self {
        ProfileForm {
            name: profile
                .full_name
                .clone()
                .unwrap_or_else(|| fallback_name.to_string()),
            email: profile
                .email
                .clone()
                .unwrap_or_else(|| fallback_email.to_string()),
            phone: profile.phone.clone().unwrap_or_default(),
            gender: profile.gender.clone().unwrap_or_else(|| "Male".to_string()),
            birthdate: profile.birthdate.clone().unwrap_or_default(),
            address: profile.address.clone().unwrap_or_default(),
            city: profile.city.clone().unwrap_or_default(),
            province: profile.province.clone().unwrap_or_default(),
            country: profile.country.clone().unwrap_or_default(),
            picture_url: profile.picture_url(),
            picture_file: None,
        }
    }

    /// Required-field and email-shape checks, before any network call.
    fn validate(&self) -> HashMap<&'static str, &'static str> {
        let mut errors = HashMap::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Full name is required");
        }
        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone number is required");
        }
        if !validate::is_valid_email(&self.email) {
            errors.insert("email", "Please enter a valid email address");
        }
        errors
    }

    fn to_update(&self) -> profile_api::ProfileUpdate {
        profile_api::ProfileUpdate {
            full_name: self.name.clone(),
            phone: self.phone.clone(),
            gender: self.gender.clone(),
            birthdate: self.birthdate.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            province: self.province.clone(),
            country: self.country.clone(),
            picture: self.picture_file.clone(),
        }
    }
}

fn submit_error_message(err: &ApiError) -> String {
    let messages = err.field_messages();
    if messages.is_empty() {
        format!("Failed to update profile: {err}")
    } else {
        format!("Failed to update profile: {}", messages.join(", "))
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_session();
    let toast = use_toast();
    let form = use_state(ProfileForm::default);
    let errors = use_state(HashMap::<&'static str, &'static str>::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let file_input = use_node_ref();

    let user = session.session().map(|s| s.user.clone());
    let user_dep = user.clone();

    {
        let form = form.clone();
        let loading = loading.clone();
        use_effect_with(user_dep, move |user| {
            if let Some(user) = user.clone() {
                spawn_local(async move {
                    match profile_api::get_profile(user.id).await {
                        Ok(profile) => {
                            form.set(ProfileForm::from_profile(&profile, &user.name, &user.email));
                        }
                        Err(err) => {
                            log::warn!("failed to fetch profile: {err}");
                            form.set(ProfileForm {
                                name: user.name.clone(),
                                email: user.email.clone(),
                                gender: "Male".to_string(),
                                picture_url: config::image_url(None),
                                ..ProfileForm::default()
                            });
                        }
                    }
                    loading.set(false);
                });
            }
            || {}
        });
    }

    // One text-field updater; the field name picks the slot.
    let edit_field = |field: &'static str| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            match field {
                "name" => next.name = value,
                "phone" => next.phone = value,
                "gender" => next.gender = value,
                "birthdate" => next.birthdate = value,
                "address" => next.address = value,
                "city" => next.city = value,
                "province" => next.province = value,
                "country" => next.country = value,
                _ => {}
            }
            form.set(next);
            if errors.contains_key(field) {
                let mut cleared = (*errors).clone();
                cleared.remove(field);
                errors.set(cleared);
            }
        })
    };
    let input_cb = |field: &'static str| {
        let edit = edit_field(field);
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                edit.emit(input.value());
            }
        })
    };
    let textarea_cb = |field: &'static str| {
        let edit = edit_field(field);
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                edit.emit(area.value());
            }
        })
    };
    let select_cb = |field: &'static str| {
        let edit = edit_field(field);
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                edit.emit(select.value());
            }
        })
    };

    let on_pick_file = {
        let file_input = file_input.clone();
        Callback::from(move |_| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };
    let on_file_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let mut next = (*form).clone();
            if let Ok(preview) = web_sys::Url::create_object_url_with_blob(&file) {
                next.picture_url = preview;
            }
            next.picture_file = Some(file);
            form.set(next);
        })
    };
    let on_delete_picture = {
        let form = form.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to delete your profile picture?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let form = form.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match profile_api::delete_profile_picture().await {
                    Ok(()) => {
                        let mut next = (*form).clone();
                        next.picture_url = config::image_url(None);
                        next.picture_file = None;
                        form.set(next);
                        toast.success("Profile picture deleted successfully.");
                    }
                    Err(err) => {
                        log::warn!("failed to delete profile picture: {err}");
                        toast.error("Failed to delete profile picture.");
                    }
                }
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let current = (*form).clone();
            let problems = current.validate();
            if !problems.is_empty() {
                errors.set(problems);
                return;
            }
            errors.set(HashMap::new());
            saving.set(true);
            let form = form.clone();
            let saving = saving.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match profile_api::update_profile(&current.to_update()).await {
                    Ok(updated) => {
                        let mut next = (*form).clone();
                        next.picture_url = updated.picture_url();
                        next.picture_file = None;
                        form.set(next);
                        toast.success("Profile updated successfully!");
                    }
                    Err(err) => {
                        log::warn!("failed to update profile: {err}");
                        toast.error(submit_error_message(&err));
                    }
                }
                saving.set(false);
            });
        })
    };

    if user.is_none() || *loading {
        return html! { <div class="page page--profile"><Spinner /></div> };
    }

    let field_error = |field: &str| {
        errors.get(field).map(|message| html! {
            <p class="field-error">{ (*message).to_string() }</p>
        })
    };

    html! {
        <div class="page page--profile">
            <header class="page__header">
                <h2 class="page__title">{ "My Profile" }</h2>
                <p class="page__subtitle">{ "Manage your personal information" }</p>
            </header>

            <form class="profile-form" onsubmit={on_submit}>
                <section class="profile-form__identity">
                    <div class="avatar-editor">
                        <img class="avatar-editor__image" src={form.picture_url.clone()} alt="Profile" />
                        <input
                            ref={file_input.clone()}
                            type="file"
                            accept="image/*"
                            class="avatar-editor__input"
                            onchange={on_file_change}
                        />
                        <button type="button" class="avatar-editor__change" onclick={on_pick_file}>
                            { "Change photo" }
                        </button>
                        { (form.picture_url != config::image_url(None)).then(|| html! {
                            <button type="button" class="avatar-editor__delete" onclick={on_delete_picture.clone()}>
                                { "Delete photo" }
                            </button>
                        }).unwrap_or_default() }
                    </div>
                    <div class="profile-form__summary">
                        <h3>{ &form.name }</h3>
                        <p>{ &form.email }</p>
                    </div>
                    <Link<Route> to={Route::Account} classes={classes!("profile-form__account-link")}>
                        { "Edit Account" }
                    </Link<Route>>
                </section>

                <section class="profile-form__fields">
                    <h3 class="profile-form__section-title">{ "Personal Details" }</h3>
                    <div class="profile-form__grid">
                        <label class="field">
                            <span>{ "Full Name *" }</span>
                            <input type="text" value={form.name.clone()} oninput={input_cb("name")} placeholder="Enter your name" />
                            { field_error("name").unwrap_or_default() }
                        </label>
                        <label class="field">
                            <span>{ "Phone Number *" }</span>
                            <input type="tel" value={form.phone.clone()} oninput={input_cb("phone")} placeholder="Enter phone number" />
                            { field_error("phone").unwrap_or_default() }
                        </label>
                        <label class="field">
                            <span>{ "Gender" }</span>
                            <select onchange={select_cb("gender")}>
                                <option value="Male" selected={form.gender == "Male"}>{ "Male" }</option>
                                <option value="Female" selected={form.gender == "Female"}>{ "Female" }</option>
                            </select>
                        </label>
                        <label class="field">
                            <span>{ "Birthdate" }</span>
                            <input type="date" value={form.birthdate.clone()} oninput={input_cb("birthdate")} />
                        </label>
                        <label class="field field--wide">
                            <span>{ "Address" }</span>
                            <textarea rows="3" value={form.address.clone()} oninput={textarea_cb("address")} placeholder="Enter your street address" />
                        </label>
                        <label class="field">
                            <span>{ "City" }</span>
                            <input type="text" value={form.city.clone()} oninput={input_cb("city")} placeholder="Enter city" />
                        </label>
                        <label class="field">
                            <span>{ "Province" }</span>
                            <input type="text" value={form.province.clone()} oninput={input_cb("province")} placeholder="Enter province/state" />
                        </label>
                        <label class="field">
                            <span>{ "Country" }</span>
                            <input type="text" value={form.country.clone()} oninput={input_cb("country")} placeholder="Enter country" />
                        </label>
                    </div>
                    { field_error("email").unwrap_or_default() }
                    <div class="profile-form__actions">
                        <button type="submit" class="profile-form__submit" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Update Profile" } }
                        </button>
                    </div>
                </section>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_block_submission() {
        let form = ProfileForm {
            email: "ok@example.com".into(),
            ..ProfileForm::default()
        };
        let errors = form.validate();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("phone"));
        assert!(!errors.contains_key("email"));
    }

    #[test]
    fn invalid_email_is_flagged() {
        let form = ProfileForm {
            name: "Kelly Smith".into(),
            phone: "0812".into(),
            email: "not-an-email".into(),
            ..ProfileForm::default()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("email"));
    }
}
