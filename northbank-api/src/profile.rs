//! Member profile endpoints, including the multipart update.

use crate::error::ApiError;
use crate::http;
use crate::models::paging::Wrapped;
use crate::models::user::Profile;
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// Fetch the profile attached to a user id. A 404 here means the account
/// has no membership profile yet; callers treat that as "inactive".
pub async fn get_profile(user_id: i64) -> Result<Profile, ApiError> {
    let envelope: Wrapped<Profile> =
        http::fetch_json(http::get(&format!("/api/profile/user/{user_id}"))).await?;
    Ok(envelope.data)
}

/// Editable personal details. The picture travels as a browser `File`;
/// everything else as plain form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub phone: String,
    pub gender: String,
    pub birthdate: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub picture: Option<web_sys::File>,
}

impl ProfileUpdate {
    pub(crate) fn text_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("full_name", self.full_name.as_str()),
            ("phone", self.phone.as_str()),
            ("gender", self.gender.as_str()),
            ("birthdate", self.birthdate.as_str()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
            ("province", self.province.as_str()),
            ("country", self.country.as_str()),
        ]
    }

    fn to_form_data(&self) -> Result<FormData, ApiError> {
        let form = FormData::new().map_err(js_error)?;
        for (key, value) in self.text_fields() {
            form.append_with_str(key, value).map_err(js_error)?;
        }
        if let Some(file) = &self.picture {
            form.append_with_blob_and_filename("profile_picture", file, &file.name())
                .map_err(js_error)?;
        }
        Ok(form)
    }
}

/// Submit the profile form. Multipart: no JSON content type is set, the
/// browser supplies the boundary.
pub async fn update_profile(update: &ProfileUpdate) -> Result<Profile, ApiError> {
    http::init_csrf().await?;
    let form = update.to_form_data()?;
    let request = http::post("/api/profile")
        .body(form)
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let envelope: Wrapped<Profile> = http::fetch_json_request(request).await?;
    Ok(envelope.data)
}

pub async fn delete_profile_picture() -> Result<(), ApiError> {
    http::init_csrf().await?;
    http::fetch_unit(http::delete("/api/profile/picture")).await
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_serializes_every_text_field() {
        let update = ProfileUpdate {
            full_name: "Dennis Bergkamp".into(),
            phone: "+44 20 7619 5003".into(),
            gender: "Male".into(),
            birthdate: "1969-05-10".into(),
            address: "Hornsey Rd".into(),
            city: "London".into(),
            province: "Greater London".into(),
            country: "United Kingdom".into(),
            picture: None,
        };
        let fields = update.text_fields();
        assert_eq!(fields.len(), 8);
        assert!(fields.iter().any(|(k, v)| *k == "full_name" && *v == "Dennis Bergkamp"));
        assert!(fields.iter().any(|(k, v)| *k == "country" && *v == "United Kingdom"));
    }
}
