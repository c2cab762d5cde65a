//! Session user and member profile records.

use crate::config;
use serde::{Deserialize, Serialize};

/// The authenticated account, as `GET /api/user` returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Vec<String>,
    #[serde(default)]
    pub member_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl User {
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}

/// `GET /api/user` wraps the record in a `user` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// Member profile; independent lifecycle from the account, merged into the
/// session at bootstrap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub member_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Profile {
    /// Absolute picture URL, falling back to the bundled placeholder.
    #[must_use]
    pub fn picture_url(&self) -> String {
        config::image_url(self.profile_picture_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_check_is_case_insensitive() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 7, "name": "Dennis", "email": "dennis@example.com", "role": ["Guest"]
        }))
        .unwrap();
        assert!(user.has_role("guest"));
        assert!(!user.has_role("admin"));
    }

    #[test]
    fn missing_role_and_member_fields_default() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 7, "name": "Dennis", "email": "dennis@example.com"
        }))
        .unwrap();
        assert!(user.role.is_empty());
        assert!(user.member_number.is_none());
    }
}
