//! Session bootstrap: who is logged in, merged with their membership
//! profile into one immutable value.

use crate::error::ApiError;
use crate::models::user::{Profile, User};
use crate::{auth, config, profile};

/// Status shown when the account has no membership profile.
pub const INACTIVE_STATUS: &str = "inactive";

const GUEST_ROLE: &str = "guest";

/// The bootstrapped session: account identity plus the membership fields
/// the profile contributes. Built once per bootstrap, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub member_number: Option<String>,
    pub status: Option<String>,
}

impl Session {
    /// Merge the profile into the account record. A missing profile means
    /// an inactive, non-member session; it is not an error.
    #[must_use]
    pub fn from_parts(user: User, profile: Option<Profile>) -> Self {
        let (member_number, status) = match profile {
            Some(profile) => (
                profile.member_number.or_else(|| user.member_number.clone()),
                profile.status.or_else(|| user.status.clone()),
            ),
            None => (user.member_number.clone(), user.status.clone()),
        };
        Session {
            user,
            member_number,
            status,
        }
    }

    /// Membership gate: a member number is present and the account does
    /// not carry the guest role. Member-only views require this.
    #[must_use]
    pub fn is_member(&self) -> bool {
        self.member_number.is_some() && !self.user.has_role(GUEST_ROLE)
    }

    #[must_use]
    pub fn display_status(&self) -> &str {
        self.status.as_deref().unwrap_or(INACTIVE_STATUS)
    }

    /// Payload encoded into the member card QR. `None` for non-members.
    #[must_use]
    pub fn qr_payload(&self) -> Option<String> {
        if !self.is_member() {
            return None;
        }
        self.member_number
            .as_deref()
            .map(config::member_qr_payload)
    }
}

/// The two-step bootstrap pipeline: fetch the account, then its profile,
/// then merge. Only the account fetch can fail the bootstrap; a profile
/// failure logs and degrades to an inactive session.
pub async fn bootstrap() -> Result<Session, ApiError> {
    let user = auth::get_user().await?;
    let profile = match profile::get_profile(user.id).await {
        Ok(profile) => Some(profile),
        Err(err) => {
            log::info!("no profile for user {}; treating as inactive: {err}", user.id);
            None
        }
    };
    Ok(Session::from_parts(user, profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[&str], member_number: Option<&str>) -> User {
        User {
            id: 12,
            name: "Ian Wright".into(),
            email: "ian@example.com".into(),
            role: roles.iter().map(ToString::to_string).collect(),
            member_number: member_number.map(ToString::to_string),
            status: None,
        }
    }

    fn profile(member_number: Option<&str>, status: Option<&str>) -> Profile {
        Profile {
            member_number: member_number.map(ToString::to_string),
            status: status.map(ToString::to_string),
            ..Profile::default()
        }
    }

    #[test]
    fn profile_fields_merge_into_session() {
        let session = Session::from_parts(
            user(&["member"], None),
            Some(profile(Some("8092124"), Some("active"))),
        );
        assert_eq!(session.member_number.as_deref(), Some("8092124"));
        assert_eq!(session.display_status(), "active");
        assert!(session.is_member());
    }

    #[test]
    fn missing_profile_is_inactive_not_an_error() {
        let session = Session::from_parts(user(&["member"], None), None);
        assert_eq!(session.member_number, None);
        assert_eq!(session.display_status(), INACTIVE_STATUS);
        assert!(!session.is_member());
    }

    #[test]
    fn guest_role_blocks_membership_even_with_number() {
        let session = Session::from_parts(
            user(&["Guest"], None),
            Some(profile(Some("8092124"), Some("active"))),
        );
        assert!(!session.is_member());
        assert_eq!(session.qr_payload(), None);
    }

    #[test]
    fn qr_payload_carries_member_number() {
        let session = Session::from_parts(
            user(&["member"], None),
            Some(profile(Some("8092124"), Some("active"))),
        );
        let payload = session.qr_payload().expect("member payload");
        assert!(payload.ends_with("/member/verify/8092124"));
    }
}
