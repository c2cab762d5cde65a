//! Client-side form checks that run before any network call.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum the backend enforces; checked client-side first.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Reject a new password before submission. Returns the first problem, so
/// forms show one message at a time.
#[must_use]
pub fn password_error(password: &str, confirmation: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 8 characters");
    }
    if password != confirmation {
        return Some("Passwords do not match");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_is_enforced() {
        assert!(is_valid_email("tony@example.com"));
        assert!(is_valid_email("a.b+c@club.co.id"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn short_passwords_are_rejected_before_mismatch() {
        assert_eq!(
            password_error("short", "different"),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            password_error("longenough", "mismatched"),
            Some("Passwords do not match")
        );
        assert_eq!(password_error("longenough", "longenough"), None);
    }
}
