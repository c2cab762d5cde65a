//! Build-time configuration and club identity constants.

use once_cell::sync::Lazy;

/// Fallback when `NORTHBANK_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Team the club supports; drives the home/away fixture filter and
/// member-card branding.
pub const TEAM_NAME: &str = "Arsenal";

/// Display name of the supporters club itself.
pub const CLUB_NAME: &str = "Northbank Supporters Club";

/// League preselected on the standings page (Premier League).
pub const DEFAULT_LEAGUE_ID: u32 = 39;

/// Season preselected on the matches and standings pages.
pub const DEFAULT_SEASON: u16 = 2025;

/// Page size every list view requests.
pub const PAGE_SIZE: u32 = 9;

/// Image shown when a record carries no picture of its own.
pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.png";

static API_URL: Lazy<String> = Lazy::new(|| {
    option_env!("NORTHBANK_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
});

/// Base URL of the backend, without a trailing slash.
#[must_use]
pub fn api_url() -> &'static str {
    &API_URL
}

/// Resolve a backend-relative image path to an absolute URL.
///
/// Absolute URLs pass through untouched. Bare `posts/…` and `images/…`
/// paths are served from the backend's public storage disk.
#[must_use]
pub fn image_url(path: Option<&str>) -> String {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return PLACEHOLDER_IMAGE.to_string();
    };
    if path.starts_with("http") {
        return path.to_string();
    }
    let clean = path.trim_start_matches('/');
    if !clean.starts_with("storage") && (clean.starts_with("posts") || clean.starts_with("images"))
    {
        format!("{}/storage/{clean}", api_url())
    } else {
        format!("{}/{clean}", api_url())
    }
}

/// QR payload for the digital member card. The backend verifies the
/// member number on scan; nothing is signed client-side.
#[must_use]
pub fn member_qr_payload(member_number: &str) -> String {
    format!("{}/member/verify/{member_number}", api_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_has_no_trailing_slash() {
        assert!(!api_url().ends_with('/'));
    }

    #[test]
    fn image_url_falls_back_to_placeholder() {
        assert_eq!(image_url(None), PLACEHOLDER_IMAGE);
        assert_eq!(image_url(Some("")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn image_url_passes_absolute_urls_through() {
        let absolute = "https://cdn.example.com/crest.png";
        assert_eq!(image_url(Some(absolute)), absolute);
    }

    #[test]
    fn image_url_routes_bare_post_paths_through_storage() {
        let url = image_url(Some("posts/august/cover.jpg"));
        assert!(url.ends_with("/storage/posts/august/cover.jpg"));
        let already_prefixed = image_url(Some("storage/posts/cover.jpg"));
        assert!(already_prefixed.ends_with("/storage/posts/cover.jpg"));
        assert!(!already_prefixed.contains("/storage/storage/"));
    }

    #[test]
    fn qr_payload_interpolates_member_number() {
        let payload = member_qr_payload("8092124");
        assert!(payload.starts_with(api_url()));
        assert!(payload.ends_with("/member/verify/8092124"));
    }
}
