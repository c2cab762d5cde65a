//! Wire types for everything the backend serves. The portal never owns
//! these records; it displays them and occasionally patches a profile.

pub mod event;
pub mod football;
pub mod news;
pub mod paging;
pub mod user;

pub use event::{Event, EventCategory};
pub use football::{
    Competition, CompetitionStanding, Match, MatchReport, Season, StandingRow, StandingsGroup,
};
pub use news::{Author, Category, NewsItem};
pub use paging::{PageMeta, Paginated, Wrapped};
pub use user::{Profile, User};

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Parse the backend's timestamp flavors: RFC 3339 (with or without
/// fractional seconds) and the bare `Y-m-d H:M:S` some endpoints emit.
pub(crate) fn parse_datetime(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

/// `"Aug 5, 2026"`, or the raw string when it does not parse.
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_datetime(raw)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `"Aug 5, 2026 19:30"`, or the raw string when it does not parse.
#[must_use]
pub fn format_datetime(raw: &str) -> String {
    parse_datetime(raw)
        .map(|dt| dt.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Millisecond timestamp for countdown math.
#[must_use]
pub fn timestamp_millis(raw: &str) -> Option<i64> {
    parse_datetime(raw).map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_fraction() {
        assert_eq!(
            format_date("2026-05-09T16:30:00.000000Z"),
            "May 9, 2026"
        );
        assert_eq!(
            format_datetime("2026-05-09T16:30:00Z"),
            "May 9, 2026 16:30"
        );
    }

    #[test]
    fn parses_bare_datetime() {
        assert_eq!(format_date("2025-12-26 15:00:00"), "Dec 26, 2025");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("TBC"), "TBC");
        assert_eq!(timestamp_millis("TBC"), None);
    }
}
