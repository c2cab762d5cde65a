//! Club events: meetups, watch parties, tournaments.

use crate::config;
use crate::models::{format_datetime, news::Author};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub location: String,
    /// Decimal string as served, e.g. `"50000.00"`.
    #[serde(default)]
    pub fee: String,
    #[serde(default)]
    pub start_datetime: String,
    #[serde(default)]
    pub end_datetime: String,
    #[serde(default)]
    pub member_only: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub category: Option<EventCategory>,
}

impl Event {
    #[must_use]
    pub fn cover_url(&self) -> String {
        config::image_url(self.image_url.as_deref().or(self.image.as_deref()))
    }

    #[must_use]
    pub fn starts_at(&self) -> String {
        format_datetime(&self.start_datetime)
    }

    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// Entry fee for display: `"Free"` for zero, thousands-grouped rupiah
    /// otherwise, the raw string when it is not a number.
    #[must_use]
    pub fn fee_display(&self) -> String {
        match self.fee.parse::<f64>() {
            Ok(value) if value == 0.0 => "Free".to_string(),
            Ok(value) => format!("Rp {}", group_thousands(value as u64)),
            Err(_) if self.fee.is_empty() => "Free".to_string(),
            Err(_) => self.fee.clone(),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with_fee(fee: &str) -> Event {
        serde_json::from_value(serde_json::json!({
            "id": 1, "title": "Watch party", "fee": fee
        }))
        .unwrap()
    }

    #[test]
    fn fee_display_handles_zero_and_grouping() {
        assert_eq!(event_with_fee("0.00").fee_display(), "Free");
        assert_eq!(event_with_fee("").fee_display(), "Free");
        assert_eq!(event_with_fee("50000.00").fee_display(), "Rp 50.000");
        assert_eq!(event_with_fee("1250000.00").fee_display(), "Rp 1.250.000");
        assert_eq!(event_with_fee("TBA").fee_display(), "TBA");
    }

    #[test]
    fn member_only_defaults_false() {
        let event = event_with_fee("0.00");
        assert!(!event.member_only);
    }
}
