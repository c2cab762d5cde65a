//! News articles and their categories.

use crate::config;
use crate::models::{format_date, timestamp_millis};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub contents: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl NewsItem {
    /// Cover image URL; prefers the backend-resolved `image_url`.
    #[must_use]
    pub fn cover_url(&self) -> String {
        config::image_url(self.image_url.as_deref().or(self.image.as_deref()))
    }

    #[must_use]
    pub fn published_on(&self) -> String {
        format_date(&self.created_at)
    }

    /// First category name, the one the card badge shows.
    #[must_use]
    pub fn category_label(&self) -> Option<&str> {
        self.categories.first().map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("", |a| a.name.as_str())
    }

    /// Sort key for the latest/oldest toggle; unparseable dates sort first.
    #[must_use]
    pub fn published_ts(&self) -> i64 {
        timestamp_millis(&self.created_at).unwrap_or(0)
    }
}

/// Client-side ordering of one fetched page. The backend serves latest
/// first; the oldest-first toggle reorders only what is on screen.
pub fn sort_by_published(items: &mut [NewsItem], oldest_first: bool) {
    items.sort_by_key(NewsItem::published_ts);
    if !oldest_first {
        items.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, created_at: &str) -> NewsItem {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Story {id}"),
            "created_at": created_at,
        }))
        .unwrap()
    }

    #[test]
    fn sort_orders_both_directions() {
        let mut items = vec![
            item(1, "2026-01-05T10:00:00Z"),
            item(2, "2026-03-01T10:00:00Z"),
            item(3, "2025-11-20T10:00:00Z"),
        ];
        sort_by_published(&mut items, true);
        assert_eq!(
            items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
        sort_by_published(&mut items, false);
        assert_eq!(
            items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn category_label_takes_first() {
        let news: NewsItem = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Derby preview",
            "categories": [
                { "id": 4, "name": "Matchday", "slug": "matchday" },
                { "id": 9, "name": "Club", "slug": "club" }
            ]
        }))
        .unwrap();
        assert_eq!(news.category_label(), Some("Matchday"));
    }
}
