//! News list, search and category endpoints.

use crate::error::ApiError;
use crate::http;
use crate::models::news::{Category, NewsItem};
use crate::models::paging::{Paginated, Wrapped};

pub async fn get_news(page: u32, per_page: u32) -> Result<Paginated<NewsItem>, ApiError> {
    http::fetch_json(
        http::get("/api/news").query([
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ]),
    )
    .await
}

pub async fn get_news_by_id(id: i64) -> Result<NewsItem, ApiError> {
    let envelope: Wrapped<NewsItem> =
        http::fetch_json(http::get(&format!("/api/news/{id}"))).await?;
    Ok(envelope.data)
}

/// Search parameters; unset fields stay out of the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsQuery {
    pub keyword: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category_id: Option<i64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl NewsQuery {
    /// Query pairs in a stable order, empty strings skipped.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.is_empty()) {
            pairs.push(("keyword", keyword.to_string()));
        }
        if let Some(start) = self.start_date.as_deref().filter(|d| !d.is_empty()) {
            pairs.push(("start_date", start.to_string()));
        }
        if let Some(end) = self.end_date.as_deref().filter(|d| !d.is_empty()) {
            pairs.push(("end_date", end.to_string()));
        }
        if let Some(category) = self.category_id {
            pairs.push(("category_id", category.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }
}

pub async fn search_news(query: &NewsQuery) -> Result<Paginated<NewsItem>, ApiError> {
    http::fetch_json(http::get("/api/news/search").query(query.to_pairs())).await
}

pub async fn get_categories() -> Result<Vec<Category>, ApiError> {
    let envelope: Wrapped<Vec<Category>> = http::fetch_json(http::get("/api/categories")).await?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_yields_no_pairs() {
        assert!(NewsQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn set_fields_appear_in_order() {
        let query = NewsQuery {
            keyword: Some("derby".into()),
            category_id: Some(4),
            page: Some(2),
            per_page: Some(9),
            ..NewsQuery::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("keyword", "derby".to_string()),
                ("category_id", "4".to_string()),
                ("page", "2".to_string()),
                ("per_page", "9".to_string()),
            ]
        );
    }

    #[test]
    fn blank_keyword_is_skipped() {
        let query = NewsQuery {
            keyword: Some(String::new()),
            ..NewsQuery::default()
        };
        assert!(query.to_pairs().is_empty());
    }
}
