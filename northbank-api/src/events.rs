//! Club event endpoints.

use crate::error::ApiError;
use crate::http;
use crate::models::event::{Event, EventCategory};
use crate::models::paging::{Paginated, Wrapped};

pub async fn get_events(
    page: u32,
    per_page: u32,
    category: Option<i64>,
) -> Result<Paginated<Event>, ApiError> {
    let mut query = vec![
        ("page", page.to_string()),
        ("per_page", per_page.to_string()),
    ];
    if let Some(category) = category {
        query.push(("category_id", category.to_string()));
    }
    http::fetch_json(http::get("/api/events").query(query)).await
}

pub async fn get_event_by_id(id: i64) -> Result<Event, ApiError> {
    let envelope: Wrapped<Event> =
        http::fetch_json(http::get(&format!("/api/events/{id}"))).await?;
    Ok(envelope.data)
}

pub async fn get_event_categories() -> Result<Vec<EventCategory>, ApiError> {
    let envelope: Wrapped<Vec<EventCategory>> =
        http::fetch_json(http::get("/api/event-categories")).await?;
    Ok(envelope.data)
}
