//! Pagination envelopes shared by every list endpoint.

use serde::{Deserialize, Serialize};

/// Backend pagination block. `current_page` vs `last_page` is the single
/// source of truth for "load more" availability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
}

impl PageMeta {
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// `{ data: [...], meta: {...} }` list envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.meta.has_more()
    }
}

/// `{ data: ... }` detail envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wrapped<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_more_compares_current_to_last() {
        let meta = PageMeta {
            current_page: 1,
            last_page: 3,
            per_page: 9,
            total: 25,
        };
        assert!(meta.has_more());
        let last = PageMeta {
            current_page: 3,
            last_page: 3,
            per_page: 9,
            total: 25,
        };
        assert!(!last.has_more());
    }

    #[test]
    fn nine_item_page_one_of_three_has_more() {
        // The canonical events scenario: 9 items, page 1 of 3.
        let page: Paginated<u32> = serde_json::from_value(serde_json::json!({
            "data": [1, 2, 3, 4, 5, 6, 7, 8, 9],
            "meta": { "current_page": 1, "last_page": 3, "per_page": 9, "total": 25 }
        }))
        .unwrap();
        assert_eq!(page.data.len(), 9);
        assert!(page.has_more());
    }

    #[test]
    fn unknown_meta_fields_are_ignored() {
        let page: Paginated<u32> = serde_json::from_value(serde_json::json!({
            "data": [],
            "meta": {
                "current_page": 2, "last_page": 2, "per_page": 9, "total": 11,
                "from": 10, "to": 11, "links": [], "path": "/api/news"
            }
        }))
        .unwrap();
        assert!(!page.has_more());
    }
}
