//! Shared state machine behind every "load more" list view.
//!
//! One reducer holds the accumulated items, the busy flag that makes a
//! second trigger a no-op, and the `has_more` bit derived from the last
//! response. Stale responses are kept out by [`RequestSeq`]: each fetch is
//! issued with a fresh token, and a response whose token is no longer
//! current is dropped instead of clobbering a newer filter's results.

use std::cell::Cell;
use std::rc::Rc;
use yew::Reducible;

/// Anything a paged list can hold; the key powers duplicate elimination.
pub trait PagedItem: Clone + PartialEq {
    fn item_key(&self) -> i64;
}

impl PagedItem for northbank_api::models::NewsItem {
    fn item_key(&self) -> i64 {
        self.id
    }
}

impl PagedItem for northbank_api::models::Event {
    fn item_key(&self) -> i64 {
        self.id
    }
}

impl PagedItem for northbank_api::models::Match {
    fn item_key(&self) -> i64 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paged<T: PagedItem> {
    pub items: Vec<T>,
    pub page: u32,
    pub has_more: bool,
    pub busy: bool,
    pub loaded_once: bool,
}

impl<T: PagedItem> Default for Paged<T> {
    fn default() -> Self {
        Paged {
            items: Vec::new(),
            page: 0,
            has_more: true,
            busy: false,
            loaded_once: false,
        }
    }
}

impl<T: PagedItem> Paged<T> {
    /// Skeletons show until the first response (or failure) lands.
    #[must_use]
    pub fn initial_loading(&self) -> bool {
        !self.loaded_once
    }

    /// Next page to request when the user asks for more.
    #[must_use]
    pub fn next_page(&self) -> u32 {
        self.page + 1
    }
}

pub enum PagedMsg<T> {
    /// A fetch left the station.
    Started,
    /// A fetch for `page` came back. `replace` resets the list (page-1
    /// fetches after a filter change); otherwise items append.
    Loaded {
        page: u32,
        items: Vec<T>,
        has_more: bool,
        replace: bool,
    },
    /// The fetch failed; the view keeps what it had.
    Failed,
    /// Filter changed: drop accumulated items ahead of the page-1 refetch.
    Reset,
}

impl<T: PagedItem> Reducible for Paged<T> {
    type Action = PagedMsg<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PagedMsg::Started => next.busy = true,
            PagedMsg::Loaded {
                page,
                items,
                has_more,
                replace,
            } => {
                if replace {
                    next.items = items;
                } else {
                    for item in items {
                        if !next
                            .items
                            .iter()
                            .any(|existing| existing.item_key() == item.item_key())
                        {
                            next.items.push(item);
                        }
                    }
                }
                next.page = page;
                next.has_more = has_more;
                next.busy = false;
                next.loaded_once = true;
            }
            PagedMsg::Failed => {
                next.busy = false;
                next.loaded_once = true;
            }
            PagedMsg::Reset => {
                next.items = Vec::new();
                next.page = 0;
                next.has_more = true;
                next.loaded_once = false;
            }
        }
        next.into()
    }
}

/// Per-view fetch tokens. `issue` marks a new fetch as the latest; a
/// completion handler checks `is_current` before dispatching its result.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: Cell<u32>,
}

impl RequestSeq {
    pub fn issue(&self) -> u32 {
        let token = self.latest.get().wrapping_add(1);
        self.latest.set(token);
        token
    }

    #[must_use]
    pub fn is_current(&self, token: u32) -> bool {
        self.latest.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use northbank_api::models::NewsItem;

    fn item(id: i64) -> NewsItem {
        serde_json::from_value(serde_json::json!({
            "id": id, "title": format!("Story {id}")
        }))
        .unwrap()
    }

    fn apply(
        state: Rc<Paged<NewsItem>>,
        msg: PagedMsg<NewsItem>,
    ) -> Rc<Paged<NewsItem>> {
        state.reduce(msg)
    }

    #[test]
    fn load_more_appends_in_backend_order_without_duplicates() {
        let state = Rc::new(Paged::<NewsItem>::default());
        let state = apply(
            state,
            PagedMsg::Loaded {
                page: 1,
                items: vec![item(1), item(2), item(3)],
                has_more: true,
                replace: true,
            },
        );
        // Page 2 overlaps page 1 by one id; the duplicate is dropped.
        let state = apply(
            state,
            PagedMsg::Loaded {
                page: 2,
                items: vec![item(3), item(4), item(5)],
                has_more: false,
                replace: false,
            },
        );
        let ids: Vec<i64> = state.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(state.page, 2);
        assert!(!state.has_more);
    }

    #[test]
    fn filter_change_discards_accumulated_results()
    {
        let state = Rc::new(Paged::<NewsItem>::default());
        let state = apply(
            state,
            PagedMsg::Loaded {
                page: 1,
                items: vec![item(1), item(2)],
                has_more: true,
                replace: true,
            },
        );
        let state = apply(state, PagedMsg::Reset);
        assert!(state.items.is_empty());
        assert!(state.initial_loading());
        let state = apply(
            state,
            PagedMsg::Loaded {
                page: 1,
                items: vec![item(9)],
                has_more: false,
                replace: true,
            },
        );
        let ids: Vec<i64> = state.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![9]);
    }

    #[test]
    fn has_more_tracks_the_latest_response() {
        let state = Rc::new(Paged::<NewsItem>::default());
        assert!(state.has_more);
        let state = apply(
            state,
            PagedMsg::Loaded {
                page: 3,
                items: vec![item(1)],
                has_more: false,
                replace: false,
            },
        );
        assert!(!state.has_more);
        assert_eq!(state.next_page(), 4);
    }

    #[test]
    fn failure_clears_busy_but_keeps_items() {
        let state = Rc::new(Paged::<NewsItem>::default());
        let state = apply(
            state,
            PagedMsg::Loaded {
                page: 1,
                items: vec![item(1)],
                has_more: true,
                replace: true,
            },
        );
        let state = apply(state, PagedMsg::Started);
        assert!(state.busy);
        let state = apply(state, PagedMsg::Failed);
        assert!(!state.busy);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn request_seq_invalidates_superseded_tokens() {
        let seq = RequestSeq::default();
        let first = seq.issue();
        assert!(seq.is_current(first));
        let second = seq.issue();
        // The filter changed mid-flight: the older fetch must be dropped.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
