//! News index: debounced keyword search, category filter, client-side
//! latest/oldest ordering of the fetched page, prev/next pagination.

use crate::components::news::NewsCard;
use crate::components::ui::{EmptyState, SkeletonList};
use crate::context::use_toast;
use crate::state::RequestSeq;
use gloo_timers::callback::Timeout;
use northbank_api::config::PAGE_SIZE;
use northbank_api::models::news::sort_by_published;
use northbank_api::models::{Category, NewsItem, PageMeta};
use northbank_api::news as news_api;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::TargetCast;
use yew::prelude::*;

/// Keystrokes settle for this long before a search fires.
const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Latest,
    Oldest,
}

#[function_component(NewsPage)]
pub fn news_page() -> Html {
    let toast = use_toast();
    let items = use_state(Vec::<NewsItem>::new);
    let meta = use_state(|| None::<PageMeta>);
    let loading = use_state(|| true);
    let categories = use_state(Vec::<Category>::new);
    let keyword = use_state(String::new);
    let category = use_state(|| None::<i64>);
    let sort = use_state(|| SortOrder::Latest);
    let page = use_state(|| 1_u32);
    let seq = use_mut_ref(RequestSeq::default);

    {
        let categories = categories.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match news_api::get_categories().await {
                    Ok(list) => categories.set(list),
                    Err(err) => log::warn!("failed to fetch news categories: {err}"),
                }
            });
            || {}
        });
    }

    // Debounced fetch: the timeout resets on every keystroke, and the
    // token from a superseded fetch keeps its late response out.
    {
        let items = items.clone();
        let meta = meta.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let seq = seq.clone();
        use_effect_with(
            ((*keyword).clone(), *category, *page),
            move |(keyword, category, page)| {
                loading.set(true);
                let query = news_api::NewsQuery {
                    keyword: Some(keyword.clone()),
                    category_id: *category,
                    page: Some(*page),
                    per_page: Some(PAGE_SIZE),
                    ..news_api::NewsQuery::default()
                };
                let token = seq.borrow().issue();
                let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                    spawn_local(async move {
                        let result = news_api::search_news(&query).await;
                        if !seq.borrow().is_current(token) {
                            log::debug!("discarding superseded news response");
                            return;
                        }
                        match result {
                            Ok(response) => {
                                items.set(response.data);
                                meta.set(Some(response.meta));
                            }
                            Err(err) => {
                                log::warn!("failed to fetch news: {err}");
                                toast.error("Failed to load news articles.");
                            }
                        }
                        loading.set(false);
                    });
                });
                move || drop(timer)
            },
        );
    }

    let on_keyword = {
        let keyword = keyword.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                keyword.set(input.value());
                page.set(1);
            }
        })
    };
    let on_category = {
        let category = category.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                category.set(select.value().parse::<i64>().ok());
                page.set(1);
            }
        })
    };
    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                sort.set(if select.value() == "oldest" {
                    SortOrder::Oldest
                } else {
                    SortOrder::Latest
                });
            }
        })
    };
    let go_to = |target: u32| {
        let page = page.clone();
        let meta = (*meta).clone();
        Callback::from(move |_| {
            let last = meta.as_ref().map_or(1, |m| m.last_page);
            if target >= 1 && target <= last {
                page.set(target);
            }
        })
    };

    // Ordering is applied to the page on screen, not to what the backend
    // returns next.
    let mut display = (*items).clone();
    sort_by_published(&mut display, *sort == SortOrder::Oldest);

    let pagination = meta.as_ref().filter(|m| m.last_page > 1).map(|m| {
        html! {
            <nav class="pagination" aria-label="News pages">
                <button
                    type="button"
                    class="pagination__button"
                    disabled={*page == 1}
                    onclick={go_to(page.saturating_sub(1))}
                >
                    { "Previous" }
                </button>
                <span class="pagination__status">
                    { format!("Page {} of {}", m.current_page, m.last_page) }
                </span>
                <button
                    type="button"
                    class="pagination__button"
                    disabled={*page >= m.last_page}
                    onclick={go_to(*page + 1)}
                >
                    { "Next" }
                </button>
            </nav>
        }
    });

    html! {
        <div class="page page--news">
            <header class="page__header">
                <h2 class="page__title">{ "News & Updates" }</h2>
            </header>

            <div class="news-filters">
                <input
                    type="search"
                    class="news-filters__search"
                    placeholder="Search news..."
                    value={(*keyword).clone()}
                    oninput={on_keyword}
                />
                <select class="news-filters__category" onchange={on_category}>
                    <option value="" selected={category.is_none()}>{ "All Categories" }</option>
                    { for categories.iter().map(|cat| html! {
                        <option
                            value={cat.id.to_string()}
                            selected={*category == Some(cat.id)}
                        >
                            { &cat.name }
                        </option>
                    }) }
                </select>
                <select class="news-filters__sort" onchange={on_sort}>
                    <option value="latest" selected={*sort == SortOrder::Latest}>{ "Latest First" }</option>
                    <option value="oldest" selected={*sort == SortOrder::Oldest}>{ "Oldest First" }</option>
                </select>
            </div>

            { if *loading && display.is_empty() {
                html! { <SkeletonList rows={6} /> }
            } else if display.is_empty() {
                html! {
                    <EmptyState
                        title="No news found"
                        message="Try adjusting your search or filters"
                    />
                }
            } else {
                html! {
                    <div class="news-grid">
                        { for display.iter().map(|item| html! {
                            <NewsCard key={item.id} item={item.clone()} />
                        }) }
                    </div>
                }
            } }

            { pagination.unwrap_or_default() }
        </div>
    }
}
