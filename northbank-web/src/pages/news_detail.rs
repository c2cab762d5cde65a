//! Single article. Fetches once by id; any failure renders the
//! not-found panel with a way back to the list.

use crate::components::ui::{SkeletonList, Spinner};
use crate::routes::Route;
use northbank_api::models::NewsItem;
use northbank_api::news as news_api;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NewsDetailPageProps {
    pub id: i64,
}

#[function_component(NewsDetailPage)]
pub fn news_detail_page(props: &NewsDetailPageProps) -> Html {
    let item = use_state(|| None::<NewsItem>);
    let loading = use_state(|| true);

    {
        let item = item.clone();
        let loading = loading.clone();
        use_effect_with(props.id, move |&id| {
            loading.set(true);
            spawn_local(async move {
                match news_api::get_news_by_id(id).await {
                    Ok(found) => item.set(Some(found)),
                    Err(err) => {
                        log::warn!("failed to fetch news {id}: {err}");
                        item.set(None);
                    }
                }
                loading.set(false);
            });
            || {}
        });
    }

    if *loading {
        return html! {
            <div class="page page--news-detail">
                <Spinner />
                <SkeletonList rows={4} />
            </div>
        };
    }

    let Some(article) = (*item).clone() else {
        return html! {
            <div class="not-found">
                <h2 class="not-found__title">{ "Article not found" }</h2>
                <Link<Route> to={Route::News} classes={classes!("not-found__link")}>
                    { "Back to News" }
                </Link<Route>>
            </div>
        };
    };

    html! {
        <article class="page page--news-detail">
            <Link<Route> to={Route::News} classes={classes!("page__back-link")}>
                { "Back to News" }
            </Link<Route>>
            <header class="article__header">
                { article.category_label().map(|label| html! {
                    <span class="article__category">{ label.to_string() }</span>
                }).unwrap_or_default() }
                <h1 class="article__title">{ &article.title }</h1>
                <div class="article__meta">
                    <span>{ article.published_on() }</span>
                    <span>{ article.author_name() }</span>
                </div>
            </header>
            <img class="article__cover" src={article.cover_url()} alt={article.title.clone()} />
            <div class="article__body">
                <p class="article__excerpt">{ &article.excerpt }</p>
                <div class="article__contents">{ &article.contents }</div>
            </div>
        </article>
    }
}
