use crate::routes::Route;
use northbank_api::models::NewsItem;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NewsCardProps {
    pub item: NewsItem,
}

/// Grid tile for one article: cover, category badge, title, excerpt,
/// date and author line.
#[function_component(NewsCard)]
pub fn news_card(props: &NewsCardProps) -> Html {
    let item = &props.item;
    let detail = Route::NewsDetail { id: item.id };
    html! {
        <article class="news-card">
            <Link<Route> to={detail.clone()} classes={classes!("news-card__cover-link")}>
                <img class="news-card__cover" src={item.cover_url()} alt={item.title.clone()} loading="lazy" />
                { item.category_label().map(|label| html! {
                    <span class="news-card__badge">{ label.to_string() }</span>
                }).unwrap_or_default() }
            </Link<Route>>
            <div class="news-card__body">
                <Link<Route> to={detail} classes={classes!("news-card__title-link")}>
                    <h3 class="news-card__title">{ &item.title }</h3>
                </Link<Route>>
                <p class="news-card__excerpt">{ &item.excerpt }</p>
                <footer class="news-card__meta">
                    <span class="news-card__date">{ item.published_on() }</span>
                    <span class="news-card__author">{ item.author_name() }</span>
                </footer>
            </div>
        </article>
    }
}
