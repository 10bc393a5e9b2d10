//! Card for one article or project in a listing grid.

#[cfg(test)]
#[path = "content_card_test.rs"]
mod content_card_test;

use content::{ContentItem, ContentKind};
use leptos::prelude::*;

/// Route of the detail page for `item`.
pub fn detail_href(item: &ContentItem) -> String {
    match item.kind {
        ContentKind::Article => format!("/blog/{}", item.slug),
        ContentKind::Project => format!("/projects/{}", item.slug),
    }
}

/// `"Santé · 4 min"`, omitting the date when the backend has none.
pub fn meta_line(item: &ContentItem) -> String {
    match &item.published_at {
        Some(date) => format!("{} · {} · {}", item.author, date, item.read_time),
        None => format!("{} · {}", item.author, item.read_time),
    }
}

#[component]
pub fn ContentCard(item: ContentItem) -> impl IntoView {
    let href = detail_href(&item);
    let meta = meta_line(&item);
    let ContentItem { title, excerpt, image_url, category, tags, .. } = item;
    let alt = title.clone();

    view! {
        <article class="content-card">
            <a class="content-card__media" href=href.clone()>
                <img src=image_url alt=alt loading="lazy"/>
            </a>
            <div class="content-card__body">
                <span class="content-card__category">{category}</span>
                <h3 class="content-card__title">
                    <a href=href>{title}</a>
                </h3>
                <p class="content-card__excerpt">{excerpt}</p>
                <p class="content-card__meta">{meta}</p>
                <ul class="content-card__tags">
                    {tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        </article>
    }
}
