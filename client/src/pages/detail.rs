//! Detail pages for a single article or project, keyed by the `slug` route
//! parameter.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use content::{ContentItem, ContentKind, FetchState, RequestGuard};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::content_card::meta_line;

/// Back-link target and label for the listing `kind` belongs to.
fn back_link(kind: ContentKind) -> (&'static str, &'static str) {
    match kind {
        ContentKind::Article => ("/blog", "← Retour au blog"),
        ContentKind::Project => ("/projects", "← Retour aux services"),
    }
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    view! { <ContentDetail kind=ContentKind::Article/> }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    view! { <ContentDetail kind=ContentKind::Project/> }
}

#[component]
fn ContentDetail(kind: ContentKind) -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(FetchState::<ContentItem>::Idle);
    let guard = RequestGuard::new();

    let cleanup_guard = guard.clone();
    on_cleanup(move || cleanup_guard.cancel());

    // Re-fetch whenever the slug changes; a newer ticket supersedes the old one.
    Effect::new(move || {
        let Some(slug) = params.read().get("slug") else {
            return;
        };
        let ticket = guard.issue();
        state.set(FetchState::Loading);

        #[cfg(feature = "csr")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_item(kind, &slug).await;
                if guard.accepts(ticket) {
                    state.set(result.into());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (slug, ticket);
    });

    let (back_href, back_label) = back_link(kind);

    view! {
        <div class="content-detail">
            <a class="content-detail__back" href=back_href>{back_label}</a>
            {move || match state.get() {
                FetchState::Idle | FetchState::Loading => {
                    view! { <p class="content-detail__status">"Chargement..."</p> }.into_any()
                }
                FetchState::Error(message) => {
                    view! { <p class="content-detail__error">{message}</p> }.into_any()
                }
                FetchState::Success(item) => view! { <ItemBody item=item/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ItemBody(item: ContentItem) -> impl IntoView {
    let meta = meta_line(&item);
    let ContentItem { title, excerpt, image_url, category, tags, .. } = item;
    let alt = title.clone();

    view! {
        <article class="content-detail__body">
            <img class="content-detail__image" src=image_url alt=alt/>
            <span class="content-detail__category">{category}</span>
            <h1>{title}</h1>
            <p class="content-detail__meta">{meta}</p>
            <p class="content-detail__excerpt">{excerpt}</p>
            <ul class="content-detail__tags">
                {tags.into_iter().map(|tag| view! { <li>"#" {tag}</li> }).collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
