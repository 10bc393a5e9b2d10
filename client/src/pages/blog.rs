//! Blog listing page.

use content::ContentKind;
use leptos::prelude::*;

use crate::components::content_list::ContentList;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <div class="listing-page">
            <h1>"Blog"</h1>
            <p class="listing-page__lead">"Actualités et conseils de nos experts."</p>
            <ContentList kind=ContentKind::Article search_placeholder="Rechercher un article..."/>
        </div>
    }
}
