//! Services / projects listing page.

use content::ContentKind;
use leptos::prelude::*;

use crate::components::content_list::ContentList;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <div class="listing-page">
            <h1>"Nos services"</h1>
            <p class="listing-page__lead">"Les projets que nous menons avec nos partenaires de santé."</p>
            <ContentList kind=ContentKind::Project search_placeholder="Rechercher un service..."/>
        </div>
    }
}
