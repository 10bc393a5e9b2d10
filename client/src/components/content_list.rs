//! Filterable listing shared by the blog and services pages.
//!
//! DATA FLOW
//! =========
//! Mount issues a fetch through a `RequestGuard`; unmount cancels it, so a
//! response landing after navigation never writes to disposed signals. A retry
//! issues a new ticket, which also drops any slower in-flight response.

use content::{ContentKind, RequestGuard};
use leptos::prelude::*;

use crate::components::content_card::ContentCard;
use crate::state::content::ContentListState;

fn start_fetch(kind: ContentKind, state: RwSignal<ContentListState>, guard: &RequestGuard) {
    let ticket = guard.issue();
    state.update(|s| s.items.begin());

    #[cfg(feature = "csr")]
    {
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_list(kind).await;
            if !guard.accepts(ticket) {
                log::debug!("stale {kind:?} list response dropped");
                return;
            }
            if let Err(err) = &result {
                log::warn!("{kind:?} list failed: {err}");
            }
            state.update(|s| s.items.finish(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (kind, ticket);
}

#[component]
pub fn ContentList(kind: ContentKind, search_placeholder: &'static str) -> impl IntoView {
    let state = RwSignal::new(ContentListState::default());
    let guard = RequestGuard::new();

    let cleanup_guard = guard.clone();
    on_cleanup(move || cleanup_guard.cancel());

    start_fetch(kind, state, &guard);

    let category_buttons = move || {
        let active = state.with(|s| s.filter.active_category.clone());
        state
            .with(ContentListState::categories)
            .into_iter()
            .map(|category| {
                let class = if category == active { "chip chip--active" } else { "chip" };
                let label = category.clone();
                view! {
                    <button class=class on:click=move |_| state.update(|s| s.select_category(&category))>
                        {label}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let cards = move || {
        state
            .with(ContentListState::visible)
            .into_iter()
            .map(|item| view! { <ContentCard item=item/> })
            .collect::<Vec<_>>()
    };

    let is_empty = move || {
        state.with(|s| s.items.data().is_some() && s.visible().is_empty())
    };

    view! {
        <section class="content-list">
            <div class="content-list__filters">
                <div class="content-list__categories">{category_buttons}</div>
                <input
                    class="content-list__search"
                    type="search"
                    placeholder=search_placeholder
                    prop:value=move || state.with(|s| s.filter.search_query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        state.update(|s| s.set_query(query));
                    }
                />
                <button
                    class="btn btn--ghost"
                    disabled=move || !state.with(|s| s.filter.is_active())
                    on:click=move |_| state.update(ContentListState::reset_filters)
                >
                    "Réinitialiser"
                </button>
                <span class="content-list__count">
                    {move || state.with(ContentListState::summary).unwrap_or_default()}
                </span>
            </div>

            <Show when=move || state.with(|s| s.items.is_loading())>
                <p class="content-list__status">"Chargement..."</p>
            </Show>
            <div
                class="content-list__error"
                hidden=move || state.with(|s| s.items.error().is_none())
            >
                <p>{move || state.with(|s| s.items.error().map(str::to_owned)).unwrap_or_default()}</p>
                <button class="btn" on:click=move |_| start_fetch(kind, state, &guard)>
                    "Réessayer"
                </button>
            </div>
            <Show when=is_empty>
                <p class="content-list__status">"Aucun résultat ne correspond à votre recherche."</p>
            </Show>

            <div class="content-list__grid">{cards}</div>
        </section>
    }
}
