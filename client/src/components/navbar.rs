//! Site header with navigation links and the session widget.

use leptos::prelude::*;

use crate::state::session::{SessionState, greeting};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_logout = move |_| {
        session.update(|s| {
            if let Err(err) = s.logout() {
                log::warn!("logout not persisted: {err}");
            }
        });
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"Medical Consulting"</a>
            <nav class="navbar__links">
                <a href="/blog">"Blog"</a>
                <a href="/projects">"Services"</a>
            </nav>
            <div class="navbar__session">
                <Show
                    when=move || session.with(SessionState::is_authenticated)
                    fallback=|| {
                        view! {
                            <a class="btn btn--ghost" href="/login">"Connexion"</a>
                            <a class="btn" href="/signup">"Inscription"</a>
                        }
                    }
                >
                    <span class="navbar__user">
                        {move || session.with(greeting).unwrap_or_default()}
                    </span>
                    <button class="btn btn--ghost" on:click=on_logout>"Déconnexion"</button>
                </Show>
            </div>
        </header>
    }
}
