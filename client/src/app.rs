//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    admin::{AdminLoginPage, AdminPage},
    blog::BlogPage,
    detail::{ArticlePage, ProjectPage},
    home::HomePage,
    login::LoginPage,
    projects::ProjectsPage,
    signup::SignupPage,
};
use crate::state::session::restore_session;

/// Root application component.
///
/// Restores the persisted session once, before any route renders, so guards
/// and the navbar never observe a transient logged-out state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(restore_session());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/medconsult.css"/>
        <Title text="Medical Consulting"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page introuvable.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=ArticlePage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("slug")) view=ProjectPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=(StaticSegment("admin"), ParamSegment("hash")) view=AdminPage/>
                    <Route
                        path=(StaticSegment("admin"), ParamSegment("hash"), StaticSegment("login"))
                        view=AdminLoginPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
