//! Hidden admin area under `/admin/{hash}`.
//!
//! SECURITY
//! ========
//! The hash segment only hides the pages; it is compiled into the bundle and
//! grants nothing by itself. Admin authority comes from the backend token.

use content::{ContentKind, LoginForm};
use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::content_list::ContentList;
use crate::components::form_field::FormField;
use crate::util::admin::{clear_admin_session, load_admin_session};
use crate::util::guard::{admin_decision, admin_paths, install_admin_redirect};

#[component]
pub fn AdminPage() -> impl IntoView {
    let params = use_params_map();
    let hash = move || params.read().get("hash");
    install_admin_redirect(hash, use_navigate());

    let admin = RwSignal::new(load_admin_session());
    let allowed = move || admin_decision(hash().as_deref()).is_allowed();
    let login_href = move || admin_paths(&hash().unwrap_or_default()).1;

    let on_logout = move |_| {
        clear_admin_session();
        admin.set(None);
    };

    view! {
        <Show when=allowed>
            <section class="admin-page">
                <h1>"Administration"</h1>
                <Show
                    when=move || admin.with(Option::is_some)
                    fallback=move || {
                        view! {
                            <p class="admin-page__notice">
                                "Session administrateur requise. "
                                <a href=login_href>"Se connecter"</a>
                            </p>
                        }
                    }
                >
                    <p class="admin-page__user">
                        "Connecté en tant que "
                        {move || admin.with(|a| a.as_ref().map(|s| s.email.clone())).unwrap_or_default()}
                    </p>
                    <button class="btn btn--ghost" on:click=on_logout>"Déconnexion"</button>
                    <h2>"Articles"</h2>
                    <ContentList kind=ContentKind::Article search_placeholder="Rechercher un article..."/>
                    <h2>"Services"</h2>
                    <ContentList kind=ContentKind::Project search_placeholder="Rechercher un service..."/>
                </Show>
            </section>
        </Show>
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let params = use_params_map();
    let hash = move || params.read().get("hash");
    let navigate = use_navigate();
    install_admin_redirect(hash, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match (LoginForm { email: email.get(), password: password.get() }).validate() {
            Ok(credentials) => credentials,
            Err(err) => {
                info.set(err.to_string());
                return;
            }
        };
        let (dashboard, _) = admin_paths(&hash().unwrap_or_default());
        busy.set(true);
        info.set("Connexion...".to_owned());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_login(&credentials).await {
                    Ok(grant) => {
                        let admin = content::AdminSession { email: credentials.email, token: grant.token };
                        if let Err(err) = crate::util::admin::store_admin_session(&admin) {
                            log::warn!("admin session not persisted: {err}");
                        }
                        navigate(&dashboard, NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (credentials, dashboard, &navigate);
    };

    // Hidden, not unmounted: the submit handler holds the non-Send navigate closure.
    view! {
        <div class="auth-page" hidden=move || !admin_decision(hash().as_deref()).is_allowed()>
            <div class="auth-card">
                <h1>"Espace administrateur"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <FormField label="E-mail" value=email input_type="email"/>
                    <FormField label="Mot de passe" value=password input_type="password"/>
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        "Se connecter"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
