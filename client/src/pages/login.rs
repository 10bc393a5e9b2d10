//! Login page for patients, doctors and clinics.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use content::{LoginForm, Role};
use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::role_picker::RolePicker;
use crate::state::session::SessionState;

fn signing_in_message(role: Role) -> String {
    format!("Connexion en tant que {}...", role.label().to_lowercase())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let role = RwSignal::new(Role::Patient);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = LoginForm { email: email.get(), password: password.get() };
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(err) => {
                info.set(err.to_string());
                return;
            }
        };
        let selected = role.get();
        busy.set(true);
        info.set(signing_in_message(selected));

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(selected, &credentials).await {
                    Ok(grant) => {
                        session.update(|s| {
                            if let Err(err) = s.login(grant.user, selected, grant.token) {
                                log::warn!("session not persisted: {err}");
                            }
                        });
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (credentials, session, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Connexion"</h1>
                <RolePicker role=role/>
                <form class="auth-form" on:submit=on_submit>
                    <FormField label="E-mail" value=email input_type="email" placeholder="vous@exemple.fr"/>
                    <FormField label="Mot de passe" value=password input_type="password"/>
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        "Se connecter"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__alt">
                    "Pas encore de compte ? "
                    <a href="/signup">"Inscrivez-vous"</a>
                </p>
            </div>
        </div>
    }
}
