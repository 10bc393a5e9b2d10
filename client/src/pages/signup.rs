//! Account creation for the three account types. Doctors add a specialty,
//! clinics an address.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use content::{Role, SignupForm};
use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::role_picker::RolePicker;

const CREATED_FALLBACK: &str = "Compte créé. Vous pouvez maintenant vous connecter.";

fn created_message(ack: Option<String>) -> String {
    ack.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| CREATED_FALLBACK.to_owned())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let role = RwSignal::new(Role::Patient);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let specialty = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let created = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = SignupForm {
            role: role.get(),
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            password: password.get(),
            password_confirmation: confirmation.get(),
            specialty: specialty.get(),
            address: address.get(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => {
                info.set(err.to_string());
                return;
            }
        };
        busy.set(true);
        created.set(false);
        info.set("Création du compte...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(ack) => {
                    password.set(String::new());
                    confirmation.set(String::new());
                    created.set(true);
                    info.set(created_message(ack));
                }
                Err(err) => info.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = request;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Inscription"</h1>
                <RolePicker role=role/>
                <form class="auth-form" on:submit=on_submit>
                    <FormField label="Nom" value=name/>
                    <FormField label="E-mail" value=email input_type="email"/>
                    <FormField label="Téléphone" value=phone input_type="tel"/>
                    <Show when=move || role.get() == Role::Medecin>
                        <FormField label="Spécialité" value=specialty/>
                    </Show>
                    <Show when=move || role.get() == Role::Clinique>
                        <FormField label="Adresse" value=address/>
                    </Show>
                    <FormField label="Mot de passe" value=password input_type="password"/>
                    <FormField label="Confirmation du mot de passe" value=confirmation input_type="password"/>
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        "Créer mon compte"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <Show when=move || created.get()>
                    <a class="btn" href="/login">"Se connecter"</a>
                </Show>
            </div>
        </div>
    }
}
