//! Account-type selector shared by the login and signup forms.

use content::Role;
use leptos::prelude::*;

#[component]
pub fn RolePicker(role: RwSignal<Role>) -> impl IntoView {
    view! {
        <div class="role-picker">
            {Role::ALL
                .into_iter()
                .map(|option| {
                    let class = move || {
                        if role.get() == option { "role-picker__option role-picker__option--active" } else { "role-picker__option" }
                    };
                    view! {
                        <button type="button" class=class on:click=move |_| role.set(option)>
                            {option.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
