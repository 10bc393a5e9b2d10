//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Medical Consulting"</h1>
            <p class="hero__lead">
                "Conseil, outils numériques et mise en relation pour patients, médecins et cliniques."
            </p>
            <div class="hero__actions">
                <a class="btn" href="/projects">"Découvrir nos services"</a>
                <a class="btn btn--ghost" href="/blog">"Lire le blog"</a>
            </div>
        </section>
        <section class="audiences">
            <article class="audience">
                <h2>"Patients"</h2>
                <p>"Trouvez un praticien et suivez vos rendez-vous."</p>
            </article>
            <article class="audience">
                <h2>"Médecins"</h2>
                <p>"Gérez votre activité et votre visibilité en ligne."</p>
            </article>
            <article class="audience">
                <h2>"Cliniques"</h2>
                <p>"Coordonnez vos équipes et vos services."</p>
            </article>
            <a class="btn" href="/signup">"Créer un compte"</a>
        </section>
    }
}
