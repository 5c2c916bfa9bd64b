// Catch-all for unknown routes
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    tracing::warn!("no route for {path}");

    view! {
        <section class="section not-found">
            <h1 class="not-found-code gradient-text">"404"</h1>
            <p class="section-subtitle">"Oops! Page not found"</p>
            <a href="/" class="btn btn-primary">"Return to Home"</a>
        </section>
    }
}
