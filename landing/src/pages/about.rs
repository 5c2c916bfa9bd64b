// About page - mission, values and the team
use crate::sections::ContactCta;
use crate::sections::icons::{ICON_CHECK, Svg};
use leptos::prelude::*;
use vermixor::catalog;

#[component]
pub fn AboutPage() -> impl IntoView {
    let catalog = catalog::embedded();

    view! {
        <section class="page-hero">
            <h1 class="hero-title">"About " <span class="gradient-text">"Vermixor"</span></h1>
            <p class="hero-subtitle">
                "A small, senior team building digital products for businesses that want to grow."
            </p>
        </section>

        <section class="section">
            <div class="two-column">
                <div>
                    <h2 class="section-title">"Our Mission"</h2>
                    {catalog
                        .mission
                        .paragraphs
                        .iter()
                        .map(|p| view! { <p class="prose">{p.as_str()}</p> })
                        .collect_view()}
                </div>
                <div class="card">
                    <h3 class="card-title">"We Commit To"</h3>
                    <ul class="check-list">
                        {catalog
                            .mission
                            .commitments
                            .iter()
                            .map(|c| {
                                view! {
                                    <li>
                                        <Svg path=ICON_CHECK size="16" class="check" />
                                        {c.as_str()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>

        <section class="section section-muted">
            <div class="section-header">
                <h2 class="section-title">"Our " <span class="gradient-text">"Values"</span></h2>
            </div>
            <div class="card-grid">
                {catalog
                    .values
                    .iter()
                    .map(|value| {
                        view! {
                            <article class="card">
                                <h3 class="card-title">{value.title.as_str()}</h3>
                                <p class="card-text">{value.description.as_str()}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <div class="section-header">
                <h2 class="section-title">"Meet the " <span class="gradient-text">"Team"</span></h2>
            </div>
            <div class="card-grid">
                {catalog
                    .team
                    .iter()
                    .map(|member| {
                        view! {
                            <article class="card team-card">
                                <span class="avatar avatar-lg">{member.initials()}</span>
                                <h3 class="card-title">{member.name.as_str()}</h3>
                                <p class="team-role">{member.role.as_str()}</p>
                                <p class="card-text">{member.bio.as_str()}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <ContactCta title="Let's Build Something Together" />
    }
}
