// Portfolio - every case study plus portfolio-wide highlights
use crate::sections::{ContactCta, ProjectGrid};
use leptos::prelude::*;
use vermixor::catalog;
use vermixor::types::Project;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let catalog = catalog::embedded();
    let all: Vec<&Project> = catalog.projects.iter().collect();

    view! {
        <section class="page-hero">
            <h1 class="hero-title">"Our " <span class="gradient-text">"Work"</span></h1>
            <p class="hero-subtitle">
                "Case studies from projects that moved the numbers that matter."
            </p>
        </section>

        <section class="section">
            <ProjectGrid projects=all />
        </section>

        <section class="section section-muted">
            <div class="section-header">
                <h2 class="section-title">"Why Clients " <span class="gradient-text">"Choose Us"</span></h2>
            </div>
            <div class="card-grid">
                {catalog
                    .highlights
                    .iter()
                    .map(|highlight| {
                        view! {
                            <article class="card highlight-card">
                                <p class="highlight-value">{highlight.value.as_str()}</p>
                                <h3 class="card-title">{highlight.metric.as_str()}</h3>
                                <p class="card-text">{highlight.description.as_str()}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <ContactCta title="Want Results Like These?" />
    }
}
