// Services overview - offerings, approach and tech stack
use crate::sections::icons::{ICON_CHECK, Svg};
use crate::sections::{ContactCta, ProcessSteps, ServiceCard};
use leptos::prelude::*;
use vermixor::catalog;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let catalog = catalog::embedded();

    view! {
        <section class="page-hero">
            <h1 class="hero-title">"Our " <span class="gradient-text">"Services"</span></h1>
            <p class="hero-subtitle">
                "Everything you need to launch, grow and scale your digital presence."
            </p>
        </section>

        <section class="section">
            <div class="card-grid">
                {catalog
                    .services
                    .iter()
                    .map(|service| view! { <ServiceCard service=service /> })
                    .collect_view()}
            </div>
        </section>

        <section class="section section-muted">
            <div class="two-column">
                <div>
                    <h2 class="section-title">"Our " <span class="gradient-text">"Approach"</span></h2>
                    <ul class="check-list">
                        {catalog
                            .process_benefits
                            .iter()
                            .map(|benefit| {
                                view! {
                                    <li>
                                        <Svg path=ICON_CHECK size="16" class="check" />
                                        {benefit.as_str()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <ProcessSteps steps=catalog.process.as_slice() />
            </div>
        </section>

        <section class="section">
            <div class="section-header">
                <h2 class="section-title">"Technologies We " <span class="gradient-text">"Use"</span></h2>
            </div>
            <div class="card-grid">
                {catalog
                    .tech_stack
                    .iter()
                    .map(|stack| {
                        view! {
                            <article class="card">
                                <h3 class="card-title">{stack.category.as_str()}</h3>
                                <div class="tag-list">
                                    {stack
                                        .technologies
                                        .iter()
                                        .map(|tech| view! { <span class="tag">{tech.as_str()}</span> })
                                        .collect_view()}
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <ContactCta />
    }
}
