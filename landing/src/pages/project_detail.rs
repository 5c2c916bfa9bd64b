// Project detail - a single case study looked up by id
use crate::sections::ContactCta;
use crate::sections::icons::{ICON_CHEVRON_LEFT, Svg};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use vermixor::catalog;
use vermixor::types::Project;

use super::NotFoundPage;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let id = params.read().get("id").unwrap_or_default();
        match catalog::embedded().project(&id) {
            Some(project) => view! { <CaseStudy project=project /> }.into_any(),
            None => view! { <NotFoundPage /> }.into_any(),
        }
    }
}

#[component]
fn CaseStudy(project: &'static Project) -> impl IntoView {
    view! {
        <section class="page-hero">
            <a href="/projects" class="back-link">
                <Svg path=ICON_CHEVRON_LEFT size="16" />
                "All projects"
            </a>
            <span class="project-category">{project.category.as_str()}</span>
            <h1 class="hero-title">{project.title.as_str()}</h1>
            <p class="hero-subtitle">{project.client.as_str()}</p>
        </section>

        <section class="section">
            <div class="two-column">
                <div>
                    <h2 class="section-title">"The Project"</h2>
                    <p class="prose">{project.description.as_str()}</p>
                    <h3 class="card-title">"Technologies"</h3>
                    <div class="tag-list">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| view! { <span class="tag">{tech.as_str()}</span> })
                            .collect_view()}
                    </div>
                </div>
                <div class="card">
                    <h3 class="card-title">"Results"</h3>
                    <dl class="project-results project-results-lg">
                        {project
                            .results
                            .iter()
                            .map(|result| {
                                view! {
                                    <div class="project-result">
                                        <dd>{result.value.as_str()}</dd>
                                        <dt>{result.metric.as_str()}</dt>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        </section>

        <ContactCta title="Have a Similar Project in Mind?" />
    }
}
