use leptos::prelude::*;
use vermixor::Route;
use vermixor::catalog;
use vermixor::types::Project;

use super::icons::{ICON_ARROW_RIGHT, Svg};

/// Technologies shown on a card before collapsing into "+N".
const TECH_PREVIEW: usize = 3;

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    let featured = catalog::embedded().featured_projects();

    view! {
        <section class="section" id="work">
            <div class="section-header">
                <h2 class="section-title">"Featured " <span class="gradient-text">"Work"</span></h2>
                <p class="section-subtitle">"Results we've delivered for clients like you."</p>
            </div>
            <ProjectGrid projects=featured />
            <div class="section-footer">
                <a href="/projects" class="btn btn-outline">
                    "View All Projects"
                    <Svg path=ICON_ARROW_RIGHT size="18" />
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectGrid(projects: Vec<&'static Project>) -> impl IntoView {
    if projects.is_empty() {
        return view! { <p class="empty-state">"No projects to show yet."</p> }.into_any();
    }
    view! {
        <div class="card-grid">
            {projects
                .into_iter()
                .map(|project| view! { <ProjectCard project=project /> })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (shown, hidden) = project.technology_preview(TECH_PREVIEW);

    view! {
        <article class="card project-card">
            <span class="project-category">{project.category.as_str()}</span>
            <h3 class="card-title">{project.title.as_str()}</h3>
            <p class="project-client">{project.client.as_str()}</p>
            <p class="card-text">{project.description.as_str()}</p>
            <dl class="project-results">
                {project
                    .results
                    .iter()
                    .map(|result| {
                        view! {
                            <div class="project-result">
                                <dt>{result.metric.as_str()}</dt>
                                <dd>{result.value.as_str()}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            <div class="tag-list">
                {shown.iter().map(|tech| view! { <span class="tag">{tech.as_str()}</span> }).collect_view()}
                {(hidden > 0).then(|| view! { <span class="tag tag-muted">"+" {hidden}</span> })}
            </div>
            <a href=Route::project_detail(&project.id).path() class="card-link">
                "View Case Study"
                <Svg path=ICON_ARROW_RIGHT size="16" />
            </a>
        </article>
    }
}
