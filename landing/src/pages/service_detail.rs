// Service detail - one page per service, driven by its catalog record
use crate::sections::icons::{ICON_CHECK, Icon, Svg};
use crate::sections::{ContactCta, ProcessSteps};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use vermixor::catalog;
use vermixor::routes::ServiceSlug;
use vermixor::types::{Service, ServiceDetail};

use super::NotFoundPage;

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        let catalog = catalog::embedded();
        let page = ServiceSlug::parse(&slug).and_then(|slug| {
            let id = slug.as_str();
            Some((catalog.service(id)?, catalog.service_detail(id)?))
        });
        match page {
            Some((service, detail)) => {
                view! { <ServiceDetailView service=service detail=detail /> }.into_any()
            }
            None => view! { <NotFoundPage /> }.into_any(),
        }
    }
}

#[component]
fn ServiceDetailView(service: &'static Service, detail: &'static ServiceDetail) -> impl IntoView {
    view! {
        <section class="page-hero">
            <div class="card-icon card-icon-lg">
                <Icon icon=service.icon />
            </div>
            <h1 class="hero-title">
                {detail.headline.as_str()} " "
                <span class="gradient-text">{detail.accent.as_str()}</span>
            </h1>
            <p class="hero-subtitle">{detail.tagline.as_str()}</p>
            <div class="hero-actions">
                <a href="/contact" class="btn btn-primary">{detail.primary_cta.as_str()}</a>
                <a href="/projects" class="btn btn-outline">{detail.secondary_cta.as_str()}</a>
            </div>
        </section>

        <section class="section">
            <div class="section-header">
                <h2 class="section-title">{detail.capabilities_title.as_str()}</h2>
            </div>
            <div class="card-grid">
                {detail
                    .capabilities
                    .iter()
                    .map(|capability| {
                        view! {
                            <article class="card">
                                <Svg path=ICON_CHECK class="check" />
                                <h3 class="card-title">{capability.title.as_str()}</h3>
                                <p class="card-text">{capability.description.as_str()}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section section-muted">
            <div class="section-header">
                <h2 class="section-title">{detail.process_title.as_str()}</h2>
            </div>
            <ProcessSteps steps=detail.process.as_slice() />
        </section>

        <ContactCta
            title=detail.closing_title.as_str()
            text=detail.closing_text.as_str()
            cta=detail.closing_cta.as_str()
        />
    }
}
