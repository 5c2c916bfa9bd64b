use leptos::prelude::*;
use vermixor::Route;
use vermixor::catalog;
use vermixor::types::Service;

use super::icons::{ICON_ARROW_RIGHT, ICON_CHECK, Icon, Svg};

#[component]
pub fn ServicesSection() -> impl IntoView {
    let services = &catalog::embedded().services;

    view! {
        <section class="section" id="services">
            <div class="section-header">
                <h2 class="section-title">"What We " <span class="gradient-text">"Build"</span></h2>
                <p class="section-subtitle">
                    "End-to-end digital services, from the first wireframe to production."
                </p>
            </div>
            <div class="card-grid">
                {services.iter().map(|service| view! { <ServiceCard service=service /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <article class="card service-card">
            <div class="card-icon">
                <Icon icon=service.icon />
            </div>
            <h3 class="card-title">{service.title.as_str()}</h3>
            <p class="card-text">{service.description.as_str()}</p>
            <ul class="check-list">
                {service
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <Svg path=ICON_CHECK size="16" class="check" />
                                {feature.as_str()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a href=Route::service_detail(&service.id).path() class="card-link">
                "Learn more"
                <Svg path=ICON_ARROW_RIGHT size="16" />
            </a>
        </article>
    }
}
