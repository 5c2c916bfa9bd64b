// Pricing - tiers, add-ons and FAQ
use crate::sections::icons::{ICON_CHECK, Svg};
use crate::sections::{ContactCta, PricingTiers};
use leptos::prelude::*;
use vermixor::catalog;
use vermixor::types::Faq;

#[component]
pub fn PricingPage() -> impl IntoView {
    let catalog = catalog::embedded();

    view! {
        <section class="page-hero">
            <h1 class="hero-title">"Plans & " <span class="gradient-text">"Pricing"</span></h1>
            <p class="hero-subtitle">
                "Transparent starting prices. Every project gets a detailed quote before work begins."
            </p>
        </section>

        <section class="section">
            <PricingTiers />
        </section>

        <section class="section section-muted">
            <div class="section-header">
                <h2 class="section-title">"Add-Ons"</h2>
                <p class="section-subtitle">"Extend any package with the features you need."</p>
            </div>
            <div class="card-grid">
                {catalog
                    .add_ons
                    .iter()
                    .map(|add_on| {
                        view! {
                            <article class="card">
                                <div class="card-heading">
                                    <h3 class="card-title">{add_on.title.as_str()}</h3>
                                    <span class="price-tag">{add_on.price.as_str()}</span>
                                </div>
                                <p class="card-text">{add_on.description.as_str()}</p>
                                <ul class="check-list">
                                    {add_on
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
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <div class="section-header">
                <h2 class="section-title">"Frequently Asked " <span class="gradient-text">"Questions"</span></h2>
            </div>
            <div class="faq-list">
                {catalog.faqs.iter().map(|faq| view! { <FaqItem faq=faq /> }).collect_view()}
            </div>
        </section>

        <ContactCta title="Not Sure Which Plan Fits?" cta="Get a Custom Quote" />
    }
}

#[component]
fn FaqItem(faq: &'static Faq) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="faq-item" class:open=move || open.get()>
            <button class="faq-question" on:click=move |_| set_open.update(|o| *o = !*o)>
                {faq.question.as_str()}
                <span class="faq-toggle">{move || if open.get() { "-" } else { "+" }}</span>
            </button>
            <Show when=move || open.get()>
                <p class="faq-answer">{faq.answer.as_str()}</p>
            </Show>
        </div>
    }
}
