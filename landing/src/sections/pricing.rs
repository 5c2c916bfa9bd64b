use leptos::prelude::*;
use vermixor::catalog;
use vermixor::types::PricingTier;

use super::icons::{ICON_CHECK, Svg};

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section class="section" id="pricing">
            <div class="section-header">
                <h2 class="section-title">"Simple, " <span class="gradient-text">"Transparent"</span> " Pricing"</h2>
                <p class="section-subtitle">"Pick a starting point. Every quote is tailored to your project."</p>
            </div>
            <PricingTiers />
        </section>
    }
}

#[component]
pub fn PricingTiers() -> impl IntoView {
    let tiers = &catalog::embedded().pricing;

    view! {
        <div class="pricing-grid">
            {tiers.iter().map(|tier| view! { <TierCard tier=tier /> }).collect_view()}
        </div>
    }
}

#[component]
fn TierCard(tier: &'static PricingTier) -> impl IntoView {
    view! {
        <article class="card pricing-card" class:popular=tier.popular>
            {tier.popular.then(|| view! { <span class="popular-badge">"Most Popular"</span> })}
            <h3 class="card-title">{tier.tier.as_str()}</h3>
            <p class="card-text">{tier.description.as_str()}</p>
            <div class="price">
                <span class="price-amount">{tier.price.display()}</span>
                <span class="price-duration">{tier.duration.as_str()}</span>
            </div>
            <ul class="check-list">
                {tier
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
            <a
                href="/contact"
                class=if tier.popular { "btn btn-primary btn-block" } else { "btn btn-outline btn-block" }
            >
                {tier.price.cta_label()}
            </a>
        </article>
    }
}
