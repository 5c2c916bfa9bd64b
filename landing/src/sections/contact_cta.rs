use leptos::prelude::*;

use super::icons::{ICON_ARROW_RIGHT, ICON_CALENDAR, Svg};
use crate::state::site;

/// Closing call to action. Detail pages pass their own copy.
#[component]
pub fn ContactCta(
    #[prop(default = "Ready to Start Your Project?")] title: &'static str,
    #[prop(default = "Tell us what you're building and we'll reply within 24 hours.")]
    text: &'static str,
    #[prop(default = "Get a Free Quote")] cta: &'static str,
) -> impl IntoView {
    view! {
        <section class="section cta-section">
            <div class="cta-card">
                <h2 class="section-title">{title}</h2>
                <p class="section-subtitle">{text}</p>
                <div class="hero-actions">
                    <a href="/contact" class="btn btn-primary">
                        {cta}
                        <Svg path=ICON_ARROW_RIGHT size="18" />
                    </a>
                    <a
                        href=site().brand.calendly_url.as_str()
                        target="_blank"
                        rel="noopener"
                        class="btn btn-outline"
                    >
                        <Svg path=ICON_CALENDAR size="18" />
                        "Book a Call"
                    </a>
                </div>
            </div>
        </section>
    }
}
