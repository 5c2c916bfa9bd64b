use leptos::prelude::*;

use super::icons::{ICON_ARROW_RIGHT, Svg};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <span class="hero-badge">"Digital agency for growing businesses"</span>
                <h1 class="hero-title">
                    "We Build Digital Products That "
                    <span class="gradient-text">"Drive Growth"</span>
                </h1>
                <p class="hero-subtitle">
                    "Custom websites, e-commerce platforms, mobile apps and AI solutions, "
                    "designed to convert and engineered to scale."
                </p>
                <div class="hero-actions">
                    <a href="/contact" class="btn btn-primary">
                        "Start Your Project"
                        <Svg path=ICON_ARROW_RIGHT size="18" />
                    </a>
                    <a href="/projects" class="btn btn-outline">"View Our Work"</a>
                </div>
            </div>
        </section>
    }
}
