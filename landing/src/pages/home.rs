// Home page - hero, proof points and the main calls to action
use crate::sections::{
    ContactCta, FeaturedProjects, Hero, PricingSection, ProcessSection, ReviewsCarousel,
    ServicesSection, Stats,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Stats />
        <ServicesSection />
        <ProcessSection />
        <FeaturedProjects />
        <ReviewsCarousel />
        <PricingSection />
        <ContactCta />
    }
}
