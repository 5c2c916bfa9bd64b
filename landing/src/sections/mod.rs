// Site sections shared between pages
// Developed by the Vermixor team (c)2025

mod contact_cta;
mod footer;
mod hero;
pub mod icons;
mod nav;
mod pricing;
mod process;
mod projects;
mod reviews;
mod services;
mod stats;
mod toast;

pub use contact_cta::ContactCta;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use pricing::{PricingSection, PricingTiers};
pub use process::{ProcessSection, ProcessSteps};
pub use projects::{FeaturedProjects, ProjectGrid};
pub use reviews::{ReviewCard, ReviewsCarousel, StarRow};
pub use services::{ServiceCard, ServicesSection};
pub use stats::Stats;
pub use toast::Toaster;
