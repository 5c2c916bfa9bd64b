// Landing page routes
// Developed by the Vermixor team (c)2025

mod about;
mod contact;
mod home;
mod not_found;
mod pricing;
mod project_detail;
mod projects;
mod reviews;
mod service_detail;
mod services;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use reviews::ReviewsPage;
pub use service_detail::ServiceDetailPage;
pub use services::ServicesPage;
