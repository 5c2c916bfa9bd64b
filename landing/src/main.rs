// Vermixor agency site, Leptos 0.8 Edition
// Developed by the Vermixor team (c)2025

mod browser;
mod logging;
mod pages;
mod sections;
mod state;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::*;
use sections::{Footer, Nav, Toaster};
use state::AppContext;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let catalog = vermixor::catalog::embedded();
    tracing::info!(
        version = %catalog.version,
        theme = %state::site().default_theme().id(),
        "vermixor landing starting"
    );

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/services/:slug") view=ServiceDetailPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/projects/:id") view=ProjectDetailPage />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/reviews") view=ReviewsPage />
                </Routes>
            </main>
            <Footer />
            <Toaster />
        </Router>
    }
}
