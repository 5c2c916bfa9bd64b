use leptos::prelude::*;
use vermixor::Route;
use vermixor::catalog;
use vermixor::routes::NAVIGATION;

use super::icons::{ICON_MAIL, ICON_MAP_PIN, ICON_PHONE, Svg};
use crate::state::site;

#[component]
pub fn Footer() -> impl IntoView {
    let brand = &site().brand;
    let services = &catalog::embedded().services;

    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <a href="/" class="footer-logo">{brand.name.as_str()}</a>
                    <p class="footer-tagline">
                        "Websites, apps and AI solutions that help growing businesses win online."
                    </p>
                </div>

                <div class="footer-column">
                    <h4>"Services"</h4>
                    {services
                        .iter()
                        .map(|service| {
                            view! {
                                <a href=Route::service_detail(&service.id).path()>
                                    {service.title.as_str()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer-column">
                    <h4>"Company"</h4>
                    {NAVIGATION
                        .into_iter()
                        .map(|item| view! { <a href=item.href>{item.label}</a> })
                        .collect_view()}
                    <a href="/reviews">"Reviews"</a>
                </div>

                <div class="footer-column">
                    <h4>"Contact"</h4>
                    <a href=format!("mailto:{}", brand.email) class="footer-contact">
                        <Svg path=ICON_MAIL size="16" />
                        {brand.email.as_str()}
                    </a>
                    <a href=format!("tel:{}", brand.phone) class="footer-contact">
                        <Svg path=ICON_PHONE size="16" />
                        {brand.phone.as_str()}
                    </a>
                    <span class="footer-contact">
                        <Svg path=ICON_MAP_PIN size="16" />
                        {brand.location.as_str()}
                    </span>
                </div>
            </div>
            <div class="footer-bottom">
                <span>"© 2025 " {brand.name.as_str()} ". All rights reserved."</span>
            </div>
        </footer>
    }
}
