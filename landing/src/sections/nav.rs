use leptos::prelude::*;
use leptos_router::hooks::use_location;
use vermixor::routes::{self, NAVIGATION};
use vermixor::theme::Theme;

use super::icons::{ICON_CLOSE, ICON_MENU, ICON_SWATCH, Svg};
use crate::state::{site, use_app};

#[component]
pub fn Nav() -> impl IntoView {
    let app = use_app();
    let location = use_location();
    let pathname = location.pathname;

    // Close the mobile drawer whenever the route changes.
    Effect::new(move |_| {
        pathname.track();
        app.close_menu();
    });

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"V"</span>
                    <span class="nav-title">{site().brand.name.as_str()}</span>
                </a>
                <div class="nav-links">
                    {NAVIGATION
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="nav-link"
                                    class:active=move || routes::is_active(&pathname.get(), item.href)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="nav-actions">
                    <ThemeSwitcher />
                    <a href="/contact" class="nav-cta">"Get Started"</a>
                    <button
                        class="nav-menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| app.toggle_menu()
                    >
                        {move || {
                            let path = if app.menu_open() { ICON_CLOSE } else { ICON_MENU };
                            view! { <Svg path=path /> }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || app.menu_open()>
                <div class="nav-drawer">
                    {NAVIGATION
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="nav-drawer-link"
                                    class:active=move || routes::is_active(&pathname.get(), item.href)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="/contact" class="nav-cta nav-cta-block">"Get Started"</a>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn ThemeSwitcher() -> impl IntoView {
    let app = use_app();
    let (open, set_open) = signal(false);

    view! {
        <div class="theme-switcher">
            <button
                class="theme-toggle"
                aria-label="Change theme"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <Svg path=ICON_SWATCH size="20" />
            </button>
            <Show when=move || open.get()>
                <div class="theme-menu">
                    {Theme::ALL
                        .into_iter()
                        .map(|theme| {
                            let palette = theme.palette();
                            view! {
                                <button
                                    class="theme-option"
                                    class:active=move || app.theme() == theme
                                    on:click=move |_| {
                                        app.set_theme(theme);
                                        set_open.set(false);
                                    }
                                >
                                    <span
                                        class="theme-swatch"
                                        style:background=format!("hsl({})", palette.primary)
                                    ></span>
                                    {theme.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
