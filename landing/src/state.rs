// App-wide UI state shared through Leptos context

use std::sync::LazyLock;

use leptos::prelude::*;
use vermixor::SiteConfig;
use vermixor::forms::Form;
use vermixor::submit::{self, Notice, SimulatedTransport, SubmitOutcome};
use vermixor::theme::{Theme, ThemeState};

use crate::browser::{self, BrowserTimer, LocalStorage};

static SITE: LazyLock<SiteConfig> =
    LazyLock::new(|| SiteConfig::parse_or_default(include_str!("../site.toml")));

/// Site configuration compiled in from `site.toml`.
pub fn site() -> &'static SiteConfig {
    &SITE
}

fn theme_state() -> ThemeState<LocalStorage> {
    let config = site();
    ThemeState::with_key(
        LocalStorage,
        config.theme.storage_key.clone(),
        config.default_theme(),
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Mobile menu, active theme and toast queue.
#[derive(Clone, Copy)]
pub struct AppContext {
    theme: RwSignal<Theme>,
    menu_open: RwSignal<bool>,
    toasts: RwSignal<Vec<Toast>>,
    next_toast: StoredValue<u64>,
}

impl AppContext {
    /// Restore the persisted theme and apply it to the document.
    pub fn new() -> Self {
        let theme = theme_state().load();
        browser::apply_theme(theme);
        Self {
            theme: RwSignal::new(theme),
            menu_open: RwSignal::new(false),
            toasts: RwSignal::new(Vec::new()),
            next_toast: StoredValue::new(0),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        if let Err(e) = theme_state().select(theme) {
            tracing::warn!("theme not persisted: {e}");
        }
        browser::apply_theme(theme);
        self.theme.set(theme);
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    /// Queue a toast; it dismisses itself after the configured lifetime.
    pub fn notify(&self, notice: Notice) {
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let ctx = *self;
        set_timeout(move || ctx.dismiss(id), site().toast_lifetime());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Validate and send `form` with the configured transport and retry policy.
pub async fn deliver<F: Form>(form: &F) -> SubmitOutcome {
    let config = site();
    let transport = SimulatedTransport::new(BrowserTimer, config.submission_delay());
    submit::submit(
        form,
        &config.form_rules(),
        &transport,
        &BrowserTimer,
        &config.retry_policy(),
    )
    .await
}
