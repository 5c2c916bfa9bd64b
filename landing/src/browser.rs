// Browser-backed implementations of the library's storage and timer seams

use std::future::Future;
use std::time::Duration;

use futures::channel::oneshot;
use leptos::prelude::set_timeout;
use vermixor::submit::Timer;
use vermixor::theme::{StoreError, Theme, ThemeStore};
use wasm_bindgen::JsCast;

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or_else(|| StoreError {
            key: key.to_string(),
            reason: "localStorage is unavailable".to_string(),
        })?;
        storage.set_item(key, value).map_err(|e| StoreError {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }
}

/// Sleeps on `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let (tx, rx) = oneshot::channel::<()>();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        async move {
            let _ = rx.await;
        }
    }
}

/// Write the theme's custom properties onto `<html>`.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        tracing::warn!("no document root, theme {} not applied", theme.id());
        return;
    };

    let style = root.style();
    for (name, value) in theme.css_variables() {
        if let Err(e) = style.set_property(name, &value) {
            tracing::warn!("failed to set {name}: {e:?}");
        }
    }
    let _ = root.set_attribute("data-theme", theme.id());
}

/// Copy `text` to the clipboard. Returns false when the browser has no clipboard.
pub fn copy_to_clipboard(text: &str) -> bool {
    match web_sys::window() {
        Some(window) => {
            let _ = window.navigator().clipboard().write_text(text);
            true
        }
        None => false,
    }
}
