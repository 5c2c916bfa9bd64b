use leptos::prelude::*;
use vermixor::submit::NoticeKind;

use super::icons::{ICON_CLOSE, Svg};
use crate::state::use_app;

/// Stack of live toasts, newest last.
#[component]
pub fn Toaster() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || app.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Destructive => "toast toast-destructive",
                    };
                    view! {
                        <div class=class>
                            <div class="toast-body">
                                <p class="toast-title">{toast.notice.title}</p>
                                <p class="toast-description">{toast.notice.description}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| app.dismiss(id)
                            >
                                <Svg path=ICON_CLOSE size="16" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
