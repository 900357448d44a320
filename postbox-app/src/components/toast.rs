use std::time::Duration;

use leptos::prelude::*;

pub(crate) const TOAST_VISIBLE_MS: u64 = 3000;
pub(crate) const TOAST_EXIT_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
            Self::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ToastMessage {
    pub(crate) text: String,
    pub(crate) kind: ToastKind,
}

impl ToastMessage {
    pub(crate) fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Success,
        }
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Transient status message rendered out of `message`.
///
/// Mounts visible, holds for the fixed duration, plays a short fade/slide-out
/// and then clears the owner's slot. Owners hold a single slot each, so a
/// message triggered while another is visible replaces it instead of queuing.
#[component]
pub(crate) fn Toast(message: RwSignal<Option<ToastMessage>>) -> impl IntoView {
    let visible = RwSignal::new(true);

    set_timeout(
        move || {
            visible.set(false);
            set_timeout(
                move || message.set(None),
                Duration::from_millis(TOAST_EXIT_MS),
            );
        },
        Duration::from_millis(TOAST_VISIBLE_MS),
    );

    let class = move || {
        message
            .get()
            .map(|toast| toast.kind.css_class())
            .unwrap_or("toast")
    };
    let text = move || message.get().map(|toast| toast.text).unwrap_or_default();
    let style = move || {
        if visible.get() {
            "opacity: 1; transform: translateX(0); transition: opacity 0.3s ease-out, transform 0.3s ease-out;"
        } else {
            "opacity: 0; transform: translateX(20px); transition: opacity 0.3s ease-out, transform 0.3s ease-out;"
        }
    };

    view! {
        <div class=class style=style>
            {text}
        </div>
    }
}
