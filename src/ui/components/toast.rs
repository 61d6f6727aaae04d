use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(5);
const MAX_VISIBLE: usize = 4;

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

/// Appends a notification, dropping the oldest once the stack is full.
pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    toasts.with_mut(|entries| {
        if entries.len() >= MAX_VISIBLE {
            entries.remove(0);
        }
        entries.push(ToastMessage::new(kind, text));
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "pointer-events-none fixed inset-x-0 bottom-6 z-20 flex justify-center",
            ul { class: "w-full max-w-sm space-y-2 px-4",
                for message in messages {
                    ToastCard { message, toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = message.id.clone();
    let toasts_for_timer = toasts.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer.clone();
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(AUTO_DISMISS_AFTER).await;
            toasts.with_mut(|entries| entries.retain(|toast| toast.id != id));
        }
    });

    let (palette, icon) = match message.kind {
        ToastKind::Info => ("border-sky-200 bg-sky-50 text-sky-700", "ℹ️"),
        ToastKind::Success => ("border-emerald-200 bg-emerald-50 text-emerald-700", "✅"),
        ToastKind::Warning => ("border-amber-200 bg-amber-50 text-amber-700", "⚠️"),
        ToastKind::Error => ("border-rose-200 bg-rose-50 text-rose-700", "⛔"),
    };
    let close_id = message.id.clone();
    let mut toasts = toasts;

    rsx! {
        li { class: "pointer-events-auto flex items-start gap-2 rounded-xl border px-4 py-3 shadow-lg {palette}",
            span { class: "text-base", "{icon}" }
            p { class: "grow text-sm font-medium", "{message.text}" }
            button {
                class: "text-xs text-slate-400 hover:text-slate-600",
                onclick: move |_| {
                    let target = close_id.clone();
                    toasts.with_mut(|entries| entries.retain(|toast| toast.id != target));
                },
                "✕"
            }
        }
    }
}
