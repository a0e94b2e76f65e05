//! # Toast Stack
//!
//! Renders the notifications kept in [`DESK_STATE`]. Each toast removes
//! itself after [`TOAST_LIFETIME_MS`] unless dismissed earlier.

use dioxus::prelude::*;
use plugindesk_core::{Toast, ToastStatus};
use std::time::Duration;

use crate::state::{DESK_STATE, TOAST_LIFETIME_MS};

/// Bottom-right stack of active toasts
#[component]
pub fn ToastStack() -> Element {
    let toasts = DESK_STATE.read().toasts.clone();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-[60] flex flex-col gap-2 w-80",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let id = toast.id;
    let class = toast_class(toast.status);
    let icon = toast.status.icon();

    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(TOAST_LIFETIME_MS)).await;
            DESK_STATE.write().dismiss_toast(id);
        });
    });

    rsx! {
        div {
            class: "{class}",
            span { class: "font-bold", "{icon}" }
            span { class: "flex-1 text-sm", "{toast.title}" }
            button {
                r#type: "button",
                class: "text-slate-400 hover:text-white",
                onclick: move |_| DESK_STATE.write().dismiss_toast(id),
                "✕"
            }
        }
    }
}

fn toast_class(status: ToastStatus) -> String {
    let accent = match status {
        ToastStatus::Success => "border-green-500/40 text-green-300",
        ToastStatus::Warning => "border-amber-500/40 text-amber-300",
        ToastStatus::Error => "border-red-500/40 text-red-300",
    };
    format!("flex items-center gap-3 px-4 py-3 bg-slate-800 border rounded-lg shadow-lg {accent}")
}
