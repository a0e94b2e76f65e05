//! # Confirm Prompt Component
//!
//! Small modal asking the user to confirm a destructive action.
//! The prompt has no state of its own; the owner decides what confirm
//! and cancel mean.

use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmPromptDialogProps {
    pub title: String,

    pub content: String,

    pub cancel_label: String,

    pub confirm_label: String,

    /// Confirm button text while the action runs
    pub busy_label: String,

    /// Disables both buttons while the confirmed action runs
    #[props(default = false)]
    pub busy: bool,

    #[props(default)]
    pub on_confirm: EventHandler<()>,

    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation prompt layered over its owner
#[component]
pub fn ConfirmPromptDialog(props: ConfirmPromptDialogProps) -> Element {
    let confirm_class = confirm_button_class(props.busy);

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60",
            onclick: move |e: MouseEvent| e.stop_propagation(),

            div {
                class: "confirm-prompt w-full max-w-md p-6 bg-slate-800 rounded-xl border border-slate-700 shadow-2xl",

                // Header with warning icon
                div {
                    class: "flex items-start gap-4 mb-6",

                    div {
                        class: "flex-shrink-0 w-12 h-12 rounded-full bg-red-500/20 flex items-center justify-center",
                        span { class: "text-2xl", "⚠️" }
                    }

                    div {
                        class: "flex-1",
                        h2 {
                            class: "text-xl font-bold text-red-400 mb-2",
                            "{props.title}"
                        }
                        p {
                            class: "text-slate-300",
                            "{props.content}"
                        }
                    }
                }

                // Actions
                div {
                    class: "flex justify-end gap-3",

                    button {
                        r#type: "button",
                        class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors",
                        disabled: props.busy,
                        onclick: move |_| props.on_cancel.call(()),
                        "{props.cancel_label}"
                    }

                    button {
                        r#type: "button",
                        class: "{confirm_class}",
                        disabled: props.busy,
                        onclick: move |_| props.on_confirm.call(()),

                        if props.busy {
                            span { class: "animate-spin", "⏳" }
                            "{props.busy_label}"
                        } else {
                            span { "🗑️" }
                            "{props.confirm_label}"
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn confirm_button_class(busy: bool) -> String {
    let base = "px-4 py-2 rounded-lg transition-colors flex items-center gap-2";
    if busy {
        format!("{base} bg-red-600/50 cursor-not-allowed")
    } else {
        format!("{base} bg-red-600 hover:bg-red-700")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_button_class() {
        assert!(confirm_button_class(false).contains("hover:bg-red-700"));

        let busy = confirm_button_class(true);
        assert!(busy.contains("cursor-not-allowed"));
        assert!(!busy.contains("hover:bg-red-700"));
    }
}
