//! # Input Components
//!
//! Form inputs used by the plugin dialog:
//! - **TextInput**: single-line text with optional error
//! - **TextArea**: multi-line text
//!
//! Both are controlled: the parent owns the value and receives every
//! change through `on_change`.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    /// Focus the input when it mounts
    #[props(default = false)]
    pub autofocus: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<()>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = field_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group flex-1",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-semibold text-slate-200 mb-1.5",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                autofocus: props.autofocus,
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(());
                    }
                },
            }

            if let Some(error) = &props.error {
                p {
                    class: "mt-1 text-xs text-rose-400",
                    "{error}"
                }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    /// Number of visible rows
    #[props(default = 5)]
    pub rows: usize,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = format!("{} resize-y", field_class(false, props.disabled));

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm text-slate-300 mb-1",
                    "{label}"
                }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                "{props.value}"
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Tailwind classes shared by text fields
fn field_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec![
        "w-full",
        "px-3",
        "py-2",
        "bg-slate-800",
        "border",
        "rounded-md",
        "text-sm",
        "text-slate-100",
        "placeholder-slate-500",
        "focus:outline-none",
        "focus:ring-2",
    ];

    if has_error {
        classes.extend(["border-rose-500", "focus:ring-rose-500/30"]);
    } else {
        classes.extend(["border-slate-700", "focus:ring-indigo-500/30"]);
    }

    if disabled {
        classes.extend(["opacity-50", "cursor-not-allowed"]);
    }

    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_class_states() {
        let normal = field_class(false, false);
        assert!(normal.contains("border-slate-700"));
        assert!(!normal.contains("opacity-50"));

        let error = field_class(true, false);
        assert!(error.contains("border-rose-500"));

        let disabled = field_class(false, true);
        assert!(disabled.contains("cursor-not-allowed"));
    }
}
