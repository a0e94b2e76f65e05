//! # Plugin Dialog Component
//!
//! Modal for creating, editing and deleting a plugin.
//!
//! The component only renders a [`PluginDialog`] kept in a signal and
//! forwards user actions to it. Requests run in spawned tasks; the
//! signal is never borrowed across an await.

use dioxus::prelude::*;
use plugindesk_model::PluginForm;
use std::rc::Rc;

use crate::avatar::AvatarCompressor;
use crate::components::dialogs::confirm_prompt::ConfirmPromptDialog;
use crate::components::inputs::{TextArea, TextInput};
use crate::dialog::{DialogServices, DialogText, PluginDialog};
use crate::file_ops::NativeFilePicker;
use crate::state::{RouteNavigator, ShellDialogHost, ToastNotifier, use_api};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct PluginDialogViewProps {
    /// Values the dialog opens with; an id means edit mode
    pub form: PluginForm,

    /// Strings shown by the dialog
    #[props(default)]
    pub text: DialogText,
}

/// Collaborators wired to the shell's global state
fn shell_services() -> DialogServices {
    DialogServices::new(
        Rc::new(ToastNotifier),
        Rc::new(RouteNavigator),
        Rc::new(ShellDialogHost),
    )
}

// ============================================================================
// Main Component
// ============================================================================

/// Plugin create/edit dialog
#[component]
pub fn PluginDialogView(props: PluginDialogViewProps) -> Element {
    let initial_form = props.form.clone();
    let initial_text = props.text.clone();
    let mut dialog =
        use_signal(move || PluginDialog::open(initial_form, initial_text, shell_services()));

    let mut handle_submit = move || {
        let Some(api) = use_api() else {
            tracing::error!("no backend client installed");
            return;
        };
        let pending = match dialog.write().begin_submit() {
            Ok(pending) => pending,
            Err(err) => {
                tracing::debug!(error = %err, "submit not started");
                return;
            }
        };
        spawn(async move {
            let ticket = pending.ticket();
            let reply = pending.dispatch(&api).await;
            dialog.write().finish_submit(ticket, reply);
        });
    };

    let handle_avatar = move |_: MouseEvent| {
        let pending = match dialog.read().begin_avatar() {
            Ok(pending) => pending,
            Err(_) => return,
        };
        spawn(async move {
            let ticket = pending.ticket();
            let result = pending.run(&NativeFilePicker, &AvatarCompressor).await;
            dialog.write().finish_avatar(ticket, result);
        });
    };

    let handle_confirm_delete = move |_: ()| {
        let Some(api) = use_api() else {
            return;
        };
        let pending = match dialog.write().confirm_delete() {
            Ok(pending) => pending,
            Err(err) => {
                tracing::debug!(error = %err, "delete not started");
                return;
            }
        };
        spawn(async move {
            let ticket = pending.ticket();
            let reply = pending.dispatch(&api).await;
            dialog.write().finish_delete(ticket, reply);
        });
    };

    let view = dialog.read();
    let form = view.form().clone();
    let text = view.text().clone();
    let title = view.title().to_string();
    let name_error = view.name_error().map(str::to_string);
    let is_edit = view.is_edit();
    let submitting = view.is_creating() || view.is_updating();
    let deleting = view.is_deleting();
    let prompt = view.confirm_prompt().cloned();
    drop(view);

    let submit_label = if is_edit {
        text.confirm_update.clone()
    } else {
        text.confirm_create.clone()
    };

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center",

            // Backdrop
            div {
                class: "absolute inset-0 bg-black/50",
                onclick: move |_| {
                    dialog.write().close();
                }
            }

            div {
                class: "relative bg-slate-800 rounded-lg shadow-xl border border-slate-700 mx-4 max-w-lg w-full",
                onclick: move |e: MouseEvent| e.stop_propagation(),

                div {
                    class: "plugin-dialog p-6",

                    // Header
                    h2 { class: "text-2xl font-bold mb-6", "{title}" }

                    // Body
                    div {
                        class: "space-y-4",

                        div { class: "font-semibold text-slate-200", "{text.name_label}" }

                        div {
                            class: "flex items-start gap-4",

                            button {
                                r#type: "button",
                                class: "shrink-0 w-8 h-8 rounded-md overflow-hidden ring-1 ring-slate-600 hover:ring-indigo-500",
                                title: "{text.avatar_tip}",
                                onclick: handle_avatar,
                                img { class: "w-full h-full object-cover", src: "{form.avatar}", alt: "" }
                            }

                            TextInput {
                                value: form.name.clone(),
                                required: true,
                                autofocus: !is_edit,
                                disabled: submitting,
                                error: name_error,
                                on_change: move |value: String| dialog.write().set_name(value),
                                on_enter: move |_: ()| handle_submit(),
                            }
                        }

                        TextArea {
                            value: form.intro.clone(),
                            label: text.intro_label.clone(),
                            rows: 5,
                            disabled: submitting,
                            on_change: move |value: String| dialog.write().set_intro(value),
                        }
                    }

                    // Actions
                    div {
                        class: "flex items-center gap-3 pt-6",

                        if is_edit {
                            button {
                                r#type: "button",
                                class: "delete px-2 py-1.5 rounded-md bg-slate-700 hover:bg-red-500/30 transition-colors",
                                title: "delete",
                                disabled: deleting,
                                onclick: move |e: MouseEvent| {
                                    e.stop_propagation();
                                    if let Err(err) = dialog.write().request_delete() {
                                        tracing::debug!(error = %err, "delete prompt not shown");
                                    }
                                },
                                "🗑"
                            }
                        }

                        div { class: "flex-1" }

                        button {
                            r#type: "button",
                            class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-md transition-colors",
                            onclick: move |_| {
                                dialog.write().close();
                            },
                            "{text.close}"
                        }

                        button {
                            r#type: "button",
                            class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 rounded-md transition-colors flex items-center gap-2",
                            disabled: submitting,
                            onclick: move |_| handle_submit(),
                            if submitting {
                                span { class: "animate-spin", "⏳" }
                            }
                            "{submit_label}"
                        }
                    }

                    if let Some(prompt) = prompt {
                        ConfirmPromptDialog {
                            title: prompt.title,
                            content: prompt.content,
                            cancel_label: prompt.cancel_label,
                            confirm_label: prompt.confirm_label,
                            busy_label: prompt.busy_label,
                            busy: deleting,
                            on_confirm: handle_confirm_delete,
                            on_cancel: move |_: ()| dialog.write().cancel_delete(),
                        }
                    }
                }
            }
        }
    }
}
