//! Main Application Component for Plugin Desk
//!
//! This module contains the root Dioxus component: a header, the page
//! selected by the current route, the plugin dialog overlay and the
//! toast stack.

use dioxus::prelude::*;
use plugindesk_core::{PluginId, Route};
use plugindesk_model::{PluginDetail, PluginForm, PluginListItem};

use crate::components::{PluginDialogView, ToastStack};
use crate::state::{DESK_STATE, use_api};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Plugin Desk UI initialized");
    });

    let route = DESK_STATE.read().route.clone();

    rsx! {
        div {
            class: "app-container h-screen w-screen flex flex-col bg-slate-900 text-slate-100 overflow-hidden",

            Header { route: route.clone() }

            main {
                class: "flex-1 overflow-auto p-6",
                match route {
                    Route::PluginList => rsx! { PluginListPage {} },
                    Route::PluginEdit(id) => rsx! { PluginEditPage { id: id } },
                }
            }

            DialogOverlay {}
            ToastStack {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

#[component]
fn Header(route: Route) -> Element {
    let label = route_label(&route);
    let name = crate::NAME;
    let on_list = route == Route::PluginList;

    rsx! {
        header {
            class: "toolbar h-12 bg-slate-800 border-b border-slate-700 flex items-center px-4 gap-2 shrink-0",

            div {
                class: "flex items-center gap-2 mr-4",
                span { class: "text-xl", "🧩" }
                span { class: "font-semibold text-sm", "{name}" }
            }

            div { class: "w-px h-6 bg-slate-700 mx-2" }

            span { class: "text-sm text-slate-400", "{label}" }

            div { class: "flex-1" }

            if !on_list {
                button {
                    r#type: "button",
                    class: "px-3 py-1.5 text-sm bg-slate-700 hover:bg-slate-600 rounded-md transition-colors",
                    onclick: move |_| DESK_STATE.write().navigate(Route::PluginList),
                    "← Plugins"
                }
            }
        }
    }
}

// ============================================================================
// Plugin List Page
// ============================================================================

/// Grid of the user's plugins
#[component]
fn PluginListPage() -> Element {
    let api = use_api();
    let reload = use_memo(|| DESK_STATE.read().reload);

    let plugins = use_resource(move || {
        let api = api.clone();
        let _ = reload();
        async move {
            let Some(api) = api else {
                return Err("No backend configured".to_string());
            };
            api.list_plugins().await.map_err(|e| {
                tracing::warn!(error = %e, "failed to load plugins");
                e.user_message()
            })
        }
    });

    let content = match &*plugins.read() {
        None => rsx! {
            p { class: "text-slate-400", "Loading plugins..." }
        },
        Some(Err(message)) => rsx! {
            p { class: "text-red-400", "{message}" }
        },
        Some(Ok(items)) if items.is_empty() => rsx! {
            div {
                class: "text-center text-slate-400 py-16",
                p { class: "text-4xl mb-4", "🧩" }
                p { "No plugins yet" }
            }
        },
        Some(Ok(items)) => rsx! {
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                for item in items.iter() {
                    PluginCard { key: "{item.id}", item: item.clone() }
                }
            }
        },
    };

    rsx! {
        div {
            class: "max-w-5xl mx-auto",

            div {
                class: "flex items-center mb-6",
                h1 { class: "text-2xl font-bold", "My Plugins" }
                div { class: "flex-1" }
                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-md transition-colors",
                    onclick: move |_| DESK_STATE.write().open_create_dialog(),
                    "+ Create Plugin"
                }
            }

            {content}
        }
    }
}

/// Plugin summary; click to edit, or open the editor view
#[component]
fn PluginCard(item: PluginListItem) -> Element {
    let form = PluginForm::from(&item);
    let id = item.id.clone();

    rsx! {
        div {
            class: "p-4 bg-slate-800 border border-slate-700 rounded-lg hover:border-indigo-500 cursor-pointer transition-colors",
            onclick: move |_| DESK_STATE.write().open_edit_dialog(form.clone()),

            div {
                class: "flex items-center gap-3 mb-2",
                img { class: "w-8 h-8 rounded-md object-cover", src: "{item.avatar}", alt: "" }
                span { class: "font-semibold flex-1 truncate", "{item.name}" }
                button {
                    r#type: "button",
                    class: "text-xs text-indigo-300 hover:text-indigo-200",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        DESK_STATE.write().navigate(Route::PluginEdit(id.clone()));
                    },
                    "Open →"
                }
            }

            p { class: "text-sm text-slate-400 line-clamp-2", "{item.intro}" }
        }
    }
}

// ============================================================================
// Plugin Edit Page
// ============================================================================

/// Detail view of one plugin
#[component]
fn PluginEditPage(id: PluginId) -> Element {
    let api = use_api();
    let reload = use_memo(|| DESK_STATE.read().reload);
    let id_for_fetch = id.clone();

    let detail = use_resource(move || {
        let api = api.clone();
        let id = id_for_fetch.clone();
        let _ = reload();
        async move {
            let Some(api) = api else {
                return Err("No backend configured".to_string());
            };
            api.get_plugin(&id).await.map_err(|e| {
                tracing::warn!(plugin = %id, error = %e, "failed to load plugin");
                e.user_message()
            })
        }
    });

    let content = match &*detail.read() {
        None => rsx! {
            p { class: "text-slate-400", "Loading plugin..." }
        },
        Some(Err(message)) => rsx! {
            p { class: "text-red-400", "{message}" }
        },
        Some(Ok(plugin)) => rsx! {
            PluginDetailCard { plugin: plugin.clone() }
        },
    };

    rsx! {
        div {
            class: "max-w-3xl mx-auto",
            {content}
        }
    }
}

#[component]
fn PluginDetailCard(plugin: PluginDetail) -> Element {
    let form = PluginForm::from(&plugin);
    let module_count = plugin.modules.len();
    let updated = plugin.update_time.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        div {
            class: "p-6 bg-slate-800 border border-slate-700 rounded-lg",

            div {
                class: "flex items-center gap-4 mb-4",
                img { class: "w-12 h-12 rounded-md object-cover", src: "{plugin.avatar}", alt: "" }
                div {
                    class: "flex-1",
                    h1 { class: "text-2xl font-bold", "{plugin.name}" }
                    p { class: "text-xs text-slate-500", "ID: {plugin.id}" }
                }
                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-md transition-colors",
                    onclick: move |_| DESK_STATE.write().open_edit_dialog(form.clone()),
                    "✏️ Edit"
                }
            }

            p { class: "text-slate-300 mb-4 whitespace-pre-wrap", "{plugin.intro}" }

            div {
                class: "flex items-center gap-4 text-xs text-slate-400",
                span { "Modules: {module_count}" }
                span { "Updated: {updated}" }
            }
        }
    }
}

// ============================================================================
// Dialog Overlay
// ============================================================================

/// Plugin dialog, mounted while the shell has a dialog request
#[component]
fn DialogOverlay() -> Element {
    let form = DESK_STATE.read().dialog.clone();

    let Some(form) = form else {
        return rsx! {};
    };

    rsx! {
        PluginDialogView { form: form }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn route_label(route: &Route) -> &'static str {
    match route {
        Route::PluginList => "Plugins",
        Route::PluginEdit(_) => "Plugin Editor",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_label() {
        assert_eq!(route_label(&Route::PluginList), "Plugins");
        assert_eq!(
            route_label(&Route::PluginEdit(PluginId::from("abc123"))),
            "Plugin Editor"
        );
    }
}
