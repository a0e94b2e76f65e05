//! Application state for the Plugin Desk shell
//!
//! One global signal holds the current view, the toast stack, the dialog
//! request and a reload counter. Components read it directly; the
//! dialog collaborators in this module write to it.

use dioxus::prelude::*;
use plugindesk_client::ApiClient;
use plugindesk_core::{Route, Toast};
use plugindesk_model::PluginForm;
use uuid::Uuid;

use crate::dialog::{DialogHost, Navigator, Notifier};

/// Toasts shown at once; older ones are dropped first
pub const MAX_TOASTS: usize = 4;

/// How long a toast stays on screen, in milliseconds
pub const TOAST_LIFETIME_MS: u64 = 3000;

// ============================================================================
// Desk State
// ============================================================================

/// Everything the shell shares between views
#[derive(Debug, Clone, Default)]
pub struct DeskState {
    /// View currently shown
    pub route: Route,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    /// Values the plugin dialog should open with, if it is open
    pub dialog: Option<PluginForm>,
    /// Incremented whenever plugin data should be fetched again
    pub reload: u64,
    /// Backend client; `None` until the shell is launched
    pub api: Option<ApiClient>,
}

impl DeskState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(path = %route.path(), "navigate");
        self.route = route;
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
    }

    pub fn dismiss_toast(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Open the plugin dialog for a new plugin
    pub fn open_create_dialog(&mut self) {
        self.dialog = Some(PluginForm::new());
    }

    /// Open the plugin dialog on an existing plugin
    pub fn open_edit_dialog(&mut self, form: PluginForm) {
        self.dialog = Some(form);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn request_reload(&mut self) {
        self.reload = self.reload.wrapping_add(1);
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
pub static DESK_STATE: GlobalSignal<DeskState> = Signal::global(DeskState::new);

/// Install the backend client; call once at startup
pub fn init_desk_state(api: ApiClient) {
    DESK_STATE.write().api = Some(api);
}

/// Hook to get the backend client
pub fn use_api() -> Option<ApiClient> {
    DESK_STATE.read().api.clone()
}

// ============================================================================
// Dialog Collaborators
// ============================================================================

/// Sends dialog toasts to the shared toast stack
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        DESK_STATE.write().push_toast(toast);
    }
}

/// Changes the shell's current view
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteNavigator;

impl Navigator for RouteNavigator {
    fn push(&self, route: Route) {
        DESK_STATE.write().navigate(route);
    }
}

/// Caller callbacks of a dialog opened from the shell
///
/// Success and delete trigger a reload; a delete also leaves the editor
/// view of the plugin that no longer exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellDialogHost;

impl DialogHost for ShellDialogHost {
    fn on_success(&self) {
        DESK_STATE.write().request_reload();
    }

    fn on_delete(&self) {
        let mut state = DESK_STATE.write();
        state.request_reload();
        if matches!(state.route, Route::PluginEdit(_)) {
            state.navigate(Route::PluginList);
        }
    }

    fn on_close(&self) {
        DESK_STATE.write().close_dialog();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use plugindesk_core::PluginId;

    #[test]
    fn test_toasts_are_capped() {
        let mut state = DeskState::new();
        for i in 0..6 {
            state.push_toast(Toast::success(format!("toast {i}")));
        }
        assert_eq!(state.toasts.len(), MAX_TOASTS);
        assert_eq!(state.toasts[0].title, "toast 2");
        assert_eq!(state.toasts[3].title, "toast 5");
    }

    #[test]
    fn test_dismiss_toast() {
        let mut state = DeskState::new();
        let keep = Toast::warning("keep");
        let drop = Toast::error("drop");
        let drop_id = drop.id;
        state.push_toast(keep.clone());
        state.push_toast(drop);

        state.dismiss_toast(drop_id);
        assert_eq!(state.toasts, vec![keep]);
    }

    #[test]
    fn test_dialog_requests() {
        let mut state = DeskState::new();
        assert!(state.dialog.is_none());

        state.open_create_dialog();
        assert_eq!(state.dialog, Some(PluginForm::new()));

        let form = PluginForm::for_plugin(PluginId::from("p1"), "", "Search", "");
        state.open_edit_dialog(form.clone());
        assert_eq!(state.dialog, Some(form));

        state.close_dialog();
        assert!(state.dialog.is_none());
    }

    #[test]
    fn test_navigation_and_reload() {
        let mut state = DeskState::new();
        assert_eq!(state.route, Route::PluginList);

        state.navigate(Route::PluginEdit(PluginId::from("abc123")));
        assert_eq!(state.route.path(), "/plugin/edit?pluginId=abc123");

        let before = state.reload;
        state.request_reload();
        assert_eq!(state.reload, before + 1);
    }
}
