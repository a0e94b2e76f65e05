//! User-visible strings of the plugin dialog.

use plugindesk_model::DEFAULT_NAME_REQUIRED;

/// Every string the plugin dialog can show.
///
/// `Default` gives the English set; callers with their own translations
/// replace individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogText {
    pub create_title: String,
    pub update_title: String,
    pub name_label: String,
    pub intro_label: String,
    pub avatar_tip: String,
    pub name_required: String,

    pub confirm_create: String,
    pub confirm_update: String,
    pub close: String,

    pub create_success: String,
    pub create_failed: String,
    pub update_success: String,
    pub update_failed: String,
    pub delete_success: String,
    pub delete_failed: String,
    pub select_file_failed: String,

    pub delete_tip: String,
    pub delete_confirm: String,
    pub delete_cancel: String,
    pub delete_button: String,
    pub deleting: String,
}

impl Default for DialogText {
    fn default() -> Self {
        Self {
            create_title: "Create Your Plugin".to_string(),
            update_title: "Update Your Plugin".to_string(),
            name_label: "Set Name".to_string(),
            intro_label: "Intro".to_string(),
            avatar_tip: "Set Avatar".to_string(),
            name_required: DEFAULT_NAME_REQUIRED.to_string(),

            confirm_create: "Confirm Create".to_string(),
            confirm_update: "Confirm Update".to_string(),
            close: "Close".to_string(),

            create_success: "Create Success".to_string(),
            create_failed: "Create Failed".to_string(),
            update_success: "Update Success".to_string(),
            update_failed: "Update Failed".to_string(),
            delete_success: "Delete Success".to_string(),
            delete_failed: "Delete Failed".to_string(),
            select_file_failed: "Select File Failed".to_string(),

            delete_tip: "Delete Tip".to_string(),
            delete_confirm: "Confirm to delete this plugin?".to_string(),
            delete_cancel: "Cancel".to_string(),
            delete_button: "Delete".to_string(),
            deleting: "Deleting...".to_string(),
        }
    }
}
