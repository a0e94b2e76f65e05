//! File selection for Plugin Desk
//!
//! Native file dialogs via the `rfd` crate. The chosen files are read
//! into memory so the dialog controller never touches the filesystem.

use async_trait::async_trait;
use plugindesk_core::{DeskResult, FileFilter, PickedFile};
use rfd::{AsyncFileDialog, FileHandle};

use crate::dialog::FilePicker;

// ============================================================================
// File Filter Constants
// ============================================================================

/// Title of the avatar picker window
pub const PICKER_TITLE: &str = "Select Avatar";

/// Display name for the image filter
pub const FILE_TYPE_NAME: &str = "Images";

// ============================================================================
// Native Picker
// ============================================================================

/// [`FilePicker`] that opens the platform's file dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFilePicker;

#[async_trait(?Send)]
impl FilePicker for NativeFilePicker {
    async fn pick(&self, filter: &FileFilter) -> DeskResult<Vec<PickedFile>> {
        let extensions: Vec<&str> = filter.extensions.iter().map(String::as_str).collect();
        let dialog = AsyncFileDialog::new()
            .set_title(PICKER_TITLE)
            .add_filter(FILE_TYPE_NAME, &extensions);

        let handles = if filter.multiple {
            dialog.pick_files().await.unwrap_or_default()
        } else {
            dialog.pick_file().await.into_iter().collect()
        };

        let mut files = Vec::with_capacity(handles.len());
        for handle in handles {
            files.push(read_handle(handle).await);
        }

        let files = keep_accepted(files, filter);
        tracing::debug!(count = files.len(), "files picked");
        Ok(files)
    }
}

async fn read_handle(handle: FileHandle) -> PickedFile {
    let name = handle.file_name();
    let bytes = handle.read().await;
    PickedFile::new(name, bytes)
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Drop files the filter does not accept
///
/// Some platforms let the user switch the dialog to "all files", so the
/// extension is checked again after selection.
pub fn keep_accepted(files: Vec<PickedFile>, filter: &FileFilter) -> Vec<PickedFile> {
    files
        .into_iter()
        .filter(|f| {
            let accepted = filter.accepts(&f.name);
            if !accepted {
                tracing::warn!(file = %f.name, "ignoring file with unsupported extension");
            }
            accepted
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
