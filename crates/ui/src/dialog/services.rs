//! Collaborators the plugin dialog depends on but does not own.
//!
//! The dialog never reaches for globals: toasts, navigation, caller
//! callbacks, file selection and image compression all arrive through
//! these traits. The desktop shell wires them to signals and native
//! dialogs; tests wire them to recorders.

use std::rc::Rc;

use async_trait::async_trait;
use plugindesk_core::{DeskResult, FileFilter, PickedFile, Route, Toast};

/// Shows transient notifications.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Moves the application to another view.
pub trait Navigator {
    fn push(&self, route: Route);
}

/// Callbacks owned by whoever opened the dialog.
///
/// The caller decides what "success" means for it, typically reloading
/// a list, and owns the dialog's lifetime through `on_close`.
pub trait DialogHost {
    /// A create or update finished successfully.
    fn on_success(&self);

    /// The plugin was deleted.
    fn on_delete(&self);

    /// The dialog has closed. Fired exactly once per dialog.
    fn on_close(&self);
}

/// Lets the user choose files.
#[async_trait(?Send)]
pub trait FilePicker {
    /// Ask for files matching `filter`; an empty vector means nothing was chosen.
    async fn pick(&self, filter: &FileFilter) -> DeskResult<Vec<PickedFile>>;
}

/// Turns an image file into a displayable, size-bounded source string.
#[async_trait(?Send)]
pub trait ImageCompressor {
    /// Scale `file` to fit in `max_width` x `max_height` and return it as a URI.
    async fn compress(&self, file: &PickedFile, max_width: u32, max_height: u32)
    -> DeskResult<String>;
}

/// The synchronous collaborators a dialog reports through.
#[derive(Clone)]
pub struct DialogServices {
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<dyn Navigator>,
    pub host: Rc<dyn DialogHost>,
}

impl DialogServices {
    pub fn new(
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
        host: Rc<dyn DialogHost>,
    ) -> Self {
        Self {
            notifier,
            navigator,
            host,
        }
    }
}
