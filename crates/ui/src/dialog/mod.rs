//! # Plugin Dialog
//!
//! The headless part of the plugin create/edit/delete modal: a
//! [`PluginDialog`] state machine, the collaborator traits it reports
//! through, and the strings it shows.
//!
//! Nothing here depends on Dioxus; the components in
//! [`crate::components`] render a `PluginDialog` held in a signal.

pub mod controller;
pub mod services;
pub mod text;

pub use controller::{
    AvatarOutcome, ConfirmPrompt, DeleteOutcome, PendingAvatar, PendingDelete, PendingSubmit,
    PluginDialog, SubmitOutcome, SubmitReply, SubmitRequest, Ticket,
};
pub use services::{DialogHost, DialogServices, FilePicker, ImageCompressor, Navigator, Notifier};
pub use text::DialogText;
