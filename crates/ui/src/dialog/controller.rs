//! # Plugin Dialog Controller
//!
//! Headless state machine behind the plugin create/edit/delete modal.
//!
//! Every asynchronous action is split in three:
//!
//! 1. `begin_*` validates and flips the busy flag, returning a pending
//!    request stamped with a [`Ticket`];
//! 2. the pending request is dispatched without borrowing the dialog;
//! 3. `finish_*` applies the reply and returns an explicit outcome.
//!
//! Closing the dialog advances its generation, so a reply carrying a
//! ticket from before the close is dropped without side effects.
//!
//! ```rust,ignore
//! let pending = dialog.begin_submit()?;
//! let ticket = pending.ticket();
//! let reply = pending.dispatch(&api).await;
//! match dialog.finish_submit(ticket, reply) {
//!     SubmitOutcome::Created(id) => { /* navigated to the editor */ }
//!     _ => {}
//! }
//! ```

use plugindesk_client::{ClientResult, PluginApi};
use plugindesk_core::{
    AVATAR_MAX_SIZE, DeskError, DeskResult, FileFilter, PluginId, Route, Toast,
};
use plugindesk_model::{CreatePluginParams, PluginForm, UpdatePluginParams};

use super::services::{DialogServices, FilePicker, ImageCompressor};
use super::text::DialogText;

// ============================================================================
// Tickets & Pending Requests
// ============================================================================

/// Generation a request was started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// What a submit sends to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(CreatePluginParams),
    Update(UpdatePluginParams),
}

/// Successful backend reply to a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReply {
    Created(PluginId),
    Updated,
}

/// A create or update that has been started but not yet sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    ticket: Ticket,
    request: SubmitRequest,
}

impl PendingSubmit {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn request(&self) -> &SubmitRequest {
        &self.request
    }

    /// Send the request.
    pub async fn dispatch(self, api: &dyn PluginApi) -> ClientResult<SubmitReply> {
        match self.request {
            SubmitRequest::Create(params) => api.create_plugin(params).await.map(SubmitReply::Created),
            SubmitRequest::Update(params) => {
                api.update_plugin(params).await?;
                Ok(SubmitReply::Updated)
            }
        }
    }
}

/// A confirmed delete that has not yet been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    ticket: Ticket,
    id: PluginId,
}

impl PendingDelete {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn id(&self) -> &PluginId {
        &self.id
    }

    pub async fn dispatch(self, api: &dyn PluginApi) -> ClientResult<()> {
        api.delete_plugin(self.id).await
    }
}

/// An avatar selection that has been started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAvatar {
    ticket: Ticket,
    filter: FileFilter,
    max_size: u32,
}

impl PendingAvatar {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Pick files and compress the first one.
    ///
    /// `Ok(None)` means the user chose nothing.
    pub async fn run(
        self,
        picker: &dyn FilePicker,
        compressor: &dyn ImageCompressor,
    ) -> DeskResult<Option<String>> {
        let files = picker.pick(&self.filter).await?;
        let Some(file) = files.first() else {
            return Ok(None);
        };
        let src = compressor
            .compress(file, self.max_size, self.max_size)
            .await?;
        Ok(Some(src))
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of a submit, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Plugin created; the editor view was opened and the dialog closed.
    Created(PluginId),
    /// Plugin updated and the dialog closed.
    Updated,
    /// The name failed validation; nothing was sent.
    Invalid(String),
    /// The backend rejected the request; the dialog stays open.
    Failed(String),
    /// A submit was already in flight.
    Busy,
    /// The dialog closed before the reply arrived.
    Stale,
}

/// Result of a delete, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The backend rejected the delete; the dialog closed anyway.
    Failed(String),
    /// Delete was attempted without an open confirmation prompt.
    Unconfirmed,
    Busy,
    Stale,
}

/// Result of an avatar selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarOutcome {
    /// The avatar was replaced.
    Changed,
    /// No file was chosen.
    NoFile,
    /// Picking or compressing failed; the avatar is unchanged.
    Failed(String),
    Stale,
}

/// Confirmation shown before a delete is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub content: String,
    pub cancel_label: String,
    pub confirm_label: String,
    pub busy_label: String,
}

// ============================================================================
// Controller
// ============================================================================

/// State of one plugin dialog.
pub struct PluginDialog {
    form: PluginForm,
    text: DialogText,
    services: DialogServices,
    name_error: Option<String>,
    submitting: bool,
    deleting: bool,
    confirm: Option<ConfirmPrompt>,
    avatar_revision: u64,
    generation: u64,
    open: bool,
}

impl PluginDialog {
    /// Open a dialog for a new plugin.
    pub fn open_create(text: DialogText, services: DialogServices) -> Self {
        Self::open(PluginForm::new(), text, services)
    }

    /// Open a dialog on the given values; an id puts it in edit mode.
    pub fn open(form: PluginForm, text: DialogText, services: DialogServices) -> Self {
        Self {
            form,
            text,
            services,
            name_error: None,
            submitting: false,
            deleting: false,
            confirm: None,
            avatar_revision: 0,
            generation: 0,
            open: true,
        }
    }

    /// Start a fresh dialog lifetime on new values.
    ///
    /// Replies to requests started before the reopen are ignored.
    pub fn reopen(&mut self, form: PluginForm) {
        self.generation += 1;
        self.form = form;
        self.reset_transient();
        self.avatar_revision = 0;
        self.open = true;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn form(&self) -> &PluginForm {
        &self.form
    }

    pub fn text(&self) -> &DialogText {
        &self.text
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_edit(&self) -> bool {
        self.form.is_edit()
    }

    pub fn title(&self) -> &str {
        if self.is_edit() {
            &self.text.update_title
        } else {
            &self.text.create_title
        }
    }

    pub fn name_error(&self) -> Option<&str> {
        self.name_error.as_deref()
    }

    pub fn is_creating(&self) -> bool {
        self.submitting && !self.is_edit()
    }

    pub fn is_updating(&self) -> bool {
        self.submitting && self.is_edit()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn confirm_prompt(&self) -> Option<&ConfirmPrompt> {
        self.confirm.as_ref()
    }

    /// Bumped every time the avatar changes, so views can re-render it.
    pub fn avatar_revision(&self) -> u64 {
        self.avatar_revision
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ========================================================================
    // Input
    // ========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
        self.name_error = None;
    }

    pub fn set_intro(&mut self, intro: impl Into<String>) {
        self.form.intro = intro.into();
    }

    // ========================================================================
    // Submit
    // ========================================================================

    /// Validate and start a create (no id) or update (id).
    pub fn begin_submit(&mut self) -> DeskResult<PendingSubmit> {
        self.ensure_open()?;
        if self.submitting {
            return Err(DeskError::InFlight("submit"));
        }

        if let Err(err) = self.form.validate_with(&self.text.name_required) {
            self.name_error = Some(err.display_text());
            return Err(err);
        }
        self.name_error = None;

        let request = if self.is_edit() {
            let params = self
                .form
                .to_update_params()
                .ok_or_else(|| DeskError::internal("edit form without an id"))?;
            SubmitRequest::Update(params)
        } else {
            SubmitRequest::Create(self.form.to_create_params())
        };

        self.submitting = true;
        Ok(PendingSubmit {
            ticket: self.ticket(),
            request,
        })
    }

    /// Apply the reply to a submit started with `ticket`.
    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        reply: ClientResult<SubmitReply>,
    ) -> SubmitOutcome {
        if self.is_stale(ticket) {
            tracing::debug!(generation = ticket.generation, "ignoring submit reply for a closed dialog");
            return SubmitOutcome::Stale;
        }
        self.submitting = false;

        match reply {
            Ok(SubmitReply::Created(id)) => {
                self.notify(Toast::success(&self.text.create_success));
                self.services.navigator.push(Route::PluginEdit(id.clone()));
                self.services.host.on_success();
                self.close();
                SubmitOutcome::Created(id)
            }
            Ok(SubmitReply::Updated) => {
                self.notify(Toast::success(&self.text.update_success));
                self.services.host.on_success();
                self.close();
                SubmitOutcome::Updated
            }
            Err(err) => {
                let fallback = if self.is_edit() {
                    &self.text.update_failed
                } else {
                    &self.text.create_failed
                };
                let message = err.text_or(fallback);
                tracing::warn!(error = %err, "plugin submit failed");
                self.notify(Toast::error(&message));
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Run a whole submit against `api`.
    pub async fn submit(&mut self, api: &dyn PluginApi) -> SubmitOutcome {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(err) => return rejected_submit(err),
        };
        let ticket = pending.ticket();
        let reply = pending.dispatch(api).await;
        self.finish_submit(ticket, reply)
    }

    // ========================================================================
    // Delete
    // ========================================================================

    /// Show the confirmation prompt. Only valid in edit mode.
    pub fn request_delete(&mut self) -> DeskResult<()> {
        self.ensure_open()?;
        if !self.is_edit() {
            return Err(DeskError::NotEditing);
        }
        self.confirm = Some(ConfirmPrompt {
            title: self.text.delete_tip.clone(),
            content: self.text.delete_confirm.clone(),
            cancel_label: self.text.delete_cancel.clone(),
            confirm_label: self.text.delete_button.clone(),
            busy_label: self.text.deleting.clone(),
        });
        Ok(())
    }

    /// Dismiss the confirmation prompt without deleting.
    pub fn cancel_delete(&mut self) {
        self.confirm = None;
    }

    /// Accept the confirmation prompt and start the delete.
    pub fn confirm_delete(&mut self) -> DeskResult<PendingDelete> {
        self.ensure_open()?;
        if self.deleting {
            return Err(DeskError::InFlight("delete"));
        }
        let id = self.form.id.clone().ok_or(DeskError::NotEditing)?;
        if self.confirm.take().is_none() {
            return Err(DeskError::ConfirmationRequired);
        }

        self.deleting = true;
        Ok(PendingDelete {
            ticket: self.ticket(),
            id,
        })
    }

    /// Apply the reply to a delete started with `ticket`.
    ///
    /// The dialog closes whether or not the delete succeeded.
    pub fn finish_delete(&mut self, ticket: Ticket, reply: ClientResult<()>) -> DeleteOutcome {
        if self.is_stale(ticket) {
            tracing::debug!(generation = ticket.generation, "ignoring delete reply for a closed dialog");
            return DeleteOutcome::Stale;
        }
        self.deleting = false;

        let outcome = match reply {
            Ok(()) => {
                self.notify(Toast::success(&self.text.delete_success));
                self.services.host.on_delete();
                DeleteOutcome::Deleted
            }
            Err(err) => {
                let message = err.text_or(&self.text.delete_failed);
                tracing::warn!(error = %err, "plugin delete failed");
                self.notify(Toast::error(&message));
                DeleteOutcome::Failed(message)
            }
        };
        self.close();
        outcome
    }

    /// Run a confirmed delete against `api`.
    pub async fn delete(&mut self, api: &dyn PluginApi) -> DeleteOutcome {
        let pending = match self.confirm_delete() {
            Ok(pending) => pending,
            Err(DeskError::InFlight(_)) => return DeleteOutcome::Busy,
            Err(DeskError::DialogClosed) => return DeleteOutcome::Stale,
            Err(_) => return DeleteOutcome::Unconfirmed,
        };
        let ticket = pending.ticket();
        let reply = pending.dispatch(api).await;
        self.finish_delete(ticket, reply)
    }

    // ========================================================================
    // Avatar
    // ========================================================================

    /// Start an avatar selection: images only, one file, at most 100x100.
    pub fn begin_avatar(&self) -> DeskResult<PendingAvatar> {
        self.ensure_open()?;
        Ok(PendingAvatar {
            ticket: self.ticket(),
            filter: FileFilter::avatar(),
            max_size: AVATAR_MAX_SIZE,
        })
    }

    /// Apply the result of an avatar selection started with `ticket`.
    pub fn finish_avatar(
        &mut self,
        ticket: Ticket,
        result: DeskResult<Option<String>>,
    ) -> AvatarOutcome {
        if self.is_stale(ticket) {
            tracing::debug!(generation = ticket.generation, "ignoring avatar for a closed dialog");
            return AvatarOutcome::Stale;
        }

        match result {
            Ok(Some(src)) => {
                self.form.avatar = src;
                self.avatar_revision += 1;
                AvatarOutcome::Changed
            }
            Ok(None) => AvatarOutcome::NoFile,
            Err(err) => {
                let text = err.display_text();
                let message = if text.trim().is_empty() {
                    self.text.select_file_failed.clone()
                } else {
                    text
                };
                tracing::warn!(error = %err, "avatar selection failed");
                self.notify(Toast::warning(&message));
                AvatarOutcome::Failed(message)
            }
        }
    }

    /// Run a whole avatar selection.
    pub async fn select_avatar(
        &mut self,
        picker: &dyn FilePicker,
        compressor: &dyn ImageCompressor,
    ) -> AvatarOutcome {
        let pending = match self.begin_avatar() {
            Ok(pending) => pending,
            Err(_) => return AvatarOutcome::Stale,
        };
        let ticket = pending.ticket();
        let result = pending.run(picker, compressor).await;
        self.finish_avatar(ticket, result)
    }

    // ========================================================================
    // Close
    // ========================================================================

    /// Close the dialog, firing `on_close` the first time only.
    ///
    /// Returns whether this call closed it.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.generation += 1;
        self.reset_transient();
        self.services.host.on_close();
        true
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation,
        }
    }

    fn is_stale(&self, ticket: Ticket) -> bool {
        !self.open || ticket.generation != self.generation
    }

    fn ensure_open(&self) -> DeskResult<()> {
        if self.open {
            Ok(())
        } else {
            Err(DeskError::DialogClosed)
        }
    }

    fn reset_transient(&mut self) {
        self.name_error = None;
        self.submitting = false;
        self.deleting = false;
        self.confirm = None;
    }

    fn notify(&self, toast: Toast) {
        self.services.notifier.notify(toast);
    }
}

fn rejected_submit(err: DeskError) -> SubmitOutcome {
    match err {
        DeskError::InFlight(_) => SubmitOutcome::Busy,
        DeskError::DialogClosed => SubmitOutcome::Stale,
        other => SubmitOutcome::Invalid(other.display_text()),
    }
}

impl std::fmt::Debug for PluginDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDialog")
            .field("form", &self.form)
            .field("open", &self.open)
            .field("generation", &self.generation)
            .field("submitting", &self.submitting)
            .field("deleting", &self.deleting)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
