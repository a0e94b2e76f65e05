//! Error types for Plugin Desk
//!
//! This module provides unified error handling for everything that is not
//! an HTTP transport failure: form validation, avatar processing, local
//! configuration, and dialog state violations.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Plugin Desk
#[derive(Debug, Error)]
pub enum DeskError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A single form field failed validation
    #[error("Field '{field}' is invalid: {message}")]
    FieldValidation { field: String, message: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Image Errors
    // ========================================================================
    /// The selected file is not an image we can read
    #[error("Unsupported image '{name}': {message}")]
    UnsupportedImage { name: String, message: String },

    /// Decoding, resizing or encoding the image failed
    #[error("Image processing failed: {0}")]
    ImageProcessing(String),

    // ========================================================================
    // UI Errors
    // ========================================================================
    /// The dialog was already closed when an action arrived
    #[error("Dialog is closed")]
    DialogClosed,

    /// The triggering control already has a request in flight
    #[error("A {0} request is already in flight")]
    InFlight(&'static str),

    /// Delete was attempted without going through the confirmation prompt
    #[error("Delete requires confirmation")]
    ConfirmationRequired,

    /// The operation needs an existing plugin but the dialog is in create mode
    #[error("Operation requires an existing plugin")]
    NotEditing,

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DeskError {
    /// Create a field validation error
    pub fn field_validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        DeskError::FieldValidation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create an image processing error
    pub fn image(msg: impl Into<String>) -> Self {
        DeskError::ImageProcessing(msg.into())
    }

    /// Create an unsupported image error
    pub fn unsupported_image(name: impl Into<String>, msg: impl Into<String>) -> Self {
        DeskError::UnsupportedImage {
            name: name.into(),
            message: msg.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        DeskError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DeskError::Internal(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, DeskError::FieldValidation { .. })
    }

    /// The message a user should see for this error.
    ///
    /// Field validation errors show only their message, since the field is
    /// already implied by where the error is rendered.
    pub fn display_text(&self) -> String {
        match self {
            DeskError::FieldValidation { message, .. } => message.clone(),
            DeskError::UnsupportedImage { message, .. } => message.clone(),
            DeskError::ImageProcessing(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias using DeskError
pub type DeskResult<T> = Result<T, DeskError>;

// ============================================================================
// Tests
// ============================================================================
