//! Core traits for Plugin Desk

use crate::error::DeskResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use plugindesk_core::{Validatable, DeskResult, DeskError};
///
/// struct Draft {
///     name: String,
/// }
///
/// impl Validatable for Draft {
///     fn validate(&self) -> DeskResult<()> {
///         if self.name.is_empty() {
///             return Err(DeskError::field_validation("name", "Name can't be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `DeskError` describing the problem.
    fn validate(&self) -> DeskResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
