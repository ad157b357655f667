//! Typed error handling for payment forms
//!
//! Invalid field input is not an error: it is a normal state reported
//! through the validity signal. Errors only arise on the outer surface:
//!
//! - [`ConfigError`]: configuration parsing and validation
//! - [`ValidationError`]: confirming a form whose inputs are not valid
//! - [`StateError`]: operations the form's lifecycle does not allow
//!
//! # Example
//!
//! ```rust,ignore
//! match form.confirm() {
//!     Ok(()) => save(&account),
//!     Err(FormError::Validation(ValidationError::FieldErrors(errors))) => {
//!         for e in errors {
//!             println!("{}: {}", e.field, e.message);
//!         }
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::form_state::FormState;
use serde::Serialize;
use thiserror::Error;

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum FormError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Lifecycle errors
    #[error(transparent)]
    State(#[from] StateError),
}

impl FormError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::Config(_) => "CONFIG_ERROR",
            FormError::Validation(_) => "VALIDATION_ERROR",
            FormError::State(_) => "STATE_ERROR",
        }
    }

    /// Structured details, when the error carries any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            FormError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            FormError::State(StateError::InvalidTransition { state, operation }) => {
                Some(serde_json::json!({
                    "state": state.name(),
                    "operation": operation,
                }))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed validation
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// State Errors
// =============================================================================

/// Errors related to the form lifecycle
#[derive(Debug, Error)]
pub enum StateError {
    /// The requested operation is not allowed in the current state
    #[error("Cannot {operation} while the form is {}", .state.name())]
    InvalidTransition {
        state: FormState,
        operation: &'static str,
    },
}
