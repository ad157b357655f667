//! Form lifecycle

use serde::{Deserialize, Serialize};

/// Whether all inputs of an editing form are currently acceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    Valid,
    Invalid,
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

/// Lifecycle of one form instance
///
/// ```text
/// Uninitialized ──▶ Editing(Valid | Invalid) ──▶ Confirmed
///       │
///       └────────▶ Display
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "validity", rename_all = "snake_case")]
pub enum FormState {
    Uninitialized,
    Editing(Validity),
    Confirmed,
    Display,
}

impl FormState {
    pub fn name(&self) -> &'static str {
        match self {
            FormState::Uninitialized => "uninitialized",
            FormState::Editing(_) => "editing",
            FormState::Confirmed => "confirmed",
            FormState::Display => "display",
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormState::Editing(_))
    }

    /// True only while editing with every input valid
    pub fn can_confirm(&self) -> bool {
        matches!(self, FormState::Editing(Validity::Valid))
    }
}
