//! # payform
//!
//! Payment account forms for a peer-to-peer trading client, starting with
//! UK Faster Payments.
//!
//! ## Features
//!
//! - **Field Binding**: Every keystroke goes through a pure reducer into the account entity
//! - **Validity Signal**: An observable "all inputs valid" flag for the confirm action
//! - **Country Formats**: Sort codes and account numbers checked per country
//! - **Counterparty View**: Read-only rows built from trade contract data
//! - **Localisation**: Labels from a resource bundle, with the sort code kept in English
//! - **Configuration-Based**: Form settings and string overrides via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payform::prelude::*;
//!
//! let mut account = PaymentAccount::new(PaymentMethod::FasterPayments);
//! let mut cursor = GridCursor::new();
//! let mut form = PaymentMethodForm::for_account(&mut account, FormContext::default());
//!
//! form.render_editable_form(&mut cursor)?;
//! form.on_change(FieldId::SortCode, "12-34-56");
//! form.on_change(FieldId::AccountNr, "12345678");
//!
//! if form.is_valid() {
//!     form.confirm()?;
//! }
//! ```

pub mod config;
pub mod core;
pub mod forms;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        account::{FasterPaymentsAccount, PaymentAccount, PaymentAccountPayload, PaymentMethod},
        contract::{ContractPayload, PaymentAccountContractData},
        currency::TradeCurrency,
        error::{ConfigError, FieldValidationError, FormError, StateError, ValidationError},
        events::{EventBus, EventEnvelope, FormEvent, ValiditySignal},
        field::{FieldFormat, FieldId, LabelSource},
        form_state::{FormState, Validity},
        locale::{Localizer, ResourceBundle},
        validation::{InputValidator, SharedValidator, ValidationResult, validators},
    };

    // === Forms ===
    pub use crate::forms::{
        FasterPaymentsForm, FieldChange, FieldValidators, FormContext, GridCursor,
        PaymentMethodForm, Row, RowContent, RowSpan, reduce, render_counterparty_view,
    };

    // === Config ===
    pub use crate::config::FormConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, Duration, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
