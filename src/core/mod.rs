//! Core module containing the account model and the types forms are built on

pub mod account;
pub mod contract;
pub mod currency;
pub mod error;
pub mod events;
pub mod field;
pub mod form_state;
pub mod locale;
pub mod validation;

pub use account::{FasterPaymentsAccount, PaymentAccount, PaymentAccountPayload, PaymentMethod};
pub use contract::{ContractPayload, PaymentAccountContractData};
pub use currency::TradeCurrency;
pub use error::{ConfigError, FieldValidationError, FormError, StateError, ValidationError};
pub use events::{EventBus, EventEnvelope, FormEvent, ValiditySignal};
pub use field::{FieldFormat, FieldId, LabelSource};
pub use form_state::{FormState, Validity};
pub use locale::{Localizer, ResourceBundle};
pub use validation::{InputValidator, SharedValidator, ValidationResult};
