//! Field validation
//!
//! Validators never fail: invalid input is reported through a
//! [`ValidationResult`] and only ever affects the form's validity signal.

pub mod validators;

pub use validators::{InputValidator, SharedValidator, ValidationResult};
