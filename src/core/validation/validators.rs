//! Reusable input validators
//!
//! Validators are pure functions from raw input to a [`ValidationResult`].
//! They hold no mutable state and may be called any number of times.

use crate::core::field::FieldFormat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::ValidateLength;

/// Outcome of validating one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }

    /// Combine two results, keeping the first failure
    pub fn and(self, other: ValidationResult) -> Self {
        if self.is_valid { other } else { self }
    }
}

/// Anything that can validate a raw text input
pub trait InputValidator: Send + Sync {
    fn validate(&self, input: &str) -> ValidationResult;
}

impl<F> InputValidator for F
where
    F: Fn(&str) -> ValidationResult + Send + Sync,
{
    fn validate(&self, input: &str) -> ValidationResult {
        self(input)
    }
}

/// Shared, type-erased validator
pub type SharedValidator = Arc<dyn InputValidator>;

/// Validator: input must not be empty
pub fn required() -> impl Fn(&str) -> ValidationResult + Send + Sync + Clone {
    |input: &str| {
        if input.is_empty() {
            ValidationResult::invalid("Input must not be empty")
        } else {
            ValidationResult::valid()
        }
    }
}

/// Validator: character count must be within range
pub fn string_length(
    min: u64,
    max: u64,
) -> impl Fn(&str) -> ValidationResult + Send + Sync + Clone {
    move |input: &str| {
        if input.validate_length(Some(min), Some(max), None) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(format!(
                "Input must be between {} and {} characters long",
                min, max
            ))
        }
    }
}

/// The generic input check shared by all forms: non-empty and not too long
pub fn input_validator(max_length: u64) -> impl Fn(&str) -> ValidationResult + Send + Sync + Clone {
    let required = required();
    let length = string_length(1, max_length);
    move |input: &str| required(input).and(length(input))
}

/// Validator: bank branch identifier for a country (UK sort code for "GB")
///
/// Countries without a known format fall back to a non-empty check.
pub fn branch_id(country: &str) -> impl Fn(&str) -> ValidationResult + Send + Sync + Clone + use<> {
    let format = FieldFormat::BranchId(country.to_string());
    let country = country.to_string();
    move |input: &str| match format.validate(input) {
        Some(true) => ValidationResult::valid(),
        Some(false) => ValidationResult::invalid(branch_id_message(&country)),
        None => required()(input),
    }
}

/// Validator: bank account number for a country
///
/// Countries without a known format fall back to a non-empty check.
pub fn account_nr(country: &str) -> impl Fn(&str) -> ValidationResult + Send + Sync + Clone + use<> {
    let format = FieldFormat::AccountNr(country.to_string());
    let country = country.to_string();
    move |input: &str| match format.validate(input) {
        Some(true) => ValidationResult::valid(),
        Some(false) => ValidationResult::invalid(account_nr_message(&country)),
        None => required()(input),
    }
}

/// Validator: every inner validator must pass; the first failure is reported
pub fn all_of(
    validators: Vec<SharedValidator>,
) -> impl Fn(&str) -> ValidationResult + Send + Sync + Clone {
    move |input: &str| {
        validators
            .iter()
            .map(|v| v.validate(input))
            .find(|result| !result.is_valid)
            .unwrap_or_else(ValidationResult::valid)
    }
}

fn branch_id_message(country: &str) -> String {
    match country {
        "GB" => "Sort code must be 6 digits, optionally as 12-34-56 or 12 34 56".to_string(),
        "US" => "Routing number must be 9 digits".to_string(),
        "CA" => "Transit number must be 5 digits".to_string(),
        "AU" => "BSB must be 6 digits, optionally as 123-456".to_string(),
        other => format!("Invalid branch identifier for {}", other),
    }
}

fn account_nr_message(country: &str) -> String {
    match country {
        "GB" => "Account number must be exactly 8 digits".to_string(),
        "US" => "Account number must be 4 to 17 digits".to_string(),
        "CA" => "Account number must be 7 to 12 digits".to_string(),
        "AU" => "Account number must be 4 to 10 digits".to_string(),
        other => format!("Invalid account number for {}", other),
    }
}
