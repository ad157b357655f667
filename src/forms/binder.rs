//! Binding between raw field input and the account entity
//!
//! [`reduce`] is the pure state transition applied for every keystroke.
//! The validity rules live in [`FieldValidators::all_inputs_valid`] so that
//! they read the entity, never the widget text.

use crate::core::account::{PaymentAccount, PaymentAccountPayload};
use crate::core::error::FieldValidationError;
use crate::core::field::FieldId;
use crate::core::validation::validators::{self, SharedValidator};
use crate::core::validation::ValidationResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A new value for one bound field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: FieldId,
    pub value: String,
}

impl FieldChange {
    pub fn new(field: FieldId, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Apply a field change to an account, returning the updated account
pub fn reduce(account: &PaymentAccount, change: &FieldChange) -> PaymentAccount {
    let mut next = account.clone();
    match change.field {
        FieldId::AccountName => next.account_name = change.value.clone(),
        FieldId::SortCode => match &mut next.payload {
            PaymentAccountPayload::FasterPayments(fp) => fp.sort_code = change.value.clone(),
        },
        FieldId::AccountNr => match &mut next.payload {
            PaymentAccountPayload::FasterPayments(fp) => fp.account_nr = change.value.clone(),
        },
    }
    next
}

/// Current entity value of a field
pub fn field_value(account: &PaymentAccount, field: FieldId) -> &str {
    match (field, &account.payload) {
        (FieldId::AccountName, _) => &account.account_name,
        (FieldId::SortCode, PaymentAccountPayload::FasterPayments(fp)) => &fp.sort_code,
        (FieldId::AccountNr, PaymentAccountPayload::FasterPayments(fp)) => &fp.account_nr,
    }
}

/// Name generated for accounts without a custom name
///
/// `"<method name>: <first max_chars characters of the account number>"`
pub fn auto_account_name(method_name: &str, account_nr: &str, max_chars: usize) -> String {
    let shortened: String = account_nr.chars().take(max_chars).collect();
    format!("{}: {}", method_name, shortened)
}

/// Validators bound to the fields of a Faster Payments form
#[derive(Clone)]
pub struct FieldValidators {
    pub account_name: SharedValidator,
    pub sort_code: SharedValidator,
    pub account_nr: SharedValidator,
}

impl FieldValidators {
    /// Sort code needs both the generic check and the country's branch format
    pub fn faster_payments(input_validator: SharedValidator, country: &str) -> Self {
        let branch_id: SharedValidator = Arc::new(validators::branch_id(country));
        Self {
            account_name: input_validator.clone(),
            sort_code: Arc::new(validators::all_of(vec![input_validator, branch_id])),
            account_nr: Arc::new(validators::account_nr(country)),
        }
    }

    pub fn for_field(&self, field: FieldId) -> &SharedValidator {
        match field {
            FieldId::AccountName => &self.account_name,
            FieldId::SortCode => &self.sort_code,
            FieldId::AccountNr => &self.account_nr,
        }
    }

    /// Validate the entity's current value of a field
    pub fn validate_field(&self, account: &PaymentAccount, field: FieldId) -> ValidationResult {
        self.for_field(field).validate(field_value(account, field))
    }

    /// All fields valid and a trade currency present
    pub fn all_inputs_valid(&self, account: &PaymentAccount) -> bool {
        [FieldId::AccountName, FieldId::SortCode, FieldId::AccountNr]
            .into_iter()
            .all(|field| self.validate_field(account, field).is_valid)
            && !account.trade_currencies().is_empty()
    }

    /// Every failing check, one entry per field
    pub fn field_errors(&self, account: &PaymentAccount) -> Vec<FieldValidationError> {
        let mut errors: Vec<FieldValidationError> =
            [FieldId::AccountName, FieldId::SortCode, FieldId::AccountNr]
                .into_iter()
                .filter_map(|field| {
                    let result = self.validate_field(account, field);
                    (!result.is_valid).then(|| FieldValidationError {
                        field: field.as_str().to_string(),
                        message: result
                            .error_message
                            .unwrap_or_else(|| "Invalid input".to_string()),
                    })
                })
                .collect();

        if account.trade_currencies().is_empty() {
            errors.push(FieldValidationError {
                field: "currency".to_string(),
                message: "No trade currency selected".to_string(),
            });
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account::PaymentMethod;

    fn gb_validators() -> FieldValidators {
        FieldValidators::faster_payments(Arc::new(validators::input_validator(100)), "GB")
    }

    fn filled_account() -> PaymentAccount {
        let account = PaymentAccount::new(PaymentMethod::FasterPayments);
        let account = reduce(&account, &FieldChange::new(FieldId::SortCode, "12-34-56"));
        let account = reduce(&account, &FieldChange::new(FieldId::AccountNr, "12345678"));
        reduce(
            &account,
            &FieldChange::new(FieldId::AccountName, "My UK account"),
        )
    }

    #[test]
    fn test_reduce_is_pure() {
        let original = PaymentAccount::new(PaymentMethod::FasterPayments);
        let updated = reduce(&original, &FieldChange::new(FieldId::SortCode, "123456"));

        assert_eq!(field_value(&original, FieldId::SortCode), "");
        assert_eq!(field_value(&updated, FieldId::SortCode), "123456");
        assert_eq!(updated.id(), original.id());
    }

    #[test]
    fn test_reduce_each_field() {
        let account = filled_account();

        assert_eq!(field_value(&account, FieldId::SortCode), "12-34-56");
        assert_eq!(field_value(&account, FieldId::AccountNr), "12345678");
        assert_eq!(field_value(&account, FieldId::AccountName), "My UK account");
    }

    #[test]
    fn test_auto_account_name_truncates() {
        assert_eq!(
            auto_account_name("UK Faster Payments", "123456789012", 9),
            "UK Faster Payments: 123456789"
        );
        assert_eq!(
            auto_account_name("UK Faster Payments", "1234", 9),
            "UK Faster Payments: 1234"
        );
        assert_eq!(auto_account_name("FP", "", 9), "FP: ");
    }

    #[test]
    fn test_all_inputs_valid() {
        assert!(gb_validators().all_inputs_valid(&filled_account()));
    }

    #[test]
    fn test_missing_currency_is_invalid() {
        let mut account = filled_account();
        account.set_single_trade_currency(None);

        let v = gb_validators();
        assert!(!v.all_inputs_valid(&account));
        let errors = v.field_errors(&account);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "currency");
    }

    #[test]
    fn test_field_errors_lists_each_failing_field() {
        let account = PaymentAccount::new(PaymentMethod::FasterPayments);
        let fields: Vec<_> = gb_validators()
            .field_errors(&account)
            .into_iter()
            .map(|e| e.field)
            .collect();

        assert_eq!(fields, vec!["account_name", "sort_code", "account_nr"]);
    }

    #[test]
    fn test_empty_sort_code_fails_generic_check_first() {
        let account = PaymentAccount::new(PaymentMethod::FasterPayments);
        let result = gb_validators().validate_field(&account, FieldId::SortCode);

        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("empty"));
    }
}
