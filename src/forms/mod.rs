//! Payment account forms
//!
//! Every payment method has one form type. [`PaymentMethodForm`] selects it
//! from the account's method, so callers never name the concrete form.

pub mod binder;
pub mod context;
pub mod faster_payments;
pub mod grid;
pub mod shared;

pub use binder::{FieldChange, FieldValidators, reduce};
pub use context::FormContext;
pub use faster_payments::FasterPaymentsForm;
pub use grid::{GridCursor, Row, RowContent, RowSpan};

use crate::core::account::{PaymentAccount, PaymentMethod};
use crate::core::contract::{ContractPayload, PaymentAccountContractData};
use crate::core::error::FormError;
use crate::core::events::ValiditySignal;
use crate::core::field::FieldId;
use crate::core::form_state::FormState;
use crate::core::locale::Localizer;

/// The form of an account, chosen by its payment method
pub enum PaymentMethodForm<'a> {
    FasterPayments(FasterPaymentsForm<'a>),
}

impl<'a> PaymentMethodForm<'a> {
    pub fn for_account(account: &'a mut PaymentAccount, ctx: FormContext) -> Self {
        match account.payment_method() {
            PaymentMethod::FasterPayments => {
                PaymentMethodForm::FasterPayments(FasterPaymentsForm::new(account, ctx))
            }
        }
    }

    pub fn render_editable_form(&mut self, cursor: &mut GridCursor) -> Result<RowSpan, FormError> {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.render_editable_form(cursor),
        }
    }

    pub fn render_own_account_view(
        &mut self,
        cursor: &mut GridCursor,
    ) -> Result<RowSpan, FormError> {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.render_own_account_view(cursor),
        }
    }

    pub fn on_change(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.on_change(field, value),
        }
    }

    pub fn set_use_custom_account_name(&mut self, use_custom: bool) {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.set_use_custom_account_name(use_custom),
        }
    }

    pub fn sync_rows(&self, cursor: &mut GridCursor) -> bool {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.sync_rows(cursor),
        }
    }

    pub fn derive_display_name(&mut self) -> bool {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.derive_display_name(),
        }
    }

    pub fn recompute_validity(&mut self) -> bool {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.recompute_validity(),
        }
    }

    pub fn confirm(&mut self) -> Result<(), FormError> {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.confirm(),
        }
    }

    pub fn state(&self) -> FormState {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.state(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.is_valid(),
        }
    }

    pub fn validity_signal(&self) -> ValiditySignal {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.validity_signal(),
        }
    }

    pub fn account(&self) -> &PaymentAccount {
        match self {
            PaymentMethodForm::FasterPayments(form) => form.account(),
        }
    }
}

/// Rows showing a counterparty's payment details from a contract
pub fn render_counterparty_view(
    contract: &PaymentAccountContractData,
    cursor: &mut GridCursor,
    localizer: &dyn Localizer,
) -> RowSpan {
    match &contract.payload {
        ContractPayload::FasterPayments {
            sort_code,
            account_nr,
        } => FasterPaymentsForm::render_counterparty_view(sort_code, account_nr, cursor, localizer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::ResourceBundle;

    #[test]
    fn test_form_selected_by_method() {
        let mut account = PaymentAccount::new(PaymentMethod::FasterPayments);
        let form = PaymentMethodForm::for_account(&mut account, FormContext::default());

        assert!(matches!(form, PaymentMethodForm::FasterPayments(_)));
        assert_eq!(form.state(), FormState::Uninitialized);
    }

    #[test]
    fn test_counterparty_view_from_contract() {
        let mut account = PaymentAccount::new(PaymentMethod::FasterPayments);
        account.payload = reduce(&account, &FieldChange::new(FieldId::SortCode, "123456")).payload;
        let contract = account.contract_data();

        let mut cursor = GridCursor::new();
        let span = render_counterparty_view(&contract, &mut cursor, &ResourceBundle::english());

        assert_eq!(span.row_count(), 2);
        assert_eq!(cursor.rows()[0].value(), Some("123456"));
        assert_eq!(cursor.rows()[1].value(), Some(""));
    }
}
