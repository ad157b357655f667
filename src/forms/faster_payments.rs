//! UK Faster Payments account form
//!
//! Binds a sort code and an account number to a [`PaymentAccount`] and keeps
//! the form's validity signal up to date while the user types.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut account = PaymentAccount::new(PaymentMethod::FasterPayments);
//! let mut cursor = GridCursor::new();
//! let mut form = FasterPaymentsForm::new(&mut account, FormContext::default());
//!
//! form.render_editable_form(&mut cursor)?;
//! form.on_change(FieldId::SortCode, "12-34-56");
//! form.on_change(FieldId::AccountNr, "12345678");
//! assert!(form.is_valid());
//! form.confirm()?;
//! ```

use crate::core::account::{FasterPaymentsAccount, PaymentAccount, PaymentAccountPayload};
use crate::core::currency::TradeCurrency;
use crate::core::error::{FormError, StateError, ValidationError};
use crate::core::events::{FormEvent, ValiditySignal};
use crate::core::field::FieldId;
use crate::core::form_state::{FormState, Validity};
use crate::core::locale::Localizer;
use crate::forms::binder::{self, FieldChange, FieldValidators};
use crate::forms::context::FormContext;
use crate::forms::grid::{GridCursor, RowSpan};
use crate::forms::shared;

/// Entry and display form of a Faster Payments account
pub struct FasterPaymentsForm<'a> {
    account: &'a mut PaymentAccount,
    ctx: FormContext,
    validators: FieldValidators,
    validity: ValiditySignal,
    state: FormState,
    use_custom_account_name: bool,
    row_span: Option<RowSpan>,
    toggle_row: Option<usize>,
}

impl<'a> FasterPaymentsForm<'a> {
    pub fn new(account: &'a mut PaymentAccount, ctx: FormContext) -> Self {
        let validators =
            FieldValidators::faster_payments(ctx.input_validator.clone(), &ctx.config.country_code);
        Self {
            account,
            ctx,
            validators,
            validity: ValiditySignal::new(),
            state: FormState::Uninitialized,
            use_custom_account_name: false,
            row_span: None,
            toggle_row: None,
        }
    }

    /// Rows showing the other trader's bank details
    ///
    /// Display only: the data comes from a confirmed contract and is not validated.
    pub fn render_counterparty_view(
        sort_code: &str,
        account_nr: &str,
        cursor: &mut GridCursor,
        localizer: &dyn Localizer,
    ) -> RowSpan {
        let first = cursor.add_text_row(FieldId::SortCode.label(localizer), sort_code);
        let last = cursor.add_text_row(FieldId::AccountNr.label(localizer), account_nr);
        RowSpan { first, last }
    }

    /// Rows for entering a new account
    pub fn render_editable_form(&mut self, cursor: &mut GridCursor) -> Result<RowSpan, FormError> {
        if self.state != FormState::Uninitialized {
            return Err(self.invalid_transition("render the editable form"));
        }

        let localizer = self.ctx.localizer.as_ref();
        let record = self.record();

        let first = cursor.add_input_row(
            FieldId::SortCode,
            FieldId::SortCode.label(localizer),
            record.sort_code.as_str(),
            true,
        );
        cursor.add_input_row(
            FieldId::AccountNr,
            FieldId::AccountNr.label(localizer),
            record.account_nr.as_str(),
            true,
        );
        cursor.add_text_row(
            localizer.get_with_colon("shared.currency"),
            self.currency_display(),
        );
        shared::add_allowed_period(cursor, localizer, self.account.payment_method());
        let last = shared::add_account_name_with_auto_fill(
            cursor,
            localizer,
            &self.account.account_name,
            self.use_custom_account_name,
        );

        let span = RowSpan { first, last };
        self.row_span = Some(span);
        self.toggle_row = Some(last);
        self.state = FormState::Editing(Validity::Invalid);
        self.recompute_validity();
        Ok(span)
    }

    /// Read-only rows showing an existing account to its owner
    pub fn render_own_account_view(
        &mut self,
        cursor: &mut GridCursor,
    ) -> Result<RowSpan, FormError> {
        if !matches!(self.state, FormState::Uninitialized | FormState::Display) {
            return Err(self.invalid_transition("render the account view"));
        }

        let localizer = self.ctx.localizer.as_ref();
        let record = self.record();
        let method = self.account.payment_method();

        cursor.start_group();
        let first = cursor.add_text_row(
            FieldId::AccountName.label(localizer),
            self.account.account_name.as_str(),
        );
        cursor.add_text_row(
            localizer.get_with_colon("shared.paymentMethod"),
            localizer.get(method.id()),
        );
        cursor.add_text_row(FieldId::SortCode.label(localizer), record.sort_code.as_str());
        cursor.add_selectable_text_row(
            FieldId::AccountNr.label(localizer),
            record.account_nr.as_str(),
        );
        cursor.add_text_row(
            localizer.get_with_colon("shared.currency"),
            self.currency_display(),
        );
        let last = shared::add_allowed_period(cursor, localizer, method);

        let span = RowSpan { first, last };
        self.row_span = Some(span);
        self.state = FormState::Display;
        Ok(span)
    }

    /// Apply a user edit and recompute validity
    ///
    /// Returns the new validity. Edits are ignored outside of editing, and
    /// account name edits are ignored while the name is filled automatically.
    pub fn on_change(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        let account_id = self.account.id();
        if !self.state.is_editing() {
            tracing::warn!(
                account_id = %account_id,
                field = field.as_str(),
                state = self.state.name(),
                "Ignoring edit outside of editing"
            );
            return self.validity.get();
        }
        if field == FieldId::AccountName && !self.use_custom_account_name {
            tracing::debug!(account_id = %account_id, "Ignoring name edit while auto-filled");
            return self.validity.get();
        }

        let change = FieldChange::new(field, value);
        *self.account = binder::reduce(&*self.account, &change);
        tracing::debug!(
            account_id = %account_id,
            field = field.as_str(),
            len = change.value.chars().count(),
            "Field changed"
        );
        self.ctx.events.publish(FormEvent::FieldChanged {
            account_id,
            field,
            value: change.value,
        });

        self.derive_display_name();
        self.recompute_validity()
    }

    /// Fill the account name from the method name and account number
    ///
    /// Only writes while editing and while no custom name is in use.
    /// Returns whether the name was written.
    pub fn derive_display_name(&mut self) -> bool {
        if !self.state.is_editing() || self.use_custom_account_name {
            return false;
        }
        let method_name = self.ctx.localizer.get(self.account.payment_method().id());
        let name = binder::auto_account_name(
            &method_name,
            &self.record().account_nr,
            self.ctx.config.auto_name_account_chars,
        );
        let change = FieldChange::new(FieldId::AccountName, name);
        *self.account = binder::reduce(&*self.account, &change);
        true
    }

    /// Copy the entity's current values into the editable form's rows
    ///
    /// Refreshes the inputs, the account name lock and the custom name toggle.
    /// Returns false when no editable form was rendered.
    pub fn sync_rows(&self, cursor: &mut GridCursor) -> bool {
        let Some(toggle_row) = self.toggle_row else {
            return false;
        };
        let record = self.record();
        cursor.set_input_value(FieldId::SortCode, &record.sort_code);
        cursor.set_input_value(FieldId::AccountNr, &record.account_nr);
        cursor.set_input_value(FieldId::AccountName, &self.account.account_name);
        cursor.set_input_editable(FieldId::AccountName, self.use_custom_account_name);
        cursor.set_toggle(toggle_row, self.use_custom_account_name)
    }

    /// Switch between a user-chosen and an automatic account name
    ///
    /// Ignored outside of editing.
    pub fn set_use_custom_account_name(&mut self, use_custom: bool) {
        if !self.state.is_editing() {
            tracing::warn!(
                account_id = %self.account.id(),
                state = self.state.name(),
                "Ignoring custom name toggle outside of editing"
            );
            return;
        }
        if self.use_custom_account_name == use_custom {
            return;
        }
        self.use_custom_account_name = use_custom;
        if !use_custom {
            self.derive_display_name();
            self.recompute_validity();
        }
    }

    /// Re-evaluate every input against the entity and publish the result
    pub fn recompute_validity(&mut self) -> bool {
        let valid = self.validators.all_inputs_valid(&*self.account);
        if self.state.is_editing() {
            self.state = FormState::Editing(valid.into());
        }

        let changed = self.validity.set(valid);
        tracing::debug!(account_id = %self.account.id(), valid, changed, "Recomputed validity");
        if changed {
            self.ctx.events.publish(FormEvent::ValidityChanged {
                account_id: self.account.id(),
                valid,
            });
        }
        valid
    }

    /// Accept the entered account; only possible while every input is valid
    pub fn confirm(&mut self) -> Result<(), FormError> {
        if !self.state.is_editing() {
            return Err(self.invalid_transition("confirm"));
        }
        self.recompute_validity();
        if !self.state.can_confirm() {
            let errors = self.validators.field_errors(&*self.account);
            return Err(ValidationError::FieldErrors(errors).into());
        }

        self.state = FormState::Confirmed;
        tracing::info!(account_id = %self.account.id(), "Payment account confirmed");
        self.ctx.events.publish(FormEvent::Confirmed {
            account_id: self.account.id(),
        });
        Ok(())
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_valid(&self) -> bool {
        self.validity.get()
    }

    /// Handle on the validity signal, for wiring up a confirm action
    pub fn validity_signal(&self) -> ValiditySignal {
        self.validity.clone()
    }

    pub fn account(&self) -> &PaymentAccount {
        &*self.account
    }

    pub fn use_custom_account_name(&self) -> bool {
        self.use_custom_account_name
    }

    /// Rows written by the last render call
    pub fn row_span(&self) -> Option<RowSpan> {
        self.row_span
    }

    fn record(&self) -> &FasterPaymentsAccount {
        match &self.account.payload {
            PaymentAccountPayload::FasterPayments(record) => record,
        }
    }

    fn currency_display(&self) -> String {
        self.account
            .single_trade_currency()
            .map(TradeCurrency::name_and_code)
            .unwrap_or_default()
    }

    fn invalid_transition(&self, operation: &'static str) -> FormError {
        StateError::InvalidTransition {
            state: self.state,
            operation,
        }
        .into()
    }
}
