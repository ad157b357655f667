//! Payment accounts and their method-specific records
//!
//! A [`PaymentAccount`] carries what every payment method shares (identity,
//! name, trade currency) and a closed [`PaymentAccountPayload`] with the
//! method-specific record. Code that needs the record matches on the payload.

use crate::core::contract::{ContractPayload, PaymentAccountContractData};
use crate::core::currency::TradeCurrency;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "FASTER_PAYMENTS")]
    FasterPayments,
}

impl PaymentMethod {
    /// Stable identifier, also the resource key of the display name
    pub fn id(&self) -> &'static str {
        match self {
            PaymentMethod::FasterPayments => "FASTER_PAYMENTS",
        }
    }

    /// Longest time a trade using this method may take to settle
    pub fn max_trade_period(&self) -> Duration {
        match self {
            PaymentMethod::FasterPayments => Duration::days(1),
        }
    }

    /// Currency a fresh account of this method starts with
    pub fn default_currency(&self) -> Option<TradeCurrency> {
        match self {
            PaymentMethod::FasterPayments => Some(TradeCurrency::gbp()),
        }
    }

    fn empty_payload(&self) -> PaymentAccountPayload {
        match self {
            PaymentMethod::FasterPayments => {
                PaymentAccountPayload::FasterPayments(FasterPaymentsAccount::default())
            }
        }
    }
}

/// UK Faster Payments bank details
///
/// Empty strings mark fields the user has not filled in yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FasterPaymentsAccount {
    pub sort_code: String,
    pub account_nr: String,
}

/// Method-specific account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "paymentMethod")]
pub enum PaymentAccountPayload {
    #[serde(rename = "FASTER_PAYMENTS")]
    FasterPayments(FasterPaymentsAccount),
}

impl PaymentAccountPayload {
    pub fn payment_method(&self) -> PaymentMethod {
        match self {
            PaymentAccountPayload::FasterPayments(_) => PaymentMethod::FasterPayments,
        }
    }
}

/// A user's payment account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAccount {
    id: Uuid,
    creation_date: DateTime<Utc>,
    pub account_name: String,
    trade_currencies: Vec<TradeCurrency>,
    pub payload: PaymentAccountPayload,
}

impl PaymentAccount {
    /// Create an account for the given method with its default currency
    pub fn new(method: PaymentMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            creation_date: Utc::now(),
            account_name: String::new(),
            trade_currencies: method.default_currency().into_iter().collect(),
            payload: method.empty_payload(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payload.payment_method()
    }

    pub fn trade_currencies(&self) -> &[TradeCurrency] {
        &self.trade_currencies
    }

    /// The currency of a single-currency account, if one is set
    pub fn single_trade_currency(&self) -> Option<&TradeCurrency> {
        self.trade_currencies.first()
    }

    /// Replace the currency set with at most one currency
    pub fn set_single_trade_currency(&mut self, currency: Option<TradeCurrency>) {
        self.trade_currencies = currency.into_iter().collect();
    }

    /// Faster Payments record, if this is a Faster Payments account
    pub fn faster_payments(&self) -> Option<&FasterPaymentsAccount> {
        match &self.payload {
            PaymentAccountPayload::FasterPayments(account) => Some(account),
        }
    }

    pub fn faster_payments_mut(&mut self) -> Option<&mut FasterPaymentsAccount> {
        match &mut self.payload {
            PaymentAccountPayload::FasterPayments(account) => Some(account),
        }
    }

    /// Snapshot of the details a trading counterparty gets to see
    pub fn contract_data(&self) -> PaymentAccountContractData {
        let payload = match &self.payload {
            PaymentAccountPayload::FasterPayments(account) => ContractPayload::FasterPayments {
                sort_code: account.sort_code.clone(),
                account_nr: account.account_nr.clone(),
            },
        };

        PaymentAccountContractData {
            id: self.id,
            payment_method_id: self.payment_method().id().to_string(),
            max_trade_period_secs: self.payment_method().max_trade_period().num_seconds(),
            currency_code: self.single_trade_currency().map(|c| c.code.clone()),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_faster_payments_account() {
        let account = PaymentAccount::new(PaymentMethod::FasterPayments);

        assert!(!account.id().is_nil());
        assert_eq!(account.payment_method(), PaymentMethod::FasterPayments);
        assert_eq!(account.single_trade_currency(), Some(&TradeCurrency::gbp()));
        assert_eq!(account.account_name, "");

        let fp = account.faster_payments().unwrap();
        assert_eq!(fp.sort_code, "");
        assert_eq!(fp.account_nr, "");
    }

    #[test]
    fn test_single_trade_currency_holds_at_most_one() {
        let mut account = PaymentAccount::new(PaymentMethod::FasterPayments);

        account.set_single_trade_currency(None);
        assert!(account.trade_currencies().is_empty());
        assert_eq!(account.single_trade_currency(), None);

        account.set_single_trade_currency(Some(TradeCurrency::new("EUR", "Euro")));
        account.set_single_trade_currency(Some(TradeCurrency::gbp()));
        assert_eq!(account.trade_currencies().len(), 1);
        assert_eq!(account.single_trade_currency().unwrap().code, "GBP");
    }

    #[test]
    fn test_max_trade_period_is_one_day() {
        assert_eq!(
            PaymentMethod::FasterPayments.max_trade_period(),
            Duration::days(1)
        );
    }

    #[test]
    fn test_contract_data_projection() {
        let mut account = PaymentAccount::new(PaymentMethod::FasterPayments);
        {
            let fp = account.faster_payments_mut().unwrap();
            fp.sort_code = "12-34-56".to_string();
            fp.account_nr = "12345678".to_string();
        }

        let data = account.contract_data();
        assert_eq!(data.id, account.id());
        assert_eq!(data.payment_method_id, "FASTER_PAYMENTS");
        assert_eq!(data.currency_code.as_deref(), Some("GBP"));
        assert_eq!(
            data.payload,
            ContractPayload::FasterPayments {
                sort_code: "12-34-56".to_string(),
                account_nr: "12345678".to_string(),
            }
        );
    }

    #[test]
    fn test_payload_serializes_with_method_tag() {
        let account = PaymentAccount::new(PaymentMethod::FasterPayments);
        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(json["payload"]["paymentMethod"], "FASTER_PAYMENTS");
        assert_eq!(json["payload"]["sort_code"], "");
    }
}
