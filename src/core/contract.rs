//! Contract data: the read-only payment details shown to a trading counterparty

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Method-specific part of the contract data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "paymentMethod")]
pub enum ContractPayload {
    #[serde(rename = "FASTER_PAYMENTS", rename_all = "camelCase")]
    FasterPayments { sort_code: String, account_nr: String },
}

/// Immutable snapshot of a payment account, as embedded in a trade contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountContractData {
    pub id: Uuid,
    pub payment_method_id: String,
    pub max_trade_period_secs: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    pub payload: ContractPayload,
}

impl PaymentAccountContractData {
    /// One-line summary for trade overviews
    pub fn payment_details(&self) -> String {
        match &self.payload {
            ContractPayload::FasterPayments {
                sort_code,
                account_nr,
            } => format!(
                "Faster Payments - UK Sort code: {}, Account number: {}",
                sort_code, account_nr
            ),
        }
    }

    /// Multi-line variant used in the trade popup
    pub fn payment_details_for_trade_popup(&self) -> String {
        match &self.payload {
            ContractPayload::FasterPayments {
                sort_code,
                account_nr,
            } => format!("UK Sort code: {}\nAccount number: {}", sort_code, account_nr),
        }
    }
}
