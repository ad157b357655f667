//! Trade currencies

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency an account can be traded in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradeCurrency {
    /// ISO 4217 code (e.g., "GBP")
    pub code: String,
    /// Display name (e.g., "British Pound")
    pub name: String,
}

impl TradeCurrency {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Pound sterling, the only currency Faster Payments settles in
    pub fn gbp() -> Self {
        Self::new("GBP", "British Pound")
    }

    /// Name followed by the code in parentheses, e.g. "British Pound (GBP)"
    pub fn name_and_code(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

impl fmt::Display for TradeCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_and_code())
    }
}
