//! Localised string lookup

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Source of localised UI strings
pub trait Localizer: Send + Sync {
    /// Look up a key, falling back to the key itself
    fn get(&self, key: &str) -> String;

    /// Look up a key and append a colon, as used for form labels
    fn get_with_colon(&self, key: &str) -> String {
        format!("{}:", self.get(key))
    }
}

/// In-memory resource bundle for one locale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceBundle {
    pub locale: String,
    #[serde(default)]
    pub strings: IndexMap<String, String>,
}

impl ResourceBundle {
    /// Create an empty bundle
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            strings: IndexMap::new(),
        }
    }

    /// The built-in English strings
    pub fn english() -> Self {
        let mut bundle = Self::new("en");
        for (key, value) in DEFAULT_EN {
            bundle.insert(*key, *value);
        }
        bundle
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Overlay another bundle's strings on top of this one
    pub fn merge(&mut self, other: ResourceBundle) {
        self.locale = other.locale;
        self.strings.extend(other.strings);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }
}

impl Default for ResourceBundle {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for ResourceBundle {
    fn get(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(value) => value.clone(),
            None => {
                tracing::warn!(key, locale = %self.locale, "Missing resource key");
                key.to_string()
            }
        }
    }
}

const DEFAULT_EN: &[(&str, &str)] = &[
    ("payment.accountNr", "Account number"),
    ("payment.account.name", "Account name"),
    ("payment.useCustomAccountName", "Use custom account name"),
    ("payment.maxPeriod", "Max. allowed trade period"),
    ("shared.currency", "Currency"),
    ("shared.paymentMethod", "Payment method"),
    ("time.day", "day"),
    ("time.days", "days"),
    ("FASTER_PAYMENTS", "UK Faster Payments"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_bundle_has_method_name() {
        let bundle = ResourceBundle::english();
        assert_eq!(bundle.get("FASTER_PAYMENTS"), "UK Faster Payments");
        assert_eq!(bundle.get_with_colon("shared.currency"), "Currency:");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let bundle = ResourceBundle::new("fr");
        assert_eq!(bundle.get("payment.accountNr"), "payment.accountNr");
        assert_eq!(bundle.get_with_colon("nope"), "nope:");
    }

    #[test]
    fn test_merge_overrides_and_keeps_order() {
        let mut base = ResourceBundle::english();
        let mut de = ResourceBundle::new("de");
        de.insert("payment.accountNr", "Kontonummer");

        base.merge(de);

        assert_eq!(base.locale, "de");
        assert_eq!(base.get("payment.accountNr"), "Kontonummer");
        assert_eq!(base.get("shared.currency"), "Currency");
        assert_eq!(
            base.strings.get_index(0).map(|(k, _)| k.as_str()),
            Some("payment.accountNr")
        );
    }
}
