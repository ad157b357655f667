//! Form field identifiers, label sources and bank-code formats

use crate::core::locale::Localizer;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Identifies an input bound to a payment account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    AccountName,
    SortCode,
    AccountNr,
}

impl FieldId {
    /// Stable name used in events and error payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::AccountName => "account_name",
            FieldId::SortCode => "sort_code",
            FieldId::AccountNr => "account_nr",
        }
    }

    /// Where the label of this field comes from
    ///
    /// The sort code is a UK-only term and keeps its English label in every locale.
    pub fn label_source(&self) -> LabelSource {
        match self {
            FieldId::AccountName => LabelSource::Localized("payment.account.name"),
            FieldId::SortCode => LabelSource::EnglishOnly("UK sort code:"),
            FieldId::AccountNr => LabelSource::Localized("payment.accountNr"),
        }
    }

    /// Resolve the label of this field
    pub fn label(&self, localizer: &dyn Localizer) -> String {
        self.label_source().resolve(localizer)
    }
}

/// Origin of a row label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// Looked up in the resource bundle
    Localized(&'static str),
    /// Exempt from localisation, rendered verbatim
    EnglishOnly(&'static str),
}

impl LabelSource {
    pub fn resolve(&self, localizer: &dyn Localizer) -> String {
        match self {
            LabelSource::Localized(key) => localizer.get(key),
            LabelSource::EnglishOnly(text) => (*text).to_string(),
        }
    }

    pub fn is_localized(&self) -> bool {
        matches!(self, LabelSource::Localized(_))
    }
}

/// Country-specific bank code formats
#[derive(Debug, Clone)]
pub enum FieldFormat {
    /// Branch identifier (UK sort code, US routing number, ...)
    BranchId(String),
    /// Bank account number
    AccountNr(String),
}

impl FieldFormat {
    /// Validate a raw input against this format.
    ///
    /// Returns `None` when no format is known for the country.
    pub fn validate(&self, input: &str) -> Option<bool> {
        match self {
            FieldFormat::BranchId(country) => {
                branch_id_regex(country).map(|regex| regex.is_match(input))
            }
            FieldFormat::AccountNr(country) => {
                account_nr_regex(country).map(|regex| regex.is_match(input))
            }
        }
    }

    /// Whether a branch-id or account-number format exists for this country
    pub fn is_known_country(country: &str) -> bool {
        branch_id_regex(country).is_some() && account_nr_regex(country).is_some()
    }
}

// ASCII classes only: `\d` would also accept non-latin digits.
fn branch_id_regex(country: &str) -> Option<&'static Regex> {
    static GB: OnceLock<Regex> = OnceLock::new();
    static US: OnceLock<Regex> = OnceLock::new();
    static CA: OnceLock<Regex> = OnceLock::new();
    static AU: OnceLock<Regex> = OnceLock::new();

    let regex = match country {
        "GB" => GB.get_or_init(|| {
            Regex::new(r"^(?:[0-9]{6}|[0-9]{2}-[0-9]{2}-[0-9]{2}|[0-9]{2} [0-9]{2} [0-9]{2})$")
                .unwrap()
        }),
        "US" => US.get_or_init(|| Regex::new(r"^[0-9]{9}$").unwrap()),
        "CA" => CA.get_or_init(|| Regex::new(r"^[0-9]{5}$").unwrap()),
        "AU" => AU.get_or_init(|| Regex::new(r"^(?:[0-9]{6}|[0-9]{3}-[0-9]{3})$").unwrap()),
        _ => return None,
    };
    Some(regex)
}

fn account_nr_regex(country: &str) -> Option<&'static Regex> {
    static GB: OnceLock<Regex> = OnceLock::new();
    static US: OnceLock<Regex> = OnceLock::new();
    static CA: OnceLock<Regex> = OnceLock::new();
    static AU: OnceLock<Regex> = OnceLock::new();

    let regex = match country {
        "GB" => GB.get_or_init(|| Regex::new(r"^[0-9]{8}$").unwrap()),
        "US" => US.get_or_init(|| Regex::new(r"^[0-9]{4,17}$").unwrap()),
        "CA" => CA.get_or_init(|| Regex::new(r"^[0-9]{7,12}$").unwrap()),
        "AU" => AU.get_or_init(|| Regex::new(r"^[0-9]{4,10}$").unwrap()),
        _ => return None,
    };
    Some(regex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::ResourceBundle;

    #[test]
    fn test_gb_sort_code_shapes() {
        let format = FieldFormat::BranchId("GB".to_string());

        assert_eq!(format.validate("123456"), Some(true));
        assert_eq!(format.validate("12-34-56"), Some(true));
        assert_eq!(format.validate("12 34 56"), Some(true));
        assert_eq!(format.validate("12-34 56"), Some(false));
        assert_eq!(format.validate("1234567"), Some(false));
        assert_eq!(format.validate("12-34-5a"), Some(false));
        assert_eq!(format.validate(""), Some(false));
    }

    #[test]
    fn test_gb_account_nr_is_exactly_eight_digits() {
        let format = FieldFormat::AccountNr("GB".to_string());

        assert_eq!(format.validate("12345678"), Some(true));
        assert_eq!(format.validate("1234567"), Some(false));
        assert_eq!(format.validate("123456789"), Some(false));
        assert_eq!(format.validate("1234567x"), Some(false));
        assert_eq!(format.validate(""), Some(false));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        let format = FieldFormat::AccountNr("GB".to_string());
        // Arabic-Indic digits
        assert_eq!(format.validate("١٢٣٤٥٦٧٨"), Some(false));
    }

    #[test]
    fn test_other_countries() {
        assert_eq!(
            FieldFormat::BranchId("US".to_string()).validate("021000021"),
            Some(true)
        );
        assert_eq!(
            FieldFormat::BranchId("AU".to_string()).validate("062-000"),
            Some(true)
        );
        assert_eq!(
            FieldFormat::AccountNr("CA".to_string()).validate("1234567"),
            Some(true)
        );
    }

    #[test]
    fn test_unknown_country_has_no_format() {
        assert_eq!(FieldFormat::BranchId("XX".to_string()).validate("1"), None);
        assert!(!FieldFormat::is_known_country("XX"));
        assert!(FieldFormat::is_known_country("GB"));
    }

    #[test]
    fn test_sort_code_label_is_english_only() {
        let mut bundle = ResourceBundle::new("de");
        bundle.insert("payment.accountNr", "Kontonummer");

        assert_eq!(FieldId::SortCode.label(&bundle), "UK sort code:");
        assert_eq!(FieldId::AccountNr.label(&bundle), "Kontonummer");
        assert!(!FieldId::SortCode.label_source().is_localized());
    }
}
