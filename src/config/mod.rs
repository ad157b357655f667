//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::field::FieldFormat;
use crate::core::locale::ResourceBundle;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_country_code() -> String {
    "GB".to_string()
}

fn default_auto_name_account_chars() -> usize {
    9
}

fn default_account_name_max_length() -> u64 {
    100
}

fn default_event_capacity() -> usize {
    256
}

/// Settings shared by all payment forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Country whose bank code formats are enforced
    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// How many account-number characters go into an auto-filled account name
    #[serde(default = "default_auto_name_account_chars")]
    pub auto_name_account_chars: usize,

    /// Longest accepted account name, in characters
    #[serde(default = "default_account_name_max_length")]
    pub account_name_max_length: u64,

    /// Buffer size of the form event bus
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    /// Strings overriding the built-in English bundle
    #[serde(default)]
    pub bundle: Option<ResourceBundle>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            country_code: default_country_code(),
            auto_name_account_chars: default_auto_name_account_chars(),
            account_name_max_length: default_account_name_max_length(),
            event_capacity: default_event_capacity(),
            bundle: None,
        }
    }
}

impl FormConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(
            country = %config.country_code,
            overrides = config.bundle.as_ref().map_or(0, |b| b.strings.len()),
            "Loaded form config"
        );
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !FieldFormat::is_known_country(&self.country_code) {
            return Err(ConfigError::InvalidValue {
                field: "country_code".to_string(),
                value: self.country_code.clone(),
                message: "no bank code format for this country".to_string(),
            });
        }
        if self.auto_name_account_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auto_name_account_chars".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.account_name_max_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "account_name_max_length".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "event_capacity".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The English bundle with the configured overrides applied
    pub fn resource_bundle(&self) -> ResourceBundle {
        let mut bundle = ResourceBundle::english();
        if let Some(overrides) = &self.bundle {
            bundle.merge(overrides.clone());
        }
        bundle
    }
}
