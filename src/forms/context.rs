//! Collaborators handed to every form

use crate::config::FormConfig;
use crate::core::events::EventBus;
use crate::core::locale::Localizer;
use crate::core::validation::validators::{self, SharedValidator};
use std::sync::Arc;

/// Localiser, generic validator, event bus and settings shared by forms
#[derive(Clone)]
pub struct FormContext {
    pub localizer: Arc<dyn Localizer>,
    pub input_validator: SharedValidator,
    pub events: EventBus,
    pub config: FormConfig,
}

impl FormContext {
    /// Build a context from configuration, using its resource bundle
    pub fn new(config: FormConfig) -> Self {
        Self {
            localizer: Arc::new(config.resource_bundle()),
            input_validator: Arc::new(validators::input_validator(
                config.account_name_max_length,
            )),
            events: EventBus::new(config.event_capacity),
            config,
        }
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }

    pub fn with_input_validator(mut self, validator: SharedValidator) -> Self {
        self.input_validator = validator;
        self
    }

    pub fn with_events(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
