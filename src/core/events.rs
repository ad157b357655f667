//! Form events and the validity signal
//!
//! The form never talks to widgets directly. It publishes what happened on an
//! [`EventBus`] (backed by `tokio::sync::broadcast`) and writes its current
//! validity into a [`ValiditySignal`] (backed by `tokio::sync::watch`), which
//! is what a confirm button observes.
//!
//! ```text
//! on_change() ──▶ reducer ──▶ recompute_validity() ──▶ ValiditySignal ──▶ confirm button
//!                                   │
//!                                   └──▶ EventBus::publish() ──▶ subscribers
//! ```
//!
//! Both channels have a non-blocking send side, so publishing from the UI
//! thread never waits on observers.

use crate::core::field::FieldId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use uuid::Uuid;

/// Something that happened on a payment form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FormEvent {
    /// A bound field received a new value
    FieldChanged {
        account_id: Uuid,
        field: FieldId,
        value: String,
    },
    /// The aggregate validity flipped
    ValidityChanged { account_id: Uuid, valid: bool },
    /// The account was confirmed and leaves edit mode
    Confirmed { account_id: Uuid },
}

impl FormEvent {
    pub fn account_id(&self) -> Uuid {
        match self {
            FormEvent::FieldChanged { account_id, .. }
            | FormEvent::ValidityChanged { account_id, .. }
            | FormEvent::Confirmed { account_id } => *account_id,
        }
    }

    /// Get the action name
    pub fn action(&self) -> &str {
        match self {
            FormEvent::FieldChanged { .. } => "field_changed",
            FormEvent::ValidityChanged { .. } => "validity_changed",
            FormEvent::Confirmed { .. } => "confirmed",
        }
    }
}

/// Envelope wrapping a form event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: FormEvent,
}

impl EventEnvelope {
    pub fn new(event: FormEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone; clones share the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// Slow receivers lose events once `capacity` envelopes are buffered.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Never blocks and never fails. Returns the number of receivers.
    pub fn publish(&self, event: FormEvent) -> usize {
        let envelope = EventEnvelope::new(event);
        // send() returns Err only if there are no receivers, which is fine
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Externally observed "all inputs valid" flag
///
/// Clones share the same underlying value.
#[derive(Debug, Clone)]
pub struct ValiditySignal {
    sender: Arc<watch::Sender<bool>>,
}

impl ValiditySignal {
    /// A new signal, initially invalid
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Store a value; returns true when it differs from the previous one
    pub fn set(&self, valid: bool) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == valid {
                false
            } else {
                *current = valid;
                true
            }
        })
    }

    pub fn get(&self) -> bool {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }
}

impl Default for ValiditySignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_changed_serialization() {
        let event = FormEvent::FieldChanged {
            account_id: Uuid::new_v4(),
            field: FieldId::SortCode,
            value: "12-34-56".to_string(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["action"], "field_changed");
        assert_eq!(json["field"], "sort_code");
        assert_eq!(json["value"], "12-34-56");
    }

    #[test]
    fn test_event_accessors() {
        let id = Uuid::new_v4();
        let event = FormEvent::ValidityChanged {
            account_id: id,
            valid: true,
        };

        assert_eq!(event.account_id(), id);
        assert_eq!(event.action(), "validity_changed");
        assert_eq!(FormEvent::Confirmed { account_id: id }.action(), "confirmed");
    }

    #[test]
    fn test_event_envelope_has_metadata() {
        let envelope = EventEnvelope::new(FormEvent::Confirmed {
            account_id: Uuid::new_v4(),
        });
        assert!(!envelope.id.is_nil());
        assert!(envelope.timestamp <= Utc::now());
    }

    #[tokio::test]
    async fn test_event_bus_publish_subscribe() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        let account_id = Uuid::new_v4();
        let receivers = bus.publish(FormEvent::Confirmed { account_id });
        assert_eq!(receivers, 1);

        let received = rx.recv().await.unwrap();
        assert_eq!(received.event.account_id(), account_id);
    }

    #[test]
    fn test_event_bus_publish_without_subscribers() {
        let bus = EventBus::new(16);
        let receivers = bus.publish(FormEvent::Confirmed {
            account_id: Uuid::new_v4(),
        });
        assert_eq!(receivers, 0);
    }

    #[test]
    fn test_event_bus_clone_shares_channel() {
        let bus = EventBus::default();
        let _rx = bus.subscribe();

        let bus2 = bus.clone();
        assert_eq!(bus2.receiver_count(), 1);
    }

    #[test]
    fn test_validity_signal_reports_changes_only() {
        let signal = ValiditySignal::new();
        assert!(!signal.get());

        assert!(!signal.set(false));
        assert!(signal.set(true));
        assert!(!signal.set(true));
        assert!(signal.get());
    }

    #[tokio::test]
    async fn test_validity_signal_wakes_observer() {
        let signal = ValiditySignal::new();
        let mut rx = signal.subscribe();

        signal.set(true);
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());
    }
}
