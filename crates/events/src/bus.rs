//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`PlatformEvent`]s and is
//! shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use broadway_core::types::DbId;

// ---------------------------------------------------------------------------
// PlatformEvent
// ---------------------------------------------------------------------------

/// A domain event published after a state change committed.
///
/// Constructed via [`PlatformEvent::new`] and enriched with
/// [`with_actor`](PlatformEvent::with_actor),
/// [`with_recipient`](PlatformEvent::with_recipient), and
/// [`with_payload`](PlatformEvent::with_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformEvent {
    /// Dot-separated event name, e.g. `"application.approved"`.
    pub event_name: String,

    /// Id of the user the event concerns (recorded with the analytics row).
    pub actor_user_id: Option<DbId>,

    /// Email address the notification mailer should deliver to, when the
    /// event has a user-facing notification.
    pub recipient_email: Option<String>,

    /// Free-form JSON payload persisted as the analytics event data.
    pub payload: serde_json::Value,

    /// Whether the persistence task should record this event. Notification-
    /// only events (e.g. the rejection notice) set this to false.
    pub record_analytics: bool,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl PlatformEvent {
    /// Create a new event with only the required name.
    pub fn new(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            actor_user_id: None,
            recipient_email: None,
            payload: serde_json::Value::Object(Default::default()),
            record_analytics: true,
            timestamp: Utc::now(),
        }
    }

    /// Mark the event as notification-only: the mailer still sees it, but no
    /// analytics row is written.
    pub fn without_analytics(mut self) -> Self {
        self.record_analytics = false;
        self
    }

    /// Attach the user the event concerns.
    pub fn with_actor(mut self, user_id: DbId) -> Self {
        self.actor_user_id = Some(user_id);
        self
    }

    /// Attach a notification recipient.
    pub fn with_recipient(mut self, email: impl Into<String>) -> Self {
        self.recipient_email = Some(email.into());
        self
    }

    /// Set the JSON payload.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so any number of subscribers independently
/// receive every published event.
pub struct EventBus {
    sender: broadcast::Sender<PlatformEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed messages are dropped
    /// and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: PlatformEvent) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Create a new subscription receiving every event published after this
    /// call.
    pub fn subscribe(&self) -> broadcast::Receiver<PlatformEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(
            PlatformEvent::new("application.submitted")
                .with_actor(7)
                .with_recipient("a@x.com")
                .with_payload(serde_json::json!({"application_id": 1})),
        );

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_name, "application.submitted");
        assert_eq!(event.actor_user_id, Some(7));
        assert_eq!(event.recipient_email.as_deref(), Some("a@x.com"));
        assert_eq!(event.payload["application_id"], 1);
    }

    #[test]
    fn publish_without_subscribers_is_a_noop() {
        let bus = EventBus::default();
        bus.publish(PlatformEvent::new("product.drafted"));
    }
}
