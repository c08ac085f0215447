//! Notification mailer background task.
//!
//! Subscribes to the event bus and renders/delivers the email matching each
//! event that carries a recipient. Runs post-commit and fire-and-forget: a
//! delivery failure is logged and never affects the request that published
//! the event.

use tokio::sync::broadcast;

use broadway_core::analytics::{
    EVENT_APPLICATION_APPROVED, EVENT_APPLICATION_REJECTED, EVENT_APPLICATION_STATUS_CHANGED,
    EVENT_APPLICATION_SUBMITTED, EVENT_CLARIFICATION_REQUESTED, EVENT_SUPPORT_TICKET_CREATED,
};
use broadway_events::delivery::templates;
use broadway_events::{EmailMessage, Mailer, PlatformEvent};

/// Notification-only event carrying a sign-in link for the mailer.
pub const EVENT_MAGIC_LINK_REQUESTED: &str = "auth.magic_link_requested";

/// Background service mapping platform events to notification emails.
pub struct NotificationMailer {
    mailer: Mailer,
    /// Public base URL for links embedded in emails.
    base_url: String,
}

impl NotificationMailer {
    pub fn new(mailer: Mailer, base_url: String) -> Self {
        Self { mailer, base_url }
    }

    /// Run the mailer loop until the event bus closes.
    pub async fn run(self, mut receiver: broadcast::Receiver<PlatformEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    let Some(message) = self.render(&event) else {
                        continue;
                    };
                    if let Err(e) = self.mailer.deliver(&message).await {
                        tracing::error!(
                            error = %e,
                            event_name = %event.event_name,
                            to = %message.to,
                            "Failed to deliver notification email"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification mailer lagged, emails were dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification mailer shutting down");
                    break;
                }
            }
        }
    }

    /// Render the email for an event, if it has one.
    fn render(&self, event: &PlatformEvent) -> Option<EmailMessage> {
        let to = event.recipient_email.as_deref()?;
        let status_url = format!("{}/status", self.base_url);

        match event.event_name.as_str() {
            EVENT_APPLICATION_SUBMITTED => Some(templates::application_submitted(to, &status_url)),
            EVENT_APPLICATION_APPROVED => {
                let dashboard_url = format!("{}/app/home", self.base_url);
                Some(templates::application_approved(to, &dashboard_url))
            }
            EVENT_APPLICATION_REJECTED => {
                let reason = event.payload["reason"].as_str().unwrap_or_default();
                Some(templates::application_rejected(to, reason))
            }
            EVENT_CLARIFICATION_REQUESTED => {
                let message = event.payload["message"].as_str().unwrap_or_default();
                Some(templates::clarification_needed(to, message, &status_url))
            }
            EVENT_APPLICATION_STATUS_CHANGED => {
                let status = event.payload["status"].as_str().unwrap_or_default();
                Some(templates::status_changed(to, status, &status_url))
            }
            EVENT_SUPPORT_TICKET_CREATED => {
                let ticket_id = event.payload["ticket_id"].as_i64().unwrap_or_default();
                let subject = event.payload["subject"].as_str().unwrap_or_default();
                Some(templates::support_ticket_created(to, ticket_id, subject))
            }
            EVENT_MAGIC_LINK_REQUESTED => {
                let link = event.payload["link"].as_str().unwrap_or_default();
                Some(templates::magic_link(to, link))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_mailer() -> NotificationMailer {
        NotificationMailer::new(
            Mailer::FileDrop(std::env::temp_dir()),
            "https://broadway.local".to_string(),
        )
    }

    #[test]
    fn events_without_recipient_render_nothing() {
        let mailer = test_mailer();
        let event = PlatformEvent::new("product.drafted").with_actor(1);
        assert!(mailer.render(&event).is_none());
    }

    #[test]
    fn rejection_email_carries_the_reason() {
        let mailer = test_mailer();
        let event = PlatformEvent::new(EVENT_APPLICATION_REJECTED)
            .with_recipient("a@x.com")
            .with_payload(serde_json::json!({"application_id": 1, "reason": "Incomplete GST"}));

        let message = mailer.render(&event).unwrap();
        assert_eq!(message.to, "a@x.com");
        assert!(message.html_body.contains("Incomplete GST"));
    }

    #[test]
    fn unknown_event_names_are_ignored() {
        let mailer = test_mailer();
        let event = PlatformEvent::new("something.else").with_recipient("a@x.com");
        assert!(mailer.render(&event).is_none());
    }
}
