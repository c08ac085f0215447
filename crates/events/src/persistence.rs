//! Durable analytics persistence.
//!
//! [`EventPersistence`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! broadcast channel and writes every received [`PlatformEvent`] to the
//! `analytics_events` table. It runs as a long-lived background task and
//! shuts down when the bus sender is dropped.

use tokio::sync::broadcast;

use broadway_db::repositories::AnalyticsEventRepo;
use broadway_db::DbPool;

use crate::bus::PlatformEvent;

/// Background service that persists platform events to the database.
pub struct EventPersistence;

impl EventPersistence {
    /// Run the persistence loop.
    ///
    /// Exits when the channel closes (the [`EventBus`](crate::bus::EventBus)
    /// was dropped). A failed insert is logged and skipped; analytics loss
    /// never affects request handling.
    pub async fn run(pool: DbPool, mut receiver: broadcast::Receiver<PlatformEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if !event.record_analytics {
                        continue;
                    }
                    if let Err(e) = AnalyticsEventRepo::insert(
                        &pool,
                        &event.event_name,
                        &event.payload,
                        event.actor_user_id,
                    )
                    .await
                    {
                        tracing::error!(
                            error = %e,
                            event_name = %event.event_name,
                            "Failed to persist analytics event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Analytics persistence lagged, some events were not persisted"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, analytics persistence shutting down");
                    break;
                }
            }
        }
    }
}
