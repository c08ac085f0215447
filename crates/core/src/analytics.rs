//! Well-known analytics event names.
//!
//! Dot-separated `entity.action` names, persisted verbatim into the
//! `analytics_events` table by the event-persistence task.

pub const EVENT_APPLICATION_SUBMITTED: &str = "application.submitted";
pub const EVENT_APPLICATION_APPROVED: &str = "application.approved";
/// Notification-only: rejections are mailed but never recorded as analytics.
pub const EVENT_APPLICATION_REJECTED: &str = "application.rejected";
pub const EVENT_APPLICATION_STATUS_CHANGED: &str = "application.status_changed";
pub const EVENT_CLARIFICATION_REQUESTED: &str = "application.clarification_requested";
pub const EVENT_PRODUCT_DRAFTED: &str = "product.drafted";
pub const EVENT_PRODUCT_PUBLISHED: &str = "product.published";
pub const EVENT_FINANCE_ADDED: &str = "finance.added";
pub const EVENT_ADDRESS_ADDED: &str = "address.added";
pub const EVENT_SUPPORT_TICKET_CREATED: &str = "support.ticket_created";
