//! Post-commit side effects for the Broadway Sellers platform.
//!
//! Handlers publish [`PlatformEvent`]s to the [`EventBus`] only after their
//! database transaction commits. Two background subscribers consume them:
//! [`EventPersistence`] writes analytics rows, and the notification mailer in
//! the api crate sends emails. Neither can fail a request.

pub mod bus;
pub mod delivery;
pub mod persistence;

pub use bus::{EventBus, PlatformEvent};
pub use delivery::email::{EmailMessage, Mailer};
pub use persistence::EventPersistence;
