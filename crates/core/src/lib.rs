//! Domain logic for the Broadway Sellers platform.
//!
//! This crate has no I/O: it defines the error taxonomy, the application
//! lifecycle state machine, the onboarding checklist, seller feature flags,
//! and the input-format validation shared by the DB and API layers.

pub mod analytics;
pub mod api_keys;
pub mod application;
pub mod checklist;
pub mod error;
pub mod features;
pub mod profile;
pub mod roles;
pub mod types;
pub mod validation;
