pub mod addresses;
pub mod admin_applications;
pub mod applications;
pub mod auth;
pub mod checklist;
pub mod finance;
pub mod products;
pub mod settings;
pub mod support;
