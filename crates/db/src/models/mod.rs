pub mod address;
pub mod analytics_event;
pub mod api_key;
pub mod application;
pub mod checklist;
pub mod login_token;
pub mod message;
pub mod notification_preference;
pub mod payout;
pub mod product;
pub mod seller_account;
pub mod seller_profile;
pub mod settlement;
pub mod support_ticket;
pub mod user;
