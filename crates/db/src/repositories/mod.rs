mod address_repo;
mod analytics_event_repo;
mod api_key_repo;
mod application_repo;
mod checklist_repo;
mod login_token_repo;
mod message_repo;
mod notification_preference_repo;
mod payout_repo;
mod product_repo;
mod seller_account_repo;
mod seller_profile_repo;
mod settlement_repo;
mod support_ticket_repo;
mod user_repo;

pub use address_repo::AddressRepo;
pub use analytics_event_repo::AnalyticsEventRepo;
pub use api_key_repo::ApiKeyRepo;
pub use application_repo::{ApplicationRepo, ReviewOutcome};
pub use checklist_repo::ChecklistRepo;
pub use login_token_repo::LoginTokenRepo;
pub use message_repo::MessageRepo;
pub use notification_preference_repo::NotificationPreferenceRepo;
pub use payout_repo::PayoutRepo;
pub use product_repo::ProductRepo;
pub use seller_account_repo::SellerAccountRepo;
pub use seller_profile_repo::SellerProfileRepo;
pub use settlement_repo::SettlementRepo;
pub use support_ticket_repo::SupportTicketRepo;
pub use user_repo::UserRepo;
