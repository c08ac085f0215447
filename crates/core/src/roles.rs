//! Well-known role name constants.
//!
//! Stored verbatim in the `users.role` column; there is no roles table.

pub const ROLE_SELLER: &str = "seller";
pub const ROLE_ADMIN: &str = "admin";
