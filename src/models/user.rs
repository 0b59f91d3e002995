//! User Model

use serde::{Deserialize, Serialize};

/// User role (single fixed value; user management is out of scope)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
}

/// Authentication principal
///
/// `password_hash` is the legacy checksum from [`crate::auth::weak_hash`],
/// not a cryptographic hash. Usernames are unique within the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub password_hash: String,
    /// Display name, shown as the cashier on receipts
    pub name: String,
    pub role: Role,
}
