//! Data models
//!
//! Persisted document shapes. JSON key spelling (camelCase, lowercase enum
//! values) matches the store's historical export format, so backups created
//! by older installs keep importing cleanly.

pub mod product;
pub mod settings;
pub mod transaction;
pub mod user;

// Re-exports
pub use product::*;
pub use settings::*;
pub use transaction::*;
pub use user::*;
