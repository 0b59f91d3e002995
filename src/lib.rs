//! Atkins POS - embedded point-of-sale core for a single-tenant guitar store
//!
//! Everything persists in one local redb file; there is no server and no
//! network surface. The presentation layer (whatever renders the catalog,
//! cart and reports) sits on top of this crate.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # configuration
//! ├── models/        # persisted document shapes + patch payloads
//! ├── store/         # redb persistence, backup export/import
//! ├── auth/          # checksum hash, session manager
//! ├── inventory/     # product mirror + catalog mutations
//! ├── cart/          # cart lines + checkout engine
//! ├── reports/       # read-only aggregation
//! ├── seed.rs        # demo fixture / cold-start contract
//! └── utils/         # logging setup
//! ```

pub mod auth;
pub mod cart;
pub mod core;
pub mod inventory;
pub mod models;
pub mod reports;
pub mod seed;
pub mod store;
pub mod utils;

// Re-export public types
pub use auth::{Session, SessionManager, weak_hash};
pub use cart::{Cart, CheckoutError};
pub use crate::core::Config;
pub use inventory::Inventory;
pub use store::{Backup, ImportReport, PosStore, StoreError, StoreResult};
pub use utils::init_logger;
