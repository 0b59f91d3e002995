//! redb-based persistence for the POS collections
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `documents` | collection key | JSON bytes | Whole-document collections |
//! | `session` | `"active_user"` | bare string | Active session marker |
//!
//! Collections (`products`, `transactions`, `users`) are each stored as a
//! single JSON array under one key; `settings` is a single JSON object.
//! Reads and writes are whole-document: there are no partial updates at the
//! storage level. Every mutation runs inside one redb write transaction, so
//! a read-modify-write cycle can never be observed half-applied by a reader
//! in the same process.
//!
//! # Corruption policy
//!
//! A document that no longer parses is treated as an empty collection (with
//! a warning) rather than crashing the application. Recovery from a corrupt
//! store is only ever explicit, via the demo reset.

mod backup;

pub use backup::{Backup, ImportReport};

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{AppSettings, Product, ProductUpdate, Transaction, User};

/// Table for collection documents: key = collection name, value = JSON bytes
const DOCUMENTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("documents");

/// Table for the session marker: key = "active_user", value = bare username
const SESSION_TABLE: TableDefinition<&str, &str> = TableDefinition::new("session");

pub(crate) const PRODUCTS_KEY: &str = "products";
pub(crate) const TRANSACTIONS_KEY: &str = "transactions";
pub(crate) const USERS_KEY: &str = "users";
pub(crate) const SETTINGS_KEY: &str = "settings";
const ACTIVE_USER_KEY: &str = "active_user";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed import payload: {0}")]
    MalformedImport(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// POS store backed by redb
///
/// Cheap to clone; all clones share the same database handle.
#[derive(Clone)]
pub struct PosStore {
    db: Arc<Database>,
}

impl PosStore {
    /// Open or create the database at the given path
    ///
    /// redb commits with `Durability::Immediate`, so a committed write
    /// survives power loss and the file is always in a consistent state.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init_tables(db)
    }

    /// Open an in-memory database (tests, demos)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init_tables(db)
    }

    fn init_tables(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DOCUMENTS_TABLE)?;
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Generic Document Access ==========

    fn read_document(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DOCUMENTS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn write_document(&self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DOCUMENTS_TABLE)?;
            table.insert(key, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Read a collection, falling back to empty when the key has never been
    /// written or the stored document no longer parses.
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        match self.read_document(key)? {
            None => Ok(Vec::new()),
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(items) => Ok(items),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Corrupted collection document, reading as empty");
                    Ok(Vec::new())
                }
            },
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        let bytes = serde_json::to_vec(items)?;
        self.write_document(key, &bytes)
    }

    // ========== Products ==========

    pub fn products(&self) -> StoreResult<Vec<Product>> {
        self.read_collection(PRODUCTS_KEY)
    }

    pub fn save_products(&self, products: &[Product]) -> StoreResult<()> {
        self.write_collection(PRODUCTS_KEY, products)
    }

    /// Append a product (read, push, write back)
    pub fn add_product(&self, product: &Product) -> StoreResult<()> {
        let mut products = self.products()?;
        products.push(product.clone());
        self.save_products(&products)
    }

    /// Merge a patch into the product with the matching id
    ///
    /// Unknown ids are a silent no-op, not an error.
    pub fn update_product(&self, id: &str, patch: &ProductUpdate) -> StoreResult<()> {
        let mut products = self.products()?;
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                patch.apply_to(product);
                self.save_products(&products)
            }
            None => Ok(()),
        }
    }

    /// Remove the product with the matching id, if any
    pub fn delete_product(&self, id: &str) -> StoreResult<()> {
        let mut products = self.products()?;
        products.retain(|p| p.id != id);
        self.save_products(&products)
    }

    // ========== Transactions ==========

    pub fn transactions(&self) -> StoreResult<Vec<Transaction>> {
        self.read_collection(TRANSACTIONS_KEY)
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> StoreResult<()> {
        self.write_collection(TRANSACTIONS_KEY, transactions)
    }

    /// Append to the transaction log (records are never edited or deleted)
    pub fn add_transaction(&self, transaction: &Transaction) -> StoreResult<()> {
        let mut transactions = self.transactions()?;
        transactions.push(transaction.clone());
        self.save_transactions(&transactions)
    }

    // ========== Users ==========

    pub fn users(&self) -> StoreResult<Vec<User>> {
        self.read_collection(USERS_KEY)
    }

    pub fn save_users(&self, users: &[User]) -> StoreResult<()> {
        self.write_collection(USERS_KEY, users)
    }

    // ========== Settings ==========

    /// Read settings, with the hardcoded default when never saved
    ///
    /// The default is not persisted until the first explicit save.
    pub fn settings(&self) -> StoreResult<AppSettings> {
        match self.read_document(SETTINGS_KEY)? {
            None => Ok(AppSettings::default()),
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(settings) => Ok(settings),
                Err(e) => {
                    tracing::warn!(error = %e, "Corrupted settings document, using defaults");
                    Ok(AppSettings::default())
                }
            },
        }
    }

    pub fn save_settings(&self, settings: &AppSettings) -> StoreResult<()> {
        let bytes = serde_json::to_vec(settings)?;
        self.write_document(SETTINGS_KEY, &bytes)
    }

    // ========== Session Marker ==========

    /// Username of the persisted session, if any (bare string, not JSON)
    pub fn active_username(&self) -> StoreResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;
        Ok(table.get(ACTIVE_USER_KEY)?.map(|guard| guard.value().to_string()))
    }

    pub fn set_active_username(&self, username: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.insert(ACTIVE_USER_KEY, username)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn clear_active_username(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(ACTIVE_USER_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Reset ==========

    /// Wipe every collection and the session marker in one transaction
    ///
    /// Destructive; only reachable through the explicit demo reset.
    pub fn clear_all(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut documents = write_txn.open_table(DOCUMENTS_TABLE)?;
            for key in [PRODUCTS_KEY, TRANSACTIONS_KEY, USERS_KEY, SETTINGS_KEY] {
                documents.remove(key)?;
            }
            let mut session = write_txn.open_table(SESSION_TABLE)?;
            session.remove(ACTIVE_USER_KEY)?;
        }
        write_txn.commit()?;
        tracing::info!("Store cleared");
        Ok(())
    }
}
