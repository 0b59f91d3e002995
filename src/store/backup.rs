//! Backup export / import
//!
//! Export is a point-in-time snapshot of all four collections plus a
//! timestamp. Import is tolerant per key: any subset of the four collection
//! keys may be present, each present key overwrites its collection
//! wholesale, and a key that fails to parse mutates nothing while the rest
//! of the payload still applies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PosStore, StoreError, StoreResult};
use crate::models::{AppSettings, Product, Transaction, User};

/// Full store snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
    pub users: Vec<User>,
    pub settings: AppSettings,
    /// RFC 3339 timestamp of the export
    pub export_date: String,
}

/// Which collection keys an import actually overwrote
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub applied: Vec<&'static str>,
}

impl PosStore {
    /// Snapshot every collection for backup
    pub fn export_all(&self) -> StoreResult<Backup> {
        Ok(Backup {
            products: self.products()?,
            transactions: self.transactions()?,
            users: self.users()?,
            settings: self.settings()?,
            export_date: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Restore collections from a backup payload
    ///
    /// Accepts any subset of `products`, `transactions`, `users` and
    /// `settings`; absent keys are left untouched. Returns
    /// [`StoreError::MalformedImport`] when the payload is not an object or
    /// when any present key fails to parse; valid sibling keys are applied
    /// before the error is reported.
    pub fn import_all(&self, data: &Value) -> StoreResult<ImportReport> {
        let Some(map) = data.as_object() else {
            return Err(StoreError::MalformedImport(
                "expected a JSON object".to_string(),
            ));
        };

        let mut report = ImportReport::default();
        let mut invalid: Vec<&'static str> = Vec::new();

        if let Some(value) = map.get("products") {
            match serde_json::from_value::<Vec<Product>>(value.clone()) {
                Ok(products) => {
                    self.save_products(&products)?;
                    report.applied.push("products");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Rejecting malformed products key in import");
                    invalid.push("products");
                }
            }
        }

        if let Some(value) = map.get("transactions") {
            match serde_json::from_value::<Vec<Transaction>>(value.clone()) {
                Ok(transactions) => {
                    self.save_transactions(&transactions)?;
                    report.applied.push("transactions");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Rejecting malformed transactions key in import");
                    invalid.push("transactions");
                }
            }
        }

        if let Some(value) = map.get("users") {
            match serde_json::from_value::<Vec<User>>(value.clone()) {
                Ok(users) => {
                    self.save_users(&users)?;
                    report.applied.push("users");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Rejecting malformed users key in import");
                    invalid.push("users");
                }
            }
        }

        if let Some(value) = map.get("settings") {
            match serde_json::from_value::<AppSettings>(value.clone()) {
                Ok(settings) => {
                    self.save_settings(&settings)?;
                    report.applied.push("settings");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Rejecting malformed settings key in import");
                    invalid.push("settings");
                }
            }
        }

        if !invalid.is_empty() {
            return Err(StoreError::MalformedImport(invalid.join(", ")));
        }

        tracing::info!(applied = ?report.applied, "Import applied");
        Ok(report)
    }
}
