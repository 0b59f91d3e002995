//! App Settings Model

use serde::{Deserialize, Serialize};

/// Store configuration (singleton)
///
/// Read with a fallback default when never saved; overwritten wholesale on
/// save. `default_low_stock_threshold` only seeds the threshold of newly
/// created products, it is never applied retroactively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub store_name: String,
    pub store_address: String,
    pub default_low_stock_threshold: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            store_name: "Atkins Guitar Store".to_string(),
            store_address: "123 Music Street, Harmony City".to_string(),
            default_low_stock_threshold: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.store_name, "Atkins Guitar Store");
        assert_eq!(settings.store_address, "123 Music Street, Harmony City");
        assert_eq!(settings.default_low_stock_threshold, 5);
    }
}
