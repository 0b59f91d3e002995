//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog category (fixed enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Acoustic,
    Electric,
    Bass,
    Accessories,
}

/// Catalog entry
///
/// `stock` can never go negative: it is unsigned and checkout validates
/// every decrement before writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    /// Unit price, serialized as a plain JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    pub min_stock_threshold: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Low stock means at or below the product's own threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock_threshold
    }
}

/// Update product payload
///
/// Only-present-fields semantics: `None` preserves the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<Category>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
    pub min_stock_threshold: Option<u32>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl ProductUpdate {
    /// Merge the present fields into an existing product.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(brand) = &self.brand {
            product.brand = brand.clone();
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(threshold) = self.min_stock_threshold {
            product.min_stock_threshold = threshold;
        }
        if let Some(image) = &self.image {
            product.image = Some(image.clone());
        }
        if let Some(description) = &self.description {
            product.description = Some(description.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Stratocaster Classic".to_string(),
            brand: "Fender".to_string(),
            category: Category::Electric,
            price: Decimal::from(45000),
            stock: 8,
            min_stock_threshold: 3,
            image: None,
            description: Some("Classic electric guitar".to_string()),
        }
    }

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut product = sample();
        let patch = ProductUpdate {
            stock: Some(3),
            ..Default::default()
        };
        patch.apply_to(&mut product);

        assert_eq!(product.stock, 3);
        assert_eq!(product.name, "Stratocaster Classic");
        assert_eq!(product.brand, "Fender");
        assert_eq!(product.price, Decimal::from(45000));
        assert_eq!(product.description.as_deref(), Some("Classic electric guitar"));
    }

    #[test]
    fn test_low_stock_boundary() {
        let mut product = sample();
        product.stock = 3;
        assert!(product.is_low_stock());
        product.stock = 4;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_json_shape_matches_export_format() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["category"], "electric");
        assert_eq!(value["minStockThreshold"], 3);
        assert_eq!(value["price"], 45000.0);
        // absent optional fields are omitted, not null
        assert!(value.get("image").is_none());
    }
}
