//! Demo data seeding
//!
//! Defines the cold-start contract: a fresh store is seeded with one admin
//! user, eight catalog products and two historical transactions. Seeding is
//! a no-op once any product exists, so it is safe to call on every startup.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::auth::weak_hash;
use crate::models::{
    CartItem, Category, PaymentType, Product, Role, Transaction, User,
};
use crate::store::{PosStore, StoreResult};

/// Seed the demo fixture unless the catalog already has products.
pub fn initialize_demo_data(store: &PosStore) -> StoreResult<()> {
    if !store.products()?.is_empty() {
        return Ok(());
    }
    tracing::info!("Empty catalog detected, seeding demo data");

    store.save_users(&demo_users())?;
    let products = demo_products();
    store.save_products(&products)?;
    store.save_transactions(&demo_transactions(&products))?;
    Ok(())
}

/// Wipe the store and reseed (the explicit, destructive demo reset).
pub fn reset_demo_data(store: &PosStore) -> StoreResult<()> {
    store.clear_all()?;
    initialize_demo_data(store)
}

fn demo_users() -> Vec<User> {
    vec![User {
        username: "admin".to_string(),
        password_hash: weak_hash("admin123"),
        name: "Store Admin".to_string(),
        role: Role::Admin,
    }]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    brand: &str,
    category: Category,
    price: u64,
    stock: u32,
    min_stock_threshold: u32,
    description: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        category,
        price: Decimal::from(price),
        stock,
        min_stock_threshold,
        image: None,
        description: Some(description.to_string()),
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Stratocaster Classic",
            "Fender",
            Category::Electric,
            45000,
            8,
            3,
            "Classic electric guitar with vintage tone",
        ),
        product(
            "2",
            "Les Paul Standard",
            "Gibson",
            Category::Electric,
            89000,
            4,
            2,
            "Iconic rock guitar with rich sustain",
        ),
        product(
            "3",
            "Dreadnought D-28",
            "Martin",
            Category::Acoustic,
            125000,
            6,
            2,
            "Premium acoustic with warm tone",
        ),
        product(
            "4",
            "Jazz Bass",
            "Fender",
            Category::Bass,
            52000,
            5,
            2,
            "Versatile bass guitar for any genre",
        ),
        product(
            "5",
            "Classical GC Series",
            "Yamaha",
            Category::Acoustic,
            18000,
            12,
            5,
            "Excellent classical guitar for students",
        ),
        product(
            "6",
            "Precision Bass",
            "Fender",
            Category::Bass,
            48000,
            3,
            2,
            "The original bass sound",
        ),
        product(
            "7",
            "Telecaster Deluxe",
            "Fender",
            Category::Electric,
            55000,
            2,
            3,
            "Twangy classic with modern features",
        ),
        product(
            "8",
            "Guitar Strings Set",
            "Ernie Ball",
            Category::Accessories,
            450,
            50,
            20,
            "Premium guitar strings",
        ),
    ]
}

fn demo_transactions(products: &[Product]) -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TXN-001".to_string(),
            date: (Utc::now() - Duration::days(1)).to_rfc3339(),
            items: vec![
                CartItem {
                    product: products[0].clone(),
                    quantity: 1,
                },
                CartItem {
                    product: products[7].clone(),
                    quantity: 2,
                },
            ],
            total: Decimal::from(45900),
            payment_type: PaymentType::Cash,
            cashier_name: "Store Admin".to_string(),
        },
        Transaction {
            id: "TXN-002".to_string(),
            date: (Utc::now() - Duration::days(2)).to_rfc3339(),
            items: vec![CartItem {
                product: products[4].clone(),
                quantity: 1,
            }],
            total: Decimal::from(18000),
            payment_type: PaymentType::Gcash,
            cashier_name: "Store Admin".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_writes_full_fixture() {
        let store = PosStore::open_in_memory().unwrap();
        initialize_demo_data(&store).unwrap();

        let products = store.products().unwrap();
        assert_eq!(products.len(), 8);
        assert_eq!(products[0].id, "1");
        assert_eq!(products[7].id, "8");
        assert_eq!(products[7].stock, 50);

        let users = store.users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "admin");
        assert_eq!(users[0].password_hash, weak_hash("admin123"));
        assert_eq!(users[0].password_hash, "-g10hvh");

        let transactions = store.transactions().unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, "TXN-001");
        assert_eq!(transactions[0].total, Decimal::from(45900));
        assert_eq!(transactions[1].id, "TXN-002");
        assert_eq!(transactions[1].payment_type, PaymentType::Gcash);
    }

    #[test]
    fn test_seed_total_matches_items() {
        let store = PosStore::open_in_memory().unwrap();
        initialize_demo_data(&store).unwrap();

        for transaction in store.transactions().unwrap() {
            let computed: Decimal = transaction.items.iter().map(CartItem::line_total).sum();
            assert_eq!(transaction.total, computed, "total drifted for {}", transaction.id);
        }
    }

    #[test]
    fn test_seed_is_idempotent() {
        let store = PosStore::open_in_memory().unwrap();
        initialize_demo_data(&store).unwrap();

        store.delete_product("8").unwrap();
        store.save_users(&[]).unwrap();

        // second call must not reseed over existing data
        initialize_demo_data(&store).unwrap();
        assert_eq!(store.products().unwrap().len(), 7);
        assert!(store.users().unwrap().is_empty());
    }

    #[test]
    fn test_reset_reseeds_from_scratch() {
        let store = PosStore::open_in_memory().unwrap();
        initialize_demo_data(&store).unwrap();
        store.delete_product("8").unwrap();
        store.set_active_username("admin").unwrap();

        reset_demo_data(&store).unwrap();

        assert_eq!(store.products().unwrap().len(), 8);
        assert!(store.active_username().unwrap().is_none());
    }
}
