//! Cart and checkout engine
//!
//! The cart is a transient in-memory line-item collection; it survives only
//! by being snapshotted into a transaction at checkout. Checkout is the one
//! multi-step invariant-bearing operation in the system: stock for every
//! line is validated before any write, so a failed checkout mutates nothing.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::Session;
use crate::inventory::Inventory;
use crate::models::{CartItem, PaymentType, Product, ProductUpdate, Transaction};
use crate::store::StoreError;

/// Checkout failures
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    #[error("Product no longer exists: {product_id}")]
    UnknownProduct { product_id: String },

    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Transient line-item collection
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quantity of a product; merges into an existing line for the
    /// same product id, otherwise appends. Stock is not checked here, only
    /// at checkout.
    pub fn add(&mut self, product: Product, quantity: u32) {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem { product, quantity }),
        }
    }

    /// Set a line's quantity exactly; zero removes the line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Cart total, computed fresh on every call
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Turn the cart into an immutable transaction.
    ///
    /// Sequence: validate every line against current stock (all-or-nothing,
    /// `quantity == stock` passes), snapshot the lines into a transaction,
    /// decrement stock per line through the inventory update path, append
    /// the transaction, refresh the mirror and empty the cart. The decrement
    /// reuses the stock values captured at validation; nothing else writes
    /// between the two steps in this single-process store.
    pub fn checkout(
        &mut self,
        inventory: &mut Inventory,
        session: &Session,
        payment_type: PaymentType,
    ) -> Result<Transaction, CheckoutError> {
        if self.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        inventory.refresh()?;

        let mut decrements = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let current = inventory.find_by_id(&item.product.id).ok_or_else(|| {
                CheckoutError::UnknownProduct {
                    product_id: item.product.id.clone(),
                }
            })?;
            if item.quantity > current.stock {
                return Err(CheckoutError::InsufficientStock {
                    product_id: current.id.clone(),
                    requested: item.quantity,
                    available: current.stock,
                });
            }
            decrements.push((current.id.clone(), current.stock - item.quantity));
        }

        let transaction = Transaction {
            id: format!("TXN-{}", Uuid::new_v4()),
            date: chrono::Utc::now().to_rfc3339(),
            items: self.items.clone(),
            total: self.total(),
            payment_type,
            cashier_name: session.cashier_name().to_string(),
        };

        for (product_id, remaining) in decrements {
            let patch = ProductUpdate {
                stock: Some(remaining),
                ..Default::default()
            };
            inventory.update(&product_id, &patch)?;
        }

        inventory.store().add_transaction(&transaction)?;
        inventory.refresh()?;
        self.clear();

        tracing::info!(
            transaction_id = %transaction.id,
            total = %transaction.total,
            lines = transaction.items.len(),
            cashier = %transaction.cashier_name,
            "Checkout completed"
        );

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionManager;
    use crate::seed;
    use crate::store::PosStore;

    fn setup() -> (Cart, Inventory, Session) {
        let store = PosStore::open_in_memory().unwrap();
        seed::initialize_demo_data(&store).unwrap();

        let mut auth = SessionManager::new(store.clone());
        assert!(auth.login("admin", "admin123").unwrap());
        let session = auth.session().unwrap().clone();

        let inventory = Inventory::new(store).unwrap();
        (Cart::new(), inventory, session)
    }

    #[test]
    fn test_add_merges_lines_by_product() {
        let (mut cart, inventory, _) = setup();
        let strat = inventory.find_by_id("1").unwrap().clone();

        cart.add(strat.clone(), 1);
        cart.add(strat, 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_set_quantity_is_exact_and_zero_removes() {
        let (mut cart, inventory, _) = setup();
        cart.add(inventory.find_by_id("1").unwrap().clone(), 5);

        cart.set_quantity("1", 2);
        assert_eq!(cart.items()[0].quantity, 2);

        cart.set_quantity("1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_computed_fresh() {
        let (mut cart, inventory, _) = setup();
        cart.add(inventory.find_by_id("1").unwrap().clone(), 1); // 45000
        cart.add(inventory.find_by_id("8").unwrap().clone(), 2); // 2 x 450

        assert_eq!(cart.total(), Decimal::from(45900));
        cart.set_quantity("8", 4);
        assert_eq!(cart.total(), Decimal::from(46800));
    }

    #[test]
    fn test_checkout_success_decrements_and_records() {
        let (mut cart, mut inventory, session) = setup();
        cart.add(inventory.find_by_id("1").unwrap().clone(), 2); // stock 8
        cart.add(inventory.find_by_id("8").unwrap().clone(), 3); // stock 50
        let expected_total = cart.total();

        let before_count = inventory.store().transactions().unwrap().len();
        let transaction = cart
            .checkout(&mut inventory, &session, PaymentType::Cash)
            .unwrap();

        assert_eq!(transaction.total, expected_total);
        assert_eq!(transaction.payment_type, PaymentType::Cash);
        assert_eq!(transaction.cashier_name, "Store Admin");
        assert!(transaction.id.starts_with("TXN-"));
        assert_eq!(transaction.items.len(), 2);

        assert_eq!(inventory.find_by_id("1").unwrap().stock, 6);
        assert_eq!(inventory.find_by_id("8").unwrap().stock, 47);

        let transactions = inventory.store().transactions().unwrap();
        assert_eq!(transactions.len(), before_count + 1);
        assert_eq!(transactions.last().unwrap().id, transaction.id);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_rejection_is_all_or_nothing() {
        let (mut cart, mut inventory, session) = setup();
        cart.add(inventory.find_by_id("1").unwrap().clone(), 1); // fine
        cart.add(inventory.find_by_id("7").unwrap().clone(), 3); // stock 2

        let before_products = inventory.store().products().unwrap();
        let before_transactions = inventory.store().transactions().unwrap();

        let err = cart
            .checkout(&mut inventory, &session, PaymentType::Cash)
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::InsufficientStock {
                requested: 3,
                available: 2,
                ..
            }
        ));

        // no product moved, no transaction appended, cart intact
        assert_eq!(inventory.store().products().unwrap(), before_products);
        assert_eq!(
            inventory.store().transactions().unwrap(),
            before_transactions
        );
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_stock_boundary() {
        let (mut cart, mut inventory, session) = setup();

        // quantity == stock passes
        cart.add(inventory.find_by_id("7").unwrap().clone(), 2); // stock 2
        cart.checkout(&mut inventory, &session, PaymentType::Gcash)
            .unwrap();
        assert_eq!(inventory.find_by_id("7").unwrap().stock, 0);

        // quantity == stock + 1 fails
        cart.add(inventory.find_by_id("7").unwrap().clone(), 1);
        let err = cart
            .checkout(&mut inventory, &session, PaymentType::Gcash)
            .unwrap_err();
        assert!(matches!(err, CheckoutError::InsufficientStock { .. }));
    }

    #[test]
    fn test_empty_cart_checkout_fails() {
        let (mut cart, mut inventory, session) = setup();
        let err = cart
            .checkout(&mut inventory, &session, PaymentType::Cash)
            .unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[test]
    fn test_deleted_product_fails_checkout() {
        let (mut cart, mut inventory, session) = setup();
        cart.add(inventory.find_by_id("1").unwrap().clone(), 1);
        inventory.delete("1").unwrap();

        let err = cart
            .checkout(&mut inventory, &session, PaymentType::Cash)
            .unwrap_err();
        assert!(matches!(err, CheckoutError::UnknownProduct { .. }));
    }

    #[test]
    fn test_checkout_validates_current_stock_not_cart_snapshot() {
        let (mut cart, mut inventory, session) = setup();
        // cart captured the product when stock was 8
        cart.add(inventory.find_by_id("1").unwrap().clone(), 5);

        // catalog edit drops the stock below the requested quantity
        let patch = ProductUpdate {
            stock: Some(4),
            ..Default::default()
        };
        inventory.update("1", &patch).unwrap();

        let err = cart
            .checkout(&mut inventory, &session, PaymentType::Cash)
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::InsufficientStock { available: 4, .. }
        ));
    }

    #[test]
    fn test_transaction_snapshot_survives_later_edits() {
        let (mut cart, mut inventory, session) = setup();
        cart.add(inventory.find_by_id("1").unwrap().clone(), 1);
        let transaction = cart
            .checkout(&mut inventory, &session, PaymentType::Cash)
            .unwrap();

        inventory.delete("1").unwrap();

        let stored = inventory.store().transactions().unwrap();
        let recorded = stored.iter().find(|t| t.id == transaction.id).unwrap();
        assert_eq!(recorded.items[0].product.name, "Stratocaster Classic");
    }
}
