//! The persisted cart store.

use tienda_storage::{Storage, StorageExt};
use tracing::{debug, warn};

use crate::cart::{Cart, LineItem, NewLineItem};
use crate::error::CommerceError;
use crate::ids::VariantId;
use crate::money::Money;

/// Storage key for the serialized cart snapshot.
pub const CART_STORAGE_KEY: &str = "cart-storage";

/// The shopper's cart, persisted across sessions.
///
/// An explicit container meant to be owned by the presentation layer and
/// injected where needed. The storage backend is swappable, so tests run
/// against an in-memory store. Every mutation persists fire-and-forget:
/// a failed write is logged and the in-memory state stays authoritative
/// for the session.
#[derive(Debug)]
pub struct CartStore<S: Storage> {
    cart: Cart,
    storage: S,
}

impl<S: Storage> CartStore<S> {
    /// Open the store, loading any previously persisted snapshot.
    ///
    /// A missing or unreadable snapshot degrades to an empty cart.
    pub fn open(storage: S) -> Self {
        let cart = match storage.get_json::<Cart>(CART_STORAGE_KEY) {
            Ok(Some(cart)) => {
                debug!(lines = cart.unique_items(), "loaded persisted cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!(%error, "discarding unreadable cart snapshot");
                Cart::new()
            }
        };
        Self { cart, storage }
    }

    /// Add one unit of a variant and persist.
    pub fn add_item(&mut self, item: NewLineItem) {
        self.cart.add_item(item);
        self.persist();
    }

    /// Set a line's quantity (zero or less removes the line) and persist.
    pub fn update_quantity(&mut self, variant_id: VariantId, quantity: i64) {
        self.cart.update_quantity(variant_id, quantity);
        self.persist();
    }

    /// Remove a line and persist.
    pub fn remove_item(&mut self, variant_id: VariantId) {
        self.cart.remove_item(variant_id);
        self.persist();
    }

    /// Empty the cart and persist. Called on checkout completion or an
    /// explicit clear.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// The underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Sum of price snapshots times quantities.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Write the snapshot now, surfacing any storage failure.
    pub fn flush(&self) -> Result<(), CommerceError> {
        self.storage.set_json(CART_STORAGE_KEY, &self.cart)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(error) = self.flush() {
            warn!(%error, "failed to persist cart snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;
    use tienda_storage::MemoryStore;

    fn new_item(variant_id: i64, price_cents: i64, name: &str) -> NewLineItem {
        NewLineItem {
            product_id: ProductId::new(variant_id * 10),
            variant_id: VariantId::new(variant_id),
            name: name.to_string(),
            unit_price: Money::new(price_cents, Currency::ARS),
            image: None,
            variant_name: None,
        }
    }

    #[test]
    fn test_opens_empty_on_fresh_storage() {
        let storage = MemoryStore::new();
        let store = CartStore::open(&storage);
        assert_eq!(store.total_items(), 0);
        assert!(store.total_price().is_zero());
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let storage = MemoryStore::new();
        {
            let mut store = CartStore::open(&storage);
            store.add_item(new_item(7, 10000, "Remera"));
            store.add_item(new_item(7, 10000, "Remera"));
            store.add_item(new_item(8, 2500, "Taza"));
        }

        let reopened = CartStore::open(&storage);
        assert_eq!(reopened.total_items(), 3);
        assert_eq!(reopened.total_price().amount_cents, 22500);
        assert_eq!(reopened.items().len(), 2);
        assert_eq!(reopened.items()[0].name, "Remera");
    }

    #[test]
    fn test_reopen_reproduces_identical_lines() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);
        store.add_item(NewLineItem {
            image: Some("remera.jpg".to_string()),
            variant_name: Some("Azul - M".to_string()),
            ..new_item(7, 10000, "Remera")
        });

        let reopened = CartStore::open(&storage);
        assert_eq!(reopened.cart(), store.cart());
    }

    #[test]
    fn test_update_and_remove_persist() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);
        store.add_item(new_item(1, 1000, "A"));
        store.add_item(new_item(2, 2000, "B"));
        store.update_quantity(VariantId::new(1), 4);
        store.remove_item(VariantId::new(2));

        let reopened = CartStore::open(&storage);
        assert_eq!(reopened.total_items(), 4);
        assert_eq!(reopened.items().len(), 1);
    }

    #[test]
    fn test_update_quantity_zero_removes_persisted_line() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);
        store.add_item(new_item(7, 10000, "A"));
        store.update_quantity(VariantId::new(7), 0);

        assert_eq!(store.total_items(), 0);
        let reopened = CartStore::open(&storage);
        assert_eq!(reopened.total_items(), 0);
    }

    #[test]
    fn test_clear_cart_persists_empty_state() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);
        store.add_item(new_item(1, 1000, "A"));
        store.clear_cart();

        let reopened = CartStore::open(&storage);
        assert!(reopened.cart().is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_empty() {
        let storage = MemoryStore::new();
        storage.set(CART_STORAGE_KEY, b"{definitely not json").unwrap();

        let store = CartStore::open(&storage);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_flush_reports_success() {
        let storage = MemoryStore::new();
        let mut store = CartStore::open(&storage);
        store.add_item(new_item(1, 1000, "A"));
        assert!(store.flush().is_ok());
    }
}
