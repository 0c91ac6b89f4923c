use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One line in a cart. Prices are snapshotted from the catalog at add time so
/// totals stay consistent even if the catalog refreshes mid-session.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartEntry {
    pub product_id: Uuid,
    pub name: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct CartTotals {
    pub item_count: i32,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct Cart {
    pub entries: Vec<CartEntry>,
    pub totals: CartTotals,
}

/// Per-user carts. Totals are derived state: every mutation recomputes them
/// from the entries instead of adjusting them incrementally.
#[derive(Clone, Default)]
pub struct CartStore {
    carts: Arc<DashMap<Uuid, Vec<CartEntry>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: Uuid) -> Cart {
        let entries = self
            .carts
            .get(&user_id)
            .map(|c| c.clone())
            .unwrap_or_default();
        build_cart(entries)
    }

    /// Add a product or replace the quantity of an existing line.
    pub fn upsert(&self, user_id: Uuid, entry: CartEntry) -> Cart {
        let mut entries = self.carts.entry(user_id).or_default();
        match entries
            .iter_mut()
            .find(|e| e.product_id == entry.product_id)
        {
            Some(existing) => existing.quantity = entry.quantity,
            None => entries.push(entry),
        }
        build_cart(entries.clone())
    }

    /// Remove a line. Returns the updated cart, or `None` when the product
    /// was not in it.
    pub fn remove(&self, user_id: Uuid, product_id: Uuid) -> Option<Cart> {
        let mut entries = self.carts.get_mut(&user_id)?;
        let before = entries.len();
        entries.retain(|e| e.product_id != product_id);
        if entries.len() == before {
            return None;
        }
        Some(build_cart(entries.clone()))
    }

    pub fn clear(&self, user_id: Uuid) {
        self.carts.remove(&user_id);
    }

    /// Empty the cart and hand back what it held (checkout).
    pub fn take(&self, user_id: Uuid) -> Cart {
        let entries = self
            .carts
            .remove(&user_id)
            .map(|(_, entries)| entries)
            .unwrap_or_default();
        build_cart(entries)
    }
}

fn build_cart(entries: Vec<CartEntry>) -> Cart {
    let totals = recompute(&entries);
    Cart { entries, totals }
}

fn recompute(entries: &[CartEntry]) -> CartTotals {
    let mut item_count = 0;
    let mut subtotal = 0.0;
    let mut full_price = 0.0;
    for entry in entries {
        let quantity = entry.quantity.max(0);
        item_count += quantity;
        subtotal += entry.price * f64::from(quantity);
        full_price += entry.original_price.unwrap_or(entry.price) * f64::from(quantity);
    }
    CartTotals {
        item_count,
        subtotal,
        discount: full_price - subtotal,
        total: subtotal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(price: f64, original: Option<f64>, quantity: i32) -> CartEntry {
        CartEntry {
            product_id: Uuid::new_v4(),
            name: "item".into(),
            price,
            original_price: original,
            quantity,
        }
    }

    #[test]
    fn totals_recompute_on_every_mutation() {
        let store = CartStore::new();
        let user = Uuid::new_v4();

        let first = entry(100.0, None, 2);
        let cart = store.upsert(user, first.clone());
        assert_eq!(cart.totals.item_count, 2);
        assert_eq!(cart.totals.total, 200.0);

        let cart = store.upsert(user, entry(50.0, Some(80.0), 1));
        assert_eq!(cart.totals.item_count, 3);
        assert_eq!(cart.totals.subtotal, 250.0);
        assert_eq!(cart.totals.discount, 30.0);

        let cart = store
            .remove(user, first.product_id)
            .expect("line existed");
        assert_eq!(cart.totals.item_count, 1);
        assert_eq!(cart.totals.total, 50.0);
    }

    #[test]
    fn upsert_replaces_quantity_for_an_existing_line() {
        let store = CartStore::new();
        let user = Uuid::new_v4();
        let line = entry(10.0, None, 1);

        store.upsert(user, line.clone());
        let cart = store.upsert(
            user,
            CartEntry {
                quantity: 5,
                ..line
            },
        );
        assert_eq!(cart.entries.len(), 1);
        assert_eq!(cart.totals.item_count, 5);
    }

    #[test]
    fn removing_an_absent_line_is_reported() {
        let store = CartStore::new();
        let user = Uuid::new_v4();
        assert!(store.remove(user, Uuid::new_v4()).is_none());

        store.upsert(user, entry(10.0, None, 1));
        assert!(store.remove(user, Uuid::new_v4()).is_none());
    }

    #[test]
    fn take_empties_the_cart() {
        let store = CartStore::new();
        let user = Uuid::new_v4();
        store.upsert(user, entry(10.0, None, 2));

        let taken = store.take(user);
        assert_eq!(taken.totals.item_count, 2);
        assert!(store.get(user).entries.is_empty());
    }
}
