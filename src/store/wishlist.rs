use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WishlistEntry {
    pub product_id: Uuid,
    pub added_at: DateTime<Utc>,
}

/// Per-user wishlists. Adding is idempotent, matching the usual storefront
/// heart-toggle semantics.
#[derive(Clone, Default)]
pub struct WishlistStore {
    wishlists: Arc<DashMap<Uuid, Vec<WishlistEntry>>>,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, user_id: Uuid) -> Vec<WishlistEntry> {
        self.wishlists
            .get(&user_id)
            .map(|w| w.clone())
            .unwrap_or_default()
    }

    /// Returns false when the product was already wishlisted.
    pub fn add(&self, user_id: Uuid, product_id: Uuid) -> bool {
        let mut entries = self.wishlists.entry(user_id).or_default();
        if entries.iter().any(|e| e.product_id == product_id) {
            return false;
        }
        entries.push(WishlistEntry {
            product_id,
            added_at: Utc::now(),
        });
        true
    }

    /// Returns false when the product was not wishlisted.
    pub fn remove(&self, user_id: Uuid, product_id: Uuid) -> bool {
        let Some(mut entries) = self.wishlists.get_mut(&user_id) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|e| e.product_id != product_id);
        entries.len() != before
    }
}
