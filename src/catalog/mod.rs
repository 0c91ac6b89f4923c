//! The product catalog: an immutable snapshot of the platform API's data,
//! shared across requests behind a cheap read handle.

pub mod client;
pub mod seed;

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Category, Product, Seller};

#[derive(Debug, Clone)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub sellers: Vec<Seller>,
    pub fetched_at: DateTime<Utc>,
}

impl Catalog {
    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn seller_by_slug(&self, slug: &str) -> Option<&Seller> {
        self.sellers.iter().find(|s| s.slug == slug)
    }

    pub fn products_for_seller(&self, seller_id: Uuid) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.seller_id == Some(seller_id))
            .cloned()
            .collect()
    }

    /// Categories with their product counts, in catalog order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        self.categories
            .iter()
            .map(|category| {
                let count = self
                    .products
                    .iter()
                    .filter(|p| p.category_id == category.id)
                    .count();
                (category.clone(), count)
            })
            .collect()
    }
}

/// Swappable snapshot handle. Readers clone the inner `Arc` and keep using
/// their snapshot for the rest of the request even if a refresh lands.
#[derive(Clone)]
pub struct CatalogHandle {
    inner: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    pub fn current(&self) -> Arc<Catalog> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn replace(&self, catalog: Catalog) {
        let catalog = Arc::new(catalog);
        match self.inner.write() {
            Ok(mut guard) => *guard = catalog,
            Err(poisoned) => *poisoned.into_inner() = catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::seed::seed_catalog;
    use super::*;

    #[test]
    fn lookup_by_id_and_seller() {
        let catalog = seed_catalog();
        let product = &catalog.products[0];
        assert_eq!(catalog.product(product.id).map(|p| p.id), Some(product.id));

        let seller = catalog
            .seller_by_slug("techhub")
            .expect("seed contains techhub");
        let products = catalog.products_for_seller(seller.id);
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p.seller_id == Some(seller.id)));
    }

    #[test]
    fn category_counts_cover_all_products() {
        let catalog = seed_catalog();
        let total: usize = catalog.category_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, catalog.products.len());
    }

    #[test]
    fn handle_swaps_snapshots_without_disturbing_existing_readers() {
        let handle = CatalogHandle::new(seed_catalog());
        let before = handle.current();

        let mut next = seed_catalog();
        next.products.truncate(3);
        handle.replace(next);

        assert_eq!(before.products.len(), 12);
        assert_eq!(handle.current().products.len(), 3);
    }
}
