use std::sync::Arc;

use crate::catalog::{Catalog, CatalogHandle};
use crate::config::AppConfig;
use crate::store::{CartStore, OrderStore, UserStore, WishlistStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: CatalogHandle,
    pub carts: CartStore,
    pub wishlists: WishlistStore,
    pub users: UserStore,
    pub orders: OrderStore,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: CatalogHandle::new(catalog),
            carts: CartStore::new(),
            wishlists: WishlistStore::new(),
            users: UserStore::new(),
            orders: OrderStore::new(),
        }
    }
}
