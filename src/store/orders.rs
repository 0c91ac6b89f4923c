use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::Order;

/// Orders placed this session, newest first, keyed by user.
#[derive(Clone, Default)]
pub struct OrderStore {
    orders: Arc<DashMap<Uuid, Vec<Order>>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, order: Order) {
        self.orders
            .entry(order.user_id)
            .or_default()
            .insert(0, order);
    }

    pub fn list(&self, user_id: Uuid) -> Vec<Order> {
        self.orders
            .get(&user_id)
            .map(|o| o.clone())
            .unwrap_or_default()
    }

    pub fn find(&self, user_id: Uuid, order_id: Uuid) -> Option<Order> {
        self.orders
            .get(&user_id)?
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
    }
}
