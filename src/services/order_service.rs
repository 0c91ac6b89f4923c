use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit,
    dto::orders::{CheckoutRequest, OrderList},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Order, OrderItem},
    response::{ApiResponse, Meta},
    routes::params::OrderListQuery,
    state::AppState,
};

/// Turn the user's cart into an order. The catalog snapshot is the stock
/// authority: a line the snapshot no longer covers, or covers with too little
/// stock, rejects the whole checkout so the client can re-sync the cart.
pub fn checkout(
    state: &AppState,
    user: &AuthUser,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<Order>> {
    if payload.address.trim().is_empty() {
        return Err(AppError::BadRequest("Address is required".into()));
    }

    let cart = state.carts.get(user.user_id);
    if cart.entries.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let catalog = state.catalog.current();
    let mut items = Vec::with_capacity(cart.entries.len());
    for entry in &cart.entries {
        if entry.quantity <= 0 {
            return Err(AppError::BadRequest("Cart has invalid quantity".into()));
        }
        let product = catalog.product(entry.product_id).ok_or_else(|| {
            AppError::BadRequest(format!("Product {} is no longer available", entry.product_id))
        })?;
        if product.stock < entry.quantity {
            return Err(AppError::BadRequest(format!(
                "Insufficient stock for product {}",
                entry.product_id
            )));
        }
        items.push(OrderItem {
            product_id: entry.product_id,
            name: entry.name.clone(),
            price: entry.price,
            quantity: entry.quantity,
        });
    }

    let order_id = Uuid::new_v4();
    let order = Order {
        id: order_id,
        user_id: user.user_id,
        items,
        total_amount: cart.totals.total,
        status: "pending".into(),
        invoice_number: build_invoice_number(order_id),
        address: payload.address,
        payment_method: payload.payment_method,
        created_at: Utc::now(),
    };

    state.orders.push(order.clone());
    state.carts.clear(user.user_id);

    audit::record(
        Some(user.user_id),
        "checkout",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id, "total": order.total_amount })),
    );
    Ok(ApiResponse::success(
        "Checkout success",
        order,
        Some(Meta::empty()),
    ))
}

pub fn list_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let mut orders = state.orders.list(user.user_id);
    if let Some(status) = query.status.as_ref().filter(|s| !s.is_empty()) {
        orders.retain(|o| &o.status == status);
    }

    let total = orders.len() as i64;
    let items: Vec<Order> = orders
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Ok",
        OrderList { items },
        Some(meta),
    ))
}

pub fn get_order(state: &AppState, user: &AuthUser, id: Uuid) -> AppResult<ApiResponse<Order>> {
    let order = state
        .orders
        .find(user.user_id, id)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Order", order, None))
}

fn build_invoice_number(order_id: Uuid) -> String {
    let digest = order_id.simple().to_string();
    format!("INV-{}", digest[..12].to_uppercase())
}
