use uuid::Uuid;

use crate::{
    audit,
    dto::cart::AddToCartRequest,
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    response::{ApiResponse, Meta},
    state::AppState,
    store::{Cart, CartEntry},
};

pub fn list_cart(state: &AppState, user: &AuthUser) -> ApiResponse<Cart> {
    let cart = state.carts.get(user.user_id);
    ApiResponse::success("OK", cart, None)
}

pub fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<Cart>> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let catalog = state.catalog.current();
    let product = catalog
        .product(payload.product_id)
        .ok_or_else(|| AppError::BadRequest("product not found".to_string()))?;

    let cart = state.carts.upsert(
        user.user_id,
        CartEntry {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            quantity: payload.quantity,
        },
    );

    audit::record(
        Some(user.user_id),
        "cart_update",
        Some("cart"),
        Some(serde_json::json!({ "product_id": payload.product_id, "quantity": payload.quantity })),
    );
    Ok(ApiResponse::success("OK", cart, None))
}

pub fn remove_from_cart(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
) -> AppResult<ApiResponse<Cart>> {
    let cart = state
        .carts
        .remove(user.user_id, product_id)
        .ok_or(AppError::NotFound)?;

    audit::record(
        Some(user.user_id),
        "cart_remove",
        Some("cart"),
        Some(serde_json::json!({ "product_id": product_id })),
    );
    Ok(ApiResponse::success("Removed from cart", cart, None))
}

pub fn clear_cart(state: &AppState, user: &AuthUser) -> ApiResponse<serde_json::Value> {
    state.carts.clear(user.user_id);

    audit::record(Some(user.user_id), "cart_clear", Some("cart"), None);
    ApiResponse::success("Cart cleared", serde_json::json!({}), Some(Meta::empty()))
}
