use uuid::Uuid;

use crate::{
    audit,
    dto::wishlist::{AddWishlistRequest, WishlistData, WishlistItem},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn list_wishlist(state: &AppState, user: &AuthUser) -> ApiResponse<WishlistData> {
    let catalog = state.catalog.current();
    // Entries whose product fell out of the catalog snapshot are skipped
    // rather than rendered as dead tiles.
    let items = state
        .wishlists
        .list(user.user_id)
        .into_iter()
        .filter_map(|entry| {
            catalog.product(entry.product_id).map(|product| WishlistItem {
                product: product.clone(),
                added_at: entry.added_at,
            })
        })
        .collect();
    ApiResponse::success("OK", WishlistData { items }, None)
}

pub fn add_to_wishlist(
    state: &AppState,
    user: &AuthUser,
    payload: AddWishlistRequest,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let catalog = state.catalog.current();
    if catalog.product(payload.product_id).is_none() {
        return Err(AppError::BadRequest("Product not found".into()));
    }

    let added = state.wishlists.add(user.user_id, payload.product_id);
    if added {
        audit::record(
            Some(user.user_id),
            "wishlist_add",
            Some("wishlist"),
            Some(serde_json::json!({ "product_id": payload.product_id })),
        );
    }

    let message = if added {
        "Added to wishlist"
    } else {
        "Already in wishlist"
    };
    Ok(ApiResponse::success(
        message,
        serde_json::json!({ "product_id": payload.product_id }),
        Some(Meta::empty()),
    ))
}

pub fn remove_from_wishlist(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !state.wishlists.remove(user.user_id, product_id) {
        return Err(AppError::NotFound);
    }

    audit::record(
        Some(user.user_id),
        "wishlist_remove",
        Some("wishlist"),
        Some(serde_json::json!({ "product_id": product_id })),
    );
    Ok(ApiResponse::success(
        "Removed from wishlist",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
