use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::products::ListingData,
    error::AppResult,
    models::Product,
    response::ApiResponse,
    services::{catalog_service, listing_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("q" = Option<String>, Query, description = "Search over name, description, category"),
        ("categories" = Option<String>, Query, description = "Comma-joined category ids"),
        ("minPrice" = Option<f64>, Query, description = "Inclusive lower price bound"),
        ("maxPrice" = Option<f64>, Query, description = "Inclusive upper price bound"),
        ("minRating" = Option<f64>, Query, description = "Minimum average rating"),
        ("inStock" = Option<bool>, Query, description = "Only in-stock (true) or out-of-stock (false)"),
        ("onSale" = Option<bool>, Query, description = "Only on-sale (true) or full-price (false)"),
        ("sortBy" = Option<String>, Query, description = "price | name | rating | createdAt"),
        ("sortOrder" = Option<String>, Query, description = "asc | desc"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 12"),
    ),
    responses(
        (status = 200, description = "List products", body = ApiResponse<ListingData>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<ApiResponse<ListingData>> {
    // Malformed values degrade to defaults inside the codec, so this endpoint
    // never rejects a hand-edited URL.
    Json(listing_service::list_products(&state, &params))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = catalog_service::get_product(&state, id)?;
    Ok(Json(resp))
}
