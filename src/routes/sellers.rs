use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::{ListingData, SellerProfile},
    error::AppResult,
    response::ApiResponse,
    services::{catalog_service, listing_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(get_seller))
        .route("/{slug}/products", get(list_seller_products))
}

#[utoipa::path(
    get,
    path = "/api/sellers/{slug}",
    params(
        ("slug" = String, Path, description = "Seller slug")
    ),
    responses(
        (status = 200, description = "Seller profile", body = ApiResponse<SellerProfile>),
        (status = 404, description = "Seller not found"),
    ),
    tag = "Sellers"
)]
pub async fn get_seller(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SellerProfile>>> {
    let resp = catalog_service::get_seller(&state, &slug)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/sellers/{slug}/products",
    params(
        ("slug" = String, Path, description = "Seller slug"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 12"),
    ),
    responses(
        (status = 200, description = "The seller's products through the listing pipeline", body = ApiResponse<ListingData>),
        (status = 404, description = "Seller not found"),
    ),
    tag = "Sellers"
)]
pub async fn list_seller_products(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<ApiResponse<ListingData>>> {
    let resp = listing_service::list_seller_products(&state, &slug, &params)?;
    Ok(Json(resp))
}
