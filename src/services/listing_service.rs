use std::collections::HashMap;

use crate::{
    dto::products::ListingData,
    error::{AppError, AppResult},
    listing::controller::{ListingController, ListingView, NullSync},
    listing::query::ListingQuery,
    models::Product,
    response::{ApiResponse, Meta, PageLinks},
    state::AppState,
};

/// The storefront listing: run the full filter → sort → paginate pipeline
/// over the current catalog snapshot, driven entirely by the request's query
/// parameters.
pub fn list_products(
    state: &AppState,
    params: &HashMap<String, String>,
) -> ApiResponse<ListingData> {
    let catalog = state.catalog.current();
    run_listing(catalog.products.clone(), params, "/api/products")
}

/// Same pipeline, restricted to one seller's products.
pub fn list_seller_products(
    state: &AppState,
    slug: &str,
    params: &HashMap<String, String>,
) -> AppResult<ApiResponse<ListingData>> {
    let catalog = state.catalog.current();
    let seller = catalog.seller_by_slug(slug).ok_or(AppError::NotFound)?;
    let products = catalog.products_for_seller(seller.id);
    let base_path = format!("/api/sellers/{slug}/products");
    Ok(run_listing(products, params, &base_path))
}

fn run_listing(
    products: Vec<Product>,
    params: &HashMap<String, String>,
    base_path: &str,
) -> ApiResponse<ListingData> {
    let query = ListingQuery::from_params(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let controller = ListingController::with_state(products, query, NullSync);
    let view = controller.view();

    let links = build_links(controller.state(), &view, base_path);
    let meta = Meta::new(view.page as i64, view.limit as i64, view.total_items as i64);
    let data = ListingData {
        items: view.items,
        filters: controller.state().filters.clone(),
        sort: controller.state().sort,
        links,
    };
    ApiResponse::success("Products", data, Some(meta))
}

fn build_links(state: &ListingQuery, view: &ListingView, base_path: &str) -> PageLinks {
    let link = |query: &ListingQuery| {
        let qs = query.to_query_string();
        if qs.is_empty() {
            base_path.to_string()
        } else {
            format!("{base_path}?{qs}")
        }
    };

    let prev = (view.page > 1).then(|| {
        let mut query = state.clone();
        query.pagination.page = view.page - 1;
        link(&query)
    });
    let next = (view.page < view.total_pages).then(|| {
        let mut query = state.clone();
        query.pagination.page = view.page + 1;
        link(&query)
    });

    PageLinks {
        current: link(state),
        prev,
        next,
    }
}
