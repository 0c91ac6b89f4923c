use uuid::Uuid;

use crate::{
    dto::products::{CategoryCount, CategoryList, SellerProfile},
    error::{AppError, AppResult},
    models::Product,
    response::ApiResponse,
    state::AppState,
};

pub fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let catalog = state.catalog.current();
    let product = catalog.product(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}

pub fn list_categories(state: &AppState) -> ApiResponse<CategoryList> {
    let catalog = state.catalog.current();
    let items = catalog
        .category_counts()
        .into_iter()
        .map(|(category, product_count)| CategoryCount {
            id: category.id,
            name: category.name,
            product_count,
        })
        .collect();
    ApiResponse::success("Categories", CategoryList { items }, None)
}

pub fn get_seller(state: &AppState, slug: &str) -> AppResult<ApiResponse<SellerProfile>> {
    let catalog = state.catalog.current();
    let seller = catalog.seller_by_slug(slug).cloned().ok_or(AppError::NotFound)?;
    let product_count = catalog.products_for_seller(seller.id).len();
    Ok(ApiResponse::success(
        "Seller",
        SellerProfile {
            seller,
            product_count,
        },
        None,
    ))
}
