use serde::Serialize;
use utoipa::ToSchema;

use crate::listing::{FilterState, SortState};
use crate::models::{Product, Seller};
use crate::response::PageLinks;

/// One listing page plus the state that produced it, so the rendering layer
/// can show active filters and offer shareable links without re-deriving
/// anything.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingData {
    pub items: Vec<Product>,
    pub filters: FilterState,
    pub sort: SortState,
    pub links: PageLinks,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryCount {
    pub id: String,
    pub name: String,
    pub product_count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<CategoryCount>)]
    pub items: Vec<CategoryCount>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SellerProfile {
    pub seller: Seller,
    pub product_count: usize,
}
