use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

/// Active listing filters. A product is included when every active predicate
/// holds; category membership is an OR within the selected set, and an empty
/// set selects everything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search: String,
    pub categories: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub in_stock: Option<bool>,
    pub on_sale: Option<bool>,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && self.matches_rating(product)
            && flag_matches(self.in_stock, product.in_stock)
            && flag_matches(self.on_sale, product.on_sale)
    }

    fn matches_search(&self, product: &Product) -> bool {
        let needle = self.search.trim();
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
            || product.category_name.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty()
            || self
                .categories
                .iter()
                .any(|id| id == &product.category_id)
    }

    fn matches_price(&self, product: &Product) -> bool {
        self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max)
    }

    fn matches_rating(&self, product: &Product) -> bool {
        self.min_rating.is_none_or(|min| product.rating >= min)
    }
}

fn flag_matches(wanted: Option<bool>, actual: bool) -> bool {
    wanted.is_none_or(|w| actual == w)
}

/// Partial update merged into a `FilterState`. Outer `None` leaves the slice
/// untouched; for the optional bounds the inner value is what gets stored, so
/// `Some(None)` explicitly clears a bound.
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub categories: Option<Vec<String>>,
    pub min_price: Option<Option<f64>>,
    pub max_price: Option<Option<f64>>,
    pub min_rating: Option<Option<f64>>,
    pub in_stock: Option<Option<bool>>,
    pub on_sale: Option<Option<bool>>,
}

impl FilterState {
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(categories) = update.categories {
            self.categories = categories;
        }
        if let Some(min_price) = update.min_price {
            self.min_price = min_price;
        }
        if let Some(max_price) = update.max_price {
            self.max_price = max_price;
        }
        if let Some(min_rating) = update.min_rating {
            self.min_rating = min_rating;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(on_sale) = update.on_sale {
            self.on_sale = on_sale;
        }
    }
}

/// Apply the filter set to a product slice, preserving input order.
pub fn apply(products: &[Product], filters: &FilterState) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}
