use std::cmp::Ordering;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Price,
    Name,
    Rating,
    #[default]
    CreatedAt,
}

impl SortField {
    /// Lenient parse: anything unrecognized falls back to the default field,
    /// since the value may come straight out of a user-edited URL.
    pub fn parse(s: &str) -> Self {
        match s {
            "price" => Self::Price,
            "name" => Self::Name,
            "rating" => Self::Rating,
            _ => Self::CreatedAt,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Name => "name",
            Self::Rating => "rating",
            Self::CreatedAt => "createdAt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(s: &str) -> Self {
        match s {
            "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Defaults to "newest first".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Order a product list in place. Names compare case-insensitively, numeric
/// fields numerically, and a missing creation date sorts as the oldest
/// possible value. Equal keys are tie-broken by product id so the output is
/// identical across runs regardless of input order.
pub fn apply(products: &mut [Product], sort: &SortState) {
    products.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        let ordering = match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    });
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Rating => a.rating.total_cmp(&b.rating),
        // Option<DateTime> orders None first, i.e. as the oldest value.
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_catalog;

    #[test]
    fn price_ascending() {
        let mut products = seed_catalog().products;
        apply(
            &mut products,
            &SortState::new(SortField::Price, SortDirection::Asc),
        );
        assert!(products.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn default_is_newest_first() {
        let mut products = seed_catalog().products;
        apply(&mut products, &SortState::default());
        assert!(products
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut products = seed_catalog().products;
        apply(
            &mut products,
            &SortState::new(SortField::Name, SortDirection::Asc),
        );
        assert!(products
            .windows(2)
            .all(|w| w[0].name.to_lowercase() <= w[1].name.to_lowercase()));
    }

    #[test]
    fn missing_dates_sort_as_oldest() {
        let mut products = seed_catalog().products;
        products[0].created_at = None;
        let undated = products[0].id;
        apply(
            &mut products,
            &SortState::new(SortField::CreatedAt, SortDirection::Asc),
        );
        assert_eq!(products[0].id, undated);
    }

    #[test]
    fn sorting_is_deterministic_across_input_orders() {
        let catalog = seed_catalog();
        let sort = SortState::new(SortField::Rating, SortDirection::Desc);

        let mut forward = catalog.products.clone();
        apply(&mut forward, &sort);

        let mut reversed = catalog.products.clone();
        reversed.reverse();
        apply(&mut reversed, &sort);

        assert_eq!(
            forward.iter().map(|p| p.id).collect::<Vec<_>>(),
            reversed.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn sorting_twice_is_a_fixpoint() {
        let mut products = seed_catalog().products;
        let sort = SortState::new(SortField::Price, SortDirection::Desc);
        apply(&mut products, &sort);
        let once: Vec<_> = products.iter().map(|p| p.id).collect();
        apply(&mut products, &sort);
        let twice: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(once, twice);
    }
}
