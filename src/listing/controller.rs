use crate::models::Product;

use super::filter::{self, FilterUpdate};
use super::page;
use super::query::ListingQuery;
use super::sort::{self, SortState};

/// Seam for the one side effect in the pipeline: keeping the URL in step with
/// the listing state. Implementations decide what "the URL" is: a browser
/// history entry, a recorded string in tests, or nothing at all.
pub trait QuerySync {
    fn read_query(&self) -> String;
    fn write_query(&mut self, query: &str);
}

/// Sync that reads an empty query and discards writes, for one-shot contexts
/// where the state arrives pre-parsed and the canonical query is taken from
/// the controller directly.
#[derive(Debug, Default)]
pub struct NullSync;

impl QuerySync for NullSync {
    fn read_query(&self) -> String {
        String::new()
    }

    fn write_query(&mut self, _query: &str) {}
}

/// One computed page of a listing plus the figures the rendering layer needs.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub items: Vec<Product>,
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PaginationUpdate {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Composition root over an immutable product snapshot. Every state change
/// re-runs filter → sort → paginate and writes the canonical query string
/// through the sync; filter and sort changes reset the page to 1.
pub struct ListingController<S: QuerySync> {
    products: Vec<Product>,
    state: ListingQuery,
    sync: S,
}

impl<S: QuerySync> ListingController<S> {
    /// Restore state from whatever the sync currently holds (deep-link load).
    pub fn new(products: Vec<Product>, sync: S) -> Self {
        let state = ListingQuery::from_query_string(&sync.read_query());
        Self {
            products,
            state,
            sync,
        }
    }

    pub fn with_state(products: Vec<Product>, state: ListingQuery, sync: S) -> Self {
        Self {
            products,
            state,
            sync,
        }
    }

    pub fn state(&self) -> &ListingQuery {
        &self.state
    }

    pub fn sync(&self) -> &S {
        &self.sync
    }

    /// Recompute the derived view without touching state or the URL.
    pub fn view(&self) -> ListingView {
        let mut items = filter::apply(&self.products, &self.state.filters);
        sort::apply(&mut items, &self.state.sort);

        let total_items = items.len();
        let (current_page, limit) = self.state.pagination.normalized();
        let total_pages = page::total_pages(total_items, limit);
        let items = page::slice(&items, &self.state.pagination);

        ListingView {
            items,
            total_items,
            total_pages,
            page: current_page,
            limit,
        }
    }

    pub fn update_filters(&mut self, update: FilterUpdate) -> ListingView {
        self.state.filters.merge(update);
        self.state.pagination.page = 1;
        self.apply()
    }

    pub fn update_search(&mut self, text: impl Into<String>) -> ListingView {
        self.state.filters.search = text.into();
        self.state.pagination.page = 1;
        self.apply()
    }

    pub fn update_sort(&mut self, sort: SortState) -> ListingView {
        self.state.sort = sort;
        self.state.pagination.page = 1;
        self.apply()
    }

    pub fn update_pagination(&mut self, update: PaginationUpdate) -> ListingView {
        if let Some(page) = update.page {
            self.state.pagination.page = page.max(1);
        }
        if let Some(limit) = update.limit {
            self.state.pagination.limit = limit.max(1);
        }
        self.apply()
    }

    /// Reset filters, sort, and pagination to defaults and clear the query.
    pub fn clear_filters(&mut self) -> ListingView {
        self.state = ListingQuery::default();
        self.apply()
    }

    fn apply(&mut self) -> ListingView {
        let query = self.state.to_query_string();
        self.sync.write_query(&query);
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_catalog;
    use crate::listing::sort::{SortDirection, SortField};

    /// Records every query written, like a fake browser history.
    #[derive(Debug, Default)]
    struct RecordingSync {
        initial: String,
        written: Vec<String>,
    }

    impl QuerySync for RecordingSync {
        fn read_query(&self) -> String {
            self.initial.clone()
        }

        fn write_query(&mut self, query: &str) {
            self.written.push(query.to_string());
        }
    }

    fn controller() -> ListingController<RecordingSync> {
        ListingController::new(seed_catalog().products, RecordingSync::default())
    }

    #[test]
    fn restores_state_from_the_sync_on_construction() {
        let sync = RecordingSync {
            initial: "q=ipad&sortBy=price&sortOrder=asc".into(),
            written: vec![],
        };
        let controller = ListingController::new(seed_catalog().products, sync);
        assert_eq!(controller.state().filters.search, "ipad");
        assert_eq!(controller.state().sort.field, SortField::Price);
        assert_eq!(controller.state().sort.direction, SortDirection::Asc);
    }

    #[test]
    fn twelve_products_default_state_is_one_full_page() {
        let view = controller().view();
        assert_eq!(view.items.len(), 12);
        assert_eq!(view.total_items, 12);
        assert_eq!(view.total_pages, 1);
        // Default sort is newest first.
        assert!(view
            .items
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn price_sort_page_one_of_three_gives_the_three_cheapest() {
        let mut controller = controller();
        controller.update_sort(SortState::new(SortField::Price, SortDirection::Asc));
        let view = controller.update_pagination(PaginationUpdate {
            page: Some(1),
            limit: Some(3),
        });

        let mut all_prices: Vec<f64> = seed_catalog().products.iter().map(|p| p.price).collect();
        all_prices.sort_by(f64::total_cmp);

        assert_eq!(view.items.len(), 3);
        let page_prices: Vec<f64> = view.items.iter().map(|p| p.price).collect();
        assert_eq!(page_prices, all_prices[..3].to_vec());
    }

    #[test]
    fn filter_changes_reset_to_page_one() {
        let mut controller = controller();
        controller.update_pagination(PaginationUpdate {
            page: Some(3),
            limit: Some(4),
        });
        assert_eq!(controller.state().pagination.page, 3);

        controller.update_search("pro");
        assert_eq!(controller.state().pagination.page, 1);

        controller.update_pagination(PaginationUpdate {
            page: Some(2),
            limit: None,
        });
        controller.update_sort(SortState::new(SortField::Name, SortDirection::Asc));
        assert_eq!(controller.state().pagination.page, 1);
    }

    #[test]
    fn pagination_changes_keep_filters_and_survive_out_of_range_pages() {
        let mut controller = controller();
        controller.update_search("iphone");
        let view = controller.update_pagination(PaginationUpdate {
            page: Some(50),
            limit: None,
        });
        assert_eq!(controller.state().filters.search, "iphone");
        assert!(view.items.is_empty());
        assert!(view.total_items > 0);
    }

    #[test]
    fn clear_filters_restores_defaults_and_writes_an_empty_query() {
        let mut controller = controller();
        controller.update_search("iphone");
        controller.update_filters(FilterUpdate {
            min_price: Some(Some(1000.0)),
            ..Default::default()
        });
        assert_ne!(*controller.state(), ListingQuery::default());

        controller.clear_filters();
        assert_eq!(*controller.state(), ListingQuery::default());
        assert_eq!(controller.sync().written.last().map(String::as_str), Some(""));
    }

    #[test]
    fn every_mutation_writes_the_canonical_query() {
        let mut controller = controller();
        controller.update_search("iphone");
        controller.update_pagination(PaginationUpdate {
            page: Some(2),
            limit: Some(4),
        });
        assert_eq!(
            controller.sync().written,
            vec!["q=iphone".to_string(), "q=iphone&page=2&limit=4".to_string()]
        );
    }

    #[test]
    fn pages_cover_the_filtered_sorted_list_exactly() {
        let mut controller = controller();
        controller.update_sort(SortState::new(SortField::Name, SortDirection::Asc));
        let mut seen = Vec::new();
        let first = controller.update_pagination(PaginationUpdate {
            page: Some(1),
            limit: Some(5),
        });
        let total_pages = first.total_pages;
        seen.extend(first.items);
        for page in 2..=total_pages {
            let view = controller.update_pagination(PaginationUpdate {
                page: Some(page),
                limit: None,
            });
            seen.extend(view.items);
        }

        let mut expected = seed_catalog().products;
        crate::listing::sort::apply(
            &mut expected,
            &SortState::new(SortField::Name, SortDirection::Asc),
        );
        assert_eq!(
            seen.iter().map(|p| p.id).collect::<Vec<_>>(),
            expected.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }
}
