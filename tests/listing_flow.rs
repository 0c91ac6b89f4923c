use std::collections::HashMap;

use axum_storefront_api::{
    catalog::seed::seed_catalog,
    config::AppConfig,
    error::AppError,
    services::listing_service,
    state::AppState,
};

fn test_state() -> AppState {
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: "test-secret".into(),
        upstream_api_url: None,
        catalog_page_limit: 100,
    };
    AppState::new(config, seed_catalog())
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn default_listing_is_one_page_of_twelve_newest_first() {
    let state = test_state();
    let resp = listing_service::list_products(&state, &HashMap::new());

    let meta = resp.meta.expect("listing meta");
    assert_eq!(meta.total, Some(12));
    assert_eq!(meta.total_pages, Some(1));
    assert_eq!(meta.per_page, Some(12));

    let data = resp.data.expect("listing data");
    assert_eq!(data.items.len(), 12);
    assert!(data
        .items
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));
    assert_eq!(data.links.current, "/api/products");
    assert_eq!(data.links.prev, None);
    assert_eq!(data.links.next, None);
}

#[test]
fn price_window_keeps_only_products_inside_the_bounds() {
    let state = test_state();
    let resp = listing_service::list_products(
        &state,
        &params(&[("minPrice", "500"), ("maxPrice", "1500")]),
    );

    let data = resp.data.expect("listing data");
    assert!(!data.items.is_empty());
    assert!(data
        .items
        .iter()
        .all(|p| p.price >= 500.0 && p.price <= 1500.0));
    assert!(data.items.iter().any(|p| p.name == "iPhone 15 Pro Max"));
    assert!(data.items.iter().all(|p| p.name != "AirPods Pro"));
}

#[test]
fn price_ascending_first_page_of_three_is_the_three_cheapest() {
    let state = test_state();
    let resp = listing_service::list_products(
        &state,
        &params(&[("sortBy", "price"), ("sortOrder", "asc"), ("limit", "3")]),
    );

    let data = resp.data.expect("listing data");
    let names: Vec<&str> = data.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Logitech MX Master 3S", "Kindle Paperwhite", "AirPods Pro"]
    );
    assert!(data.items.windows(2).all(|w| w[0].price <= w[1].price));
}

#[test]
fn deep_link_with_categories_and_paging_round_trips() {
    let state = test_state();
    let resp = listing_service::list_products(
        &state,
        &params(&[("categories", "electronics,laptops"), ("page", "2"), ("limit", "4")]),
    );

    let meta = resp.meta.expect("listing meta");
    // 7 electronics + 2 laptops in the seed catalog.
    assert_eq!(meta.total, Some(9));
    assert_eq!(meta.total_pages, Some(3));

    let data = resp.data.expect("listing data");
    assert_eq!(data.items.len(), 4);
    assert_eq!(
        data.filters.categories,
        vec!["electronics".to_string(), "laptops".to_string()]
    );
    assert_eq!(
        data.links.current,
        "/api/products?categories=electronics,laptops&page=2&limit=4"
    );
    // Page 1 is the default, so the prev link omits it.
    assert_eq!(
        data.links.prev.as_deref(),
        Some("/api/products?categories=electronics,laptops&limit=4")
    );
    assert_eq!(
        data.links.next.as_deref(),
        Some("/api/products?categories=electronics,laptops&page=3&limit=4")
    );
}

#[test]
fn malformed_parameters_degrade_to_defaults_instead_of_failing() {
    let state = test_state();
    let resp = listing_service::list_products(
        &state,
        &params(&[
            ("minPrice", "abc"),
            ("page", "minus-one"),
            ("limit", "0"),
            ("sortBy", "shoeSize"),
            ("inStock", "maybe"),
        ]),
    );

    let meta = resp.meta.expect("listing meta");
    assert_eq!(meta.total, Some(12));
    assert_eq!(meta.page, Some(1));
    assert_eq!(meta.per_page, Some(12));
}

#[test]
fn page_beyond_the_end_is_empty_but_not_an_error() {
    let state = test_state();
    let resp = listing_service::list_products(&state, &params(&[("page", "40")]));

    let data = resp.data.expect("listing data");
    assert!(data.items.is_empty());
    assert_eq!(resp.meta.expect("meta").total, Some(12));
}

#[test]
fn stock_sale_and_rating_filters_are_live() {
    let state = test_state();

    let resp = listing_service::list_products(&state, &params(&[("inStock", "false")]));
    let data = resp.data.expect("listing data");
    assert!(!data.items.is_empty());
    assert!(data.items.iter().all(|p| !p.in_stock));

    let resp = listing_service::list_products(&state, &params(&[("onSale", "true")]));
    let data = resp.data.expect("listing data");
    assert!(!data.items.is_empty());
    assert!(data.items.iter().all(|p| p.on_sale));

    let resp = listing_service::list_products(&state, &params(&[("minRating", "4.5")]));
    let data = resp.data.expect("listing data");
    assert!(!data.items.is_empty());
    assert!(data.items.iter().all(|p| p.rating >= 4.5));
}

#[test]
fn search_spans_name_description_and_category() {
    let state = test_state();
    let resp = listing_service::list_products(&state, &params(&[("q", "noise")]));
    let data = resp.data.expect("listing data");
    // Matches on descriptions (AirPods Pro, Sony WH-1000XM5).
    assert_eq!(data.items.len(), 2);

    // "audio" hits the Audio category name plus one description mention.
    let resp = listing_service::list_products(&state, &params(&[("q", "audio")]));
    let data = resp.data.expect("listing data");
    let names: Vec<&str> = data.items.iter().map(|p| p.name.as_str()).collect();
    assert!(names.contains(&"AirPods Pro"));
    assert!(names.contains(&"Sony WH-1000XM5"));
    assert!(names.contains(&"Nintendo Switch OLED"));
}

#[test]
fn seller_listing_is_scoped_to_the_seller() {
    let state = test_state();
    let resp = listing_service::list_seller_products(&state, "techhub", &HashMap::new())
        .expect("seller exists");

    let catalog = state.catalog.current();
    let techhub = catalog.seller_by_slug("techhub").expect("seed seller");
    let data = resp.data.expect("listing data");
    assert!(!data.items.is_empty());
    assert!(data.items.iter().all(|p| p.seller_id == Some(techhub.id)));
    assert_eq!(data.links.current, "/api/sellers/techhub/products");
}

#[test]
fn unknown_seller_is_not_found() {
    let state = test_state();
    let err = listing_service::list_seller_products(&state, "nobody", &HashMap::new())
        .expect_err("seller should not exist");
    assert!(matches!(err, AppError::NotFound));
}
