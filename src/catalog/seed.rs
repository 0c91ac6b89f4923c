use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{Category, Product, Seller};

use super::Catalog;

/// Built-in catalog used when no upstream API is configured, and by the test
/// suite. Twelve consumer-electronics products across two sellers.
pub fn seed_catalog() -> Catalog {
    let techhub = Seller {
        id: Uuid::new_v4(),
        slug: "techhub".into(),
        name: "TechHub".into(),
        description: "Authorized reseller of Apple and Samsung hardware.".into(),
        rating: 4.8,
        joined_at: Utc.with_ymd_and_hms(2021, 3, 12, 0, 0, 0).single().unwrap_or_default(),
    };
    let gadget_galaxy = Seller {
        id: Uuid::new_v4(),
        slug: "gadget-galaxy".into(),
        name: "Gadget Galaxy".into(),
        description: "Everyday electronics, accessories, and open-box deals.".into(),
        rating: 4.5,
        joined_at: Utc.with_ymd_and_hms(2022, 7, 1, 0, 0, 0).single().unwrap_or_default(),
    };

    let categories = vec![
        Category {
            id: "electronics".into(),
            name: "Electronics".into(),
        },
        Category {
            id: "laptops".into(),
            name: "Laptops".into(),
        },
        Category {
            id: "audio".into(),
            name: "Audio".into(),
        },
        Category {
            id: "accessories".into(),
            name: "Accessories".into(),
        },
    ];

    let mut products = vec![
        product(
            "iPhone 15 Pro Max",
            "6.7-inch flagship with the A17 Pro chip and a titanium frame.",
            1199.99,
            ("electronics", "Electronics"),
            techhub.id,
            24,
            4.8,
            310,
            day(2024, 3, 10),
        ),
        product(
            "Samsung Galaxy S24 Ultra",
            "200MP camera, S Pen, and a 6.8-inch QHD+ display.",
            1299.99,
            ("electronics", "Electronics"),
            techhub.id,
            18,
            4.7,
            250,
            day(2024, 2, 20),
        ),
        product(
            "MacBook Pro 14",
            "M3 Pro, 18GB unified memory, Liquid Retina XDR display.",
            1999.99,
            ("laptops", "Laptops"),
            techhub.id,
            9,
            4.9,
            180,
            day(2024, 1, 15),
        ),
        product(
            "Dell XPS 13",
            "13.4-inch InfinityEdge ultrabook with Intel Core Ultra 7.",
            1099.99,
            ("laptops", "Laptops"),
            gadget_galaxy.id,
            14,
            4.5,
            140,
            day(2023, 11, 2),
        ),
        product(
            "iPad Air",
            "11-inch Liquid Retina display with the M2 chip.",
            599.99,
            ("electronics", "Electronics"),
            techhub.id,
            30,
            4.6,
            200,
            day(2023, 12, 5),
        ),
        product(
            "AirPods Pro",
            "Active noise cancellation with adaptive transparency.",
            249.99,
            ("audio", "Audio"),
            techhub.id,
            60,
            4.7,
            520,
            day(2023, 9, 18),
        ),
        product(
            "Sony WH-1000XM5",
            "Industry-leading noise canceling over-ear headphones.",
            399.99,
            ("audio", "Audio"),
            gadget_galaxy.id,
            22,
            4.8,
            430,
            day(2023, 10, 7),
        ),
        product(
            "Apple Watch Series 9",
            "S9 chip, double-tap gesture, always-on Retina display.",
            429.99,
            ("electronics", "Electronics"),
            techhub.id,
            26,
            4.6,
            150,
            day(2024, 4, 2),
        ),
        product(
            "Nintendo Switch OLED",
            "7-inch OLED screen, enhanced audio, 64GB storage.",
            349.99,
            ("electronics", "Electronics"),
            gadget_galaxy.id,
            40,
            4.7,
            610,
            day(2023, 8, 21),
        ),
        product(
            "Kindle Paperwhite",
            "6.8-inch glare-free display with adjustable warm light.",
            149.99,
            ("electronics", "Electronics"),
            gadget_galaxy.id,
            55,
            4.4,
            330,
            day(2023, 7, 11),
        ),
        product(
            "GoPro Hero 12",
            "5.3K60 video, HyperSmooth 6.0 stabilization, waterproof.",
            399.99,
            ("electronics", "Electronics"),
            gadget_galaxy.id,
            0,
            4.3,
            95,
            day(2024, 5, 14),
        ),
        product(
            "Logitech MX Master 3S",
            "Quiet-click ergonomic mouse with an 8K DPI sensor.",
            99.99,
            ("accessories", "Accessories"),
            gadget_galaxy.id,
            80,
            4.8,
            720,
            day(2023, 6, 30),
        ),
    ];

    // Current promotions and merchandising flags.
    products[0].featured = true;
    products[2].featured = true;
    products[3].original_price = Some(1299.99);
    products[3].on_sale = true;
    products[6].original_price = Some(449.99);
    products[6].on_sale = true;
    products[5].best_seller = true;
    products[8].best_seller = true;
    products[11].best_seller = true;
    products[7].is_new = true;
    products[10].is_new = true;

    Catalog {
        products,
        categories,
        sellers: vec![techhub, gadget_galaxy],
        fetched_at: Utc::now(),
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    name: &str,
    description: &str,
    price: f64,
    category: (&str, &str),
    seller_id: Uuid,
    stock: i32,
    rating: f64,
    rating_count: i32,
    created_at: Option<DateTime<Utc>>,
) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.into(),
        description: description.into(),
        price,
        original_price: None,
        stock,
        category_id: category.0.into(),
        category_name: category.1.into(),
        seller_id: Some(seller_id),
        rating,
        rating_count,
        featured: false,
        is_new: false,
        on_sale: false,
        best_seller: false,
        in_stock: stock > 0,
        created_at,
    }
}

fn day(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_twelve_products_and_distinct_ids() {
        let catalog = seed_catalog();
        assert_eq!(catalog.products.len(), 12);
        let mut ids: Vec<Uuid> = catalog.products.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn every_product_belongs_to_a_seed_category_and_seller() {
        let catalog = seed_catalog();
        for product in &catalog.products {
            assert!(
                catalog.categories.iter().any(|c| c.id == product.category_id),
                "unknown category {}",
                product.category_id
            );
            assert!(
                catalog
                    .sellers
                    .iter()
                    .any(|s| Some(s.id) == product.seller_id),
                "unknown seller for {}",
                product.name
            );
        }
    }

    #[test]
    fn sale_items_carry_a_higher_original_price() {
        let catalog = seed_catalog();
        for product in catalog.products.iter().filter(|p| p.on_sale) {
            let original = product.original_price.expect("sale item has original price");
            assert!(original > product.price);
        }
    }
}
