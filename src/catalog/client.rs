use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Category, Product, Seller};

use super::Catalog;

/// Thin wrapper around the platform REST API. The storefront only ever reads
/// from it; everything it returns is normalized into the typed catalog before
/// any other code sees it.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_catalog(&self, page_limit: usize) -> AppResult<Catalog> {
        let raw: Vec<RemoteProduct> =
            self.get_json(&format!("products?limit={page_limit}")).await?;
        let categories: Vec<Category> = self.get_json("categories").await?;
        let sellers: Vec<Seller> = self.get_json("sellers").await?;

        let fetched = raw.len();
        let products: Vec<Product> = raw.into_iter().filter_map(normalize).collect();
        let dropped = fetched - products.len();
        if dropped > 0 {
            tracing::warn!(dropped, "skipped malformed upstream product records");
        }

        Ok(Catalog {
            products,
            categories,
            sellers,
            fetched_at: Utc::now(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Upstream product record, loosely typed on purpose: the remote schema has
/// drifted over time and individual records routinely miss fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProduct {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub stock: Option<i32>,
    pub category: Option<RemoteCategory>,
    pub seller_id: Option<Uuid>,
    pub rating: Option<RemoteRating>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub best_seller: bool,
    pub in_stock: Option<bool>,
    pub created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoteCategory {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoteRating {
    #[serde(alias = "rate")]
    pub average: Option<f64>,
    pub count: Option<i32>,
}

/// Coerce one upstream record into the typed product the listing pipeline
/// operates on. Records without an id, name, or usable price are dropped;
/// everything else gets a defensible default so uncertainty stays at this
/// boundary.
pub fn normalize(raw: RemoteProduct) -> Option<Product> {
    let id = raw.id?;
    let name = raw.name.filter(|n| !n.trim().is_empty())?;
    let price = raw.price.filter(|p| p.is_finite() && *p >= 0.0)?;
    let original_price = raw
        .original_price
        .filter(|p| p.is_finite() && *p > price);
    let stock = raw.stock.unwrap_or(0).max(0);

    let (category_id, category_name) = match raw.category {
        Some(c) => (
            c.id.filter(|id| !id.is_empty())
                .unwrap_or_else(|| "uncategorized".into()),
            c.name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Uncategorized".into()),
        ),
        None => ("uncategorized".into(), "Uncategorized".into()),
    };

    let (rating, rating_count) = match raw.rating {
        Some(r) => (
            r.average
                .filter(|v| v.is_finite())
                .unwrap_or(0.0)
                .clamp(0.0, 5.0),
            r.count.unwrap_or(0).max(0),
        ),
        None => (0.0, 0),
    };

    Some(Product {
        id,
        name,
        description: raw.description.unwrap_or_default(),
        price,
        original_price,
        stock,
        category_id,
        category_name,
        seller_id: raw.seller_id,
        rating,
        rating_count,
        featured: raw.featured,
        is_new: raw.is_new,
        on_sale: raw.on_sale || original_price.is_some(),
        best_seller: raw.best_seller,
        in_stock: raw.in_stock.unwrap_or(stock > 0),
        created_at: raw.created_at.as_deref().and_then(parse_timestamp),
    })
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
