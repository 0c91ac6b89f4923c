use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    /// Base URL of the platform API that owns the catalog. When unset the
    /// service runs against the built-in seed catalog.
    pub upstream_api_url: Option<String>,
    /// How many products to request per upstream catalog fetch.
    pub catalog_page_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let jwt_secret = env::var("JWT_SECRET")?;
        let upstream_api_url = env::var("UPSTREAM_API_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string());
        let catalog_page_limit = env::var("CATALOG_PAGE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(100);
        Ok(Self {
            host,
            port,
            jwt_secret,
            upstream_api_url,
            catalog_page_limit,
        })
    }
}
