//! Shopfront Client - storefront-side session
//!
//! Holds the shopper's filter state and keeps the result set in sync with
//! it: every filter change schedules a debounced re-fetch against the
//! shopfront API, and stale responses from overlapping fetches are
//! discarded.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use shopfront_core::{ClientConfig, FilterPayload, Result, ShopError};
use shopfront_index::ScoredMatch;

pub mod debounce;
pub mod session;

pub use debounce::Debouncer;
pub use session::Storefront;

/// Trait for the product fetch backend
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    /// Fetch scored matches for a filter payload
    async fn fetch_products(&self, filter: &FilterPayload) -> Result<Vec<ScoredMatch>>;
}

/// HTTP client for the shopfront API
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ProductQueryBody<'a> {
    filter: &'a FilterPayload,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ProductFetcher for ApiClient {
    async fn fetch_products(&self, filter: &FilterPayload) -> Result<Vec<ScoredMatch>> {
        let response = self
            .client
            .post(format!("{}/api/products", self.base_url))
            .json(&ProductQueryBody { filter })
            .send()
            .await
            .map_err(|e| ShopError::IndexError(format!("Product fetch failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ShopError::IndexError(format!(
                "Product fetch returned {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ShopError::IndexError(format!("Failed to parse products: {e}")))
    }
}
