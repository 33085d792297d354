//! REST implementation for an Upstash-style vector index
//!
//! The index exposes a single `POST {url}/query` endpoint authenticated
//! with a bearer token; filters are flat boolean strings over the stored
//! metadata.

use crate::{ProductIndex, ScoredMatch, VectorQuery};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shopfront_core::{IndexConfig, Result, ShopError};

/// Vector index REST client
pub struct UpstashStore {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    result: Vec<ScoredMatch>,
}

impl UpstashStore {
    /// Create a client from the index configuration
    pub fn new(config: &IndexConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ShopError::ConfigError(
                "vector index URL is required".to_string(),
            ));
        }
        if config.token.is_empty() {
            return Err(ShopError::ConfigError(
                "vector index token is required".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl ProductIndex for UpstashStore {
    async fn query(&self, query: &VectorQuery) -> Result<Vec<ScoredMatch>> {
        let response = self
            .client
            .post(format!("{}/query", self.base_url))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(query)
            .send()
            .await
            .map_err(|e| ShopError::IndexError(format!("Query request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ShopError::IndexError(format!(
                "Index returned {status}: {error_text}"
            )));
        }

        let envelope: QueryEnvelope = response
            .json()
            .await
            .map_err(|e| ShopError::IndexError(format!("Failed to parse response: {e}")))?;

        tracing::debug!(
            matches = envelope.result.len(),
            filter = query.filter.as_deref().unwrap_or("<none>"),
            "index query completed"
        );

        Ok(envelope.result)
    }
}
