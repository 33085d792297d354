//! Shopfront Index - Vector index abstraction
//!
//! Provides abstraction over the metadata-filtered vector index that backs
//! the product catalog, plus a REST client implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shopfront_core::{Product, Result};

pub use shopfront_core::RESULT_CAP;

/// Fixed placeholder embedding for catalog queries
///
/// The storefront only uses the index's metadata filtering; similarity
/// ranking against this vector is not meaningful and is ignored.
pub const QUERY_VECTOR: [f32; 3] = [0.0, 0.0, 0.0];

/// A nearest-neighbor query with an optional metadata filter clause
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorQuery {
    pub top_k: usize,
    pub vector: Vec<f32>,
    pub include_metadata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl VectorQuery {
    /// Catalog query: fixed cap and placeholder vector, metadata included
    pub fn catalog(top_k: usize, filter: Option<String>) -> Self {
        Self {
            top_k,
            vector: QUERY_VECTOR.to_vec(),
            include_metadata: true,
            filter,
        }
    }
}

/// One scored entry returned by the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub id: String,
    pub score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Product>,
}

/// Trait for the product index backend
#[async_trait]
pub trait ProductIndex: Send + Sync {
    /// Run a filtered nearest-neighbor query
    async fn query(&self, query: &VectorQuery) -> Result<Vec<ScoredMatch>>;
}

pub mod upstash_store;

pub use upstash_store::UpstashStore;
