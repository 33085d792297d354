//! API route definitions

use crate::handlers::products;
use crate::state::AppState;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Create API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    // Only POST is routed; axum answers other methods with 405
    Router::new().route("/products", post(products::query_products))
}
