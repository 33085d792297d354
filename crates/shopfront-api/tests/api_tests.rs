//! API Integration Tests
//!
//! The product index is mocked in-process; these tests exercise the HTTP
//! surface end to end, including the clause the handler hands to the index.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use shopfront_api::{create_router, state::AppState};
use shopfront_core::{Color, Product, Result, Size};
use shopfront_index::{ProductIndex, ScoredMatch, VectorQuery};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Index stub that records the query it receives
struct MockIndex {
    matches: Vec<ScoredMatch>,
    last_query: Mutex<Option<VectorQuery>>,
}

impl MockIndex {
    fn new(matches: Vec<ScoredMatch>) -> Arc<Self> {
        Arc::new(Self {
            matches,
            last_query: Mutex::new(None),
        })
    }

    fn last_filter(&self) -> Option<String> {
        self.last_query
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|q| q.filter.clone())
    }
}

#[async_trait]
impl ProductIndex for MockIndex {
    async fn query(&self, query: &VectorQuery) -> Result<Vec<ScoredMatch>> {
        *self.last_query.lock().unwrap() = Some(query.clone());
        Ok(self.matches.clone())
    }
}

fn product(name: &str, price: f64) -> ScoredMatch {
    ScoredMatch {
        id: name.to_string(),
        score: 0.9,
        metadata: Some(Product {
            image_id: "1".to_string(),
            name: name.to_string(),
            size: Size::M,
            color: Color::Blue,
            price,
        }),
    }
}

async fn app_with_index(index: Arc<MockIndex>) -> Router {
    let state = Arc::new(AppState::default());
    state.initialize_index(index).await;
    create_router(state)
}

fn post_products(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// =============================================================================
// Health Tests
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = app_with_index(MockIndex::new(vec![])).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_readiness_without_index() {
    let app = create_router(Arc::new(AppState::default()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = response_json(response).await;
    assert_eq!(json["ready"], false);
    assert_eq!(json["checks"]["index"], false);
}

// =============================================================================
// Product Query Tests
// =============================================================================

#[tokio::test]
async fn test_query_builds_expected_clause() {
    let index = MockIndex::new(vec![product("tee", 25.0)]);
    let app = app_with_index(index.clone()).await;

    let response = app
        .oneshot(post_products(json!({
            "filter": {
                "sort": "none",
                "color": ["blue", "green"],
                "size": ["M"],
                "price": [0, 40]
            }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        index.last_filter().as_deref(),
        Some(
            "(\"color\" = \"blue\" OR \"color\" = \"green\") AND (\"size\" = \"M\") AND (price >= 0 AND price <= 40)"
        )
    );

    let json = response_json(response).await;
    assert!(json.is_array());
    assert_eq!(json[0]["metadata"]["name"], "tee");
}

#[tokio::test]
async fn test_query_empty_selections_use_sentinels() {
    let index = MockIndex::new(vec![]);
    let app = app_with_index(index.clone()).await;

    let response = app
        .oneshot(post_products(json!({
            "filter": {
                "sort": "none",
                "color": [],
                "size": [],
                "price": [0, 100]
            }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        index.last_filter().as_deref(),
        Some("(\"color\" = \"\") AND (\"size\" = \"\") AND (price >= 0 AND price <= 100)")
    );
}

#[tokio::test]
async fn test_query_applies_price_sort() {
    let index = MockIndex::new(vec![
        product("mid", 20.0),
        product("cheap", 10.0),
        product("pricey", 30.0),
    ]);
    let app = app_with_index(index).await;

    let response = app
        .oneshot(post_products(json!({
            "filter": {
                "sort": "price-desc",
                "color": ["blue"],
                "size": ["M"],
                "price": [0, 100]
            }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["metadata"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["pricey", "mid", "cheap"]);
}

#[tokio::test]
async fn test_invalid_token_rejected_with_400() {
    let app = app_with_index(MockIndex::new(vec![])).await;

    let response = app
        .oneshot(post_products(json!({
            "filter": {
                "sort": "none",
                "color": ["chartreuse"],
                "size": ["M"],
                "price": [0, 100]
            }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_malformed_body_rejected_with_400() {
    let app = app_with_index(MockIndex::new(vec![])).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_method_rejected_with_405() {
    let app = app_with_index(MockIndex::new(vec![])).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_uninitialized_index_is_500() {
    let app = create_router(Arc::new(AppState::default()));

    let response = app
        .oneshot(post_products(json!({
            "filter": {
                "sort": "none",
                "color": ["blue"],
                "size": ["M"],
                "price": [0, 100]
            }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
