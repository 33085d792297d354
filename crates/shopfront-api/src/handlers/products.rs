//! Product query handler
//!
//! Translates the client's filter payload into an index filter clause and
//! returns the scored matches.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shopfront_core::{build_clause, FilterPayload, SortOrder};
use shopfront_index::{ScoredMatch, VectorQuery};
use std::sync::Arc;
use utoipa::ToSchema;

/// Product query request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductQueryRequest {
    /// Filter payload: `{ sort, color: [...], size: [...], price: [min, max] }`
    #[schema(value_type = Object)]
    pub filter: FilterPayload,
}

/// Handle product catalog queries
///
/// Invalid tokens or a malformed body are rejected with 400; the typed
/// payload enums do the validation during deserialization.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductQueryRequest,
    responses(
        (status = 200, description = "Scored catalog matches"),
        (status = 400, description = "Invalid filter payload", body = crate::error::ApiError),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Internal error", body = crate::error::ApiError)
    )
)]
pub async fn query_products(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProductQueryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let Json(req) = payload
        .map_err(|rejection| AppError::BadRequest(format!("Invalid filter payload: {rejection}")))?;

    let clause = build_clause(&req.filter);
    tracing::debug!(
        filter = %clause.expression,
        sort = %req.filter.sort,
        "querying product index"
    );

    let index = state
        .index()
        .await
        .ok_or_else(|| AppError::Internal("product index not initialized".to_string()))?;

    let query = VectorQuery::catalog(
        state.config.index.top_k,
        clause.as_filter().map(str::to_owned),
    );

    let mut matches = index.query(&query).await?;
    sort_matches(&mut matches, req.filter.sort);

    Ok((StatusCode::OK, Json(matches)))
}

/// Order matches by metadata price; entries without metadata sink to the
/// end. The vector search cannot express price ordering, so it is applied
/// here, after the fetch.
fn sort_matches(matches: &mut [ScoredMatch], sort: SortOrder) {
    let price = |entry: &ScoredMatch| entry.metadata.as_ref().map(|m| m.price);

    match sort {
        SortOrder::None => {}
        SortOrder::PriceAsc => matches.sort_by(|a, b| match (price(a), price(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }),
        SortOrder::PriceDesc => {
            sort_matches(matches, SortOrder::PriceAsc);
            matches.reverse();
        }
    }
}
