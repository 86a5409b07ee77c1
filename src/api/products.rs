//! Product API handlers
//!
//! Contains HTTP request handlers for listing and comparing products.
//! Responses are serialized straight from the shared catalog without cloning.

use crate::api::ids::{CompareQuery, IdsError};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// GET /products - List the whole catalog
pub async fn list_products(State(state): State<Arc<AppState>>) -> Response {
    Json(state.catalog.all()).into_response()
}

/// GET /products/compare?ids=1,2,3 - Compare products by ID
pub async fn compare_products(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, AppError> {
    // An undecodable query string is reported like a malformed ids value
    let Query(pairs) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Failed to decode compare query");
        AppError::InvalidIds(IdsError::Malformed)
    })?;

    let ids = CompareQuery::from_pairs(pairs)?.parse_ids()?;
    let products = state.comparator.compare(&ids)?;

    Ok(Json(products).into_response())
}
