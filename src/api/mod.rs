//! API module
//!
//! HTTP handlers, middleware and the application router.

pub mod health;
pub mod ids;
pub mod middleware;
pub mod products;

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    http::{Method, Uri},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/health",
            get(health::health_check).fallback(route_not_found),
        )
        .route(
            "/products",
            get(products::list_products).fallback(route_not_found),
        )
        .route(
            "/products/compare",
            get(products::compare_products).fallback(route_not_found),
        )
        .fallback(route_not_found)
        // Middleware (order matters - the error envelope must wrap handlers directly)
        .layer(axum::middleware::from_fn(middleware::error_envelope))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Fallback for unknown routes and unsupported methods on known ones
async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
