//! Catalog service routes

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderValue, Method},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

pub mod auth;
pub mod items;
pub mod people;

/// Query string carrying a name prefix
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

/// Create the router for the catalog service
///
/// `cors_origin` is the single origin allowed to call the `/v1` routes with
/// credentials; the `/api` routes carry no CORS policy.
pub fn create_router(state: AppState, cors_origin: &str) -> Result<Router> {
    let origin: HeaderValue = cors_origin
        .parse()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let router = Router::new()
        .route("/health", get(health_check))
        .merge(items::router())
        .merge(people::router())
        .merge(auth::router().layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.health_check().await.unwrap_or_else(|e| {
        error!("Store health check failed: {}", e);
        false
    });

    Json(json!({
        "status": "ok",
        "service": "catalog-api",
        "store": store
    }))
}

/// Unwrap a JSON body, treating a malformed one as a validation failure
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| ApiError::bad_request(e.body_text()))
}

/// Unwrap a query string, treating a malformed one as a validation failure
pub(crate) fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|e| ApiError::bad_request(e.body_text()))
}
