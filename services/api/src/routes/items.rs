//! Item routes under `/api/items`

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::json_body;
use crate::{
    error::{ApiError, ApiResult},
    models::{Item, NewItem},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/items", post(create_item).get(get_items))
        .route("/api/items/:id", get(get_item))
}

/// Create a new item
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let item = Item::from(json_body(payload)?);
    let saved = state.item_repository.save(&item).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Get all items
pub async fn get_items(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let items = state.item_repository.find_all().await?;
    Ok(Json(items))
}

/// Get an item by ID
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let item = state
        .item_repository
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(item))
}
