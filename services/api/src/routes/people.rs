//! People routes under `/api/people`

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::info;

use super::{NameQuery, json_body, query_params};
use crate::{
    error::{ApiError, ApiResult},
    models::{NewPerson, Person},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/people",
            post(create_person).get(get_people).delete(delete_by_name),
        )
        .route("/api/people/id/:id", get(get_person))
        .route("/api/people/name", get(get_people_by_name))
}

/// Create a new person
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<NewPerson>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let person = Person::from(json_body(payload)?);
    let saved = state.people_repository.save(&person).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Get all people
pub async fn get_people(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let people = state.people_repository.find_all().await?;
    Ok(Json(people))
}

/// Get a person by ID
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let person = state
        .people_repository
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(person))
}

/// Get people whose name starts with the query, ignoring case
pub async fn get_people_by_name(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let NameQuery { name } = query_params(query)?;
    let people = state.people_repository.find_by_name(&name).await?;

    Ok(Json(people))
}

/// Delete every person whose name starts with the query, ignoring case
pub async fn delete_by_name(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let NameQuery { name } = query_params(query)?;

    let matches = state.people_repository.find_by_name(&name).await?;
    let removed = state.people_repository.delete_all(&matches).await?;
    info!("Deleted {} people matching name prefix {:?}", removed, name);

    Ok(StatusCode::NO_CONTENT)
}
