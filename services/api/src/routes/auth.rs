//! Registration, login and profile routes under `/v1`

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use super::json_body;
use crate::{
    error::{ApiError, ApiResult},
    models::{LoginRequest, RegisterRequest, User},
    session::SESSION_COOKIE,
    state::AppState,
};

/// Body returned by a successful login
pub const LOGIN_SUCCESS: &str = "Login Successful! ";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/auth/register", post(register))
        .route("/v1/auth/login", post(login))
        .route("/v1/profile", get(profile))
}

/// User registration endpoint
///
/// The duplicate check and the insert are separate store calls, so two
/// concurrent registrations for the same email can both succeed.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let payload = json_body(payload)?;
    info!("Registering user: {}", payload.email);

    if payload.email.is_empty() {
        return Err(ApiError::bad_request("Empty Email!"));
    }
    if payload.name.is_empty() {
        return Err(ApiError::bad_request("Empty Name!"));
    }
    if payload.password.is_empty() {
        return Err(ApiError::bad_request("Empty Password!"));
    }

    if state
        .user_repository
        .find_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::bad_request("User Already Exists!"));
    }

    let saved = state.user_repository.save(&User::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// User login endpoint
///
/// Passwords are compared byte for byte against the stored value. The
/// session token is the email as submitted.
///
/// The header carries the raw token (`SESSION_ID=b@x`). `CookieJar` would
/// percent-encode it as `b%40x`.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let payload = json_body(payload)?;
    info!("Login attempt for user: {}", payload.email);

    if payload.email.is_empty() {
        return Err(ApiError::bad_request("Empty Email!"));
    }
    if payload.password.is_empty() {
        return Err(ApiError::bad_request("Empty Password!"));
    }

    let user = state
        .user_repository
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(|| ApiError::bad_request("User not found!"))?;

    if user.password.as_bytes() != payload.password.as_bytes() {
        return Err(ApiError::bad_request("Incorrect Password!"));
    }

    let cookie = state.sessions.issue(&payload.email)?;
    let set_cookie = HeaderValue::try_from(cookie.to_string()).map_err(|e| {
        ApiError::Internal(anyhow::Error::new(e).context("Invalid session cookie"))
    })?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, set_cookie)],
        LOGIN_SUCCESS,
    ))
}

/// Profile of the user owning the presented session cookie
pub async fn profile(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<impl IntoResponse> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| ApiError::bad_request("No such session exists!"))?;

    if !state.sessions.contains(&token)? {
        return Err(ApiError::bad_request("No such session exists!"));
    }

    let user = state
        .user_repository
        .find_by_email(&token)
        .await?
        .ok_or_else(|| ApiError::bad_request("No user for session"))?;

    Ok(Json(user))
}
