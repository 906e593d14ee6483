//! User API routes
//!
//! - `GET /api/users` - List users
//! - `GET /api/users/:username` - Get one user

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;

use super::queries::{GetUserQuery, ListUsersQuery};
use crate::error::AppError;
use crate::features::FeatureState;

pub fn users_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:username", get(get_user))
}

#[tracing::instrument(skip(pool))]
async fn list_users(State(pool): State<PgPool>) -> Result<Response, AppError> {
    let users = super::queries::list::handle(pool, ListUsersQuery::default()).await?;

    Ok((StatusCode::OK, Json(json!({ "users": users }))).into_response())
}

/// Get a user profile
///
/// # Response
///
/// - `200 OK` - `{"user": {...}}`
/// - `404 Not Found` - `{"msg": "User not found"}`
#[tracing::instrument(skip(pool))]
async fn get_user(
    State(pool): State<PgPool>,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    let user = super::queries::get::handle(pool, GetUserQuery { username }).await?;

    Ok((StatusCode::OK, Json(json!({ "user": user }))).into_response())
}
