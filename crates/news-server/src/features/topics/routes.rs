//! Topic API routes
//!
//! - `GET /api/topics` - List topics
//! - `POST /api/topics` - Create a topic

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;

use super::{commands::CreateTopicCommand, queries::ListTopicsQuery};
use crate::error::AppError;
use crate::features::shared::validation::json_body;
use crate::features::FeatureState;

pub fn topics_routes() -> Router<FeatureState> {
    Router::new().route("/", get(list_topics).post(create_topic))
}

/// Create a topic
///
/// # Request Body
///
/// `{"slug": "dogs", "description": "Not cats"}`
///
/// # Response
///
/// - `201 Created` - `{"topic": {...}}`
/// - `400 Bad Request` - Missing, empty or duplicate slug
#[tracing::instrument(skip(pool, payload))]
async fn create_topic(
    State(pool): State<PgPool>,
    payload: Result<Json<CreateTopicCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let command = json_body(payload)?;

    let topic = super::commands::create::handle(pool, command).await?;

    Ok((StatusCode::CREATED, Json(json!({ "topic": topic }))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_topics(State(pool): State<PgPool>) -> Result<Response, AppError> {
    let topics = super::queries::list::handle(pool, ListTopicsQuery::default()).await?;

    Ok((StatusCode::OK, Json(json!({ "topics": topics }))).into_response())
}
