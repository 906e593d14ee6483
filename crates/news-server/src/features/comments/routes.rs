//! Comment API routes
//!
//! # Route Structure
//!
//! - `PATCH /api/comments/:comment_id` - Adjust votes by `inc_votes`
//! - `DELETE /api/comments/:comment_id` - Delete a comment
//!
//! [`list_comments`] and [`create_comment`] are mounted by the articles router
//! under `/api/articles/:article_id/comments`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::patch,
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;

use super::{
    commands::{CreateCommentCommand, DeleteCommentCommand, UpdateCommentVotesCommand},
    queries::ListCommentsQuery,
};
use crate::error::AppError;
use crate::features::shared::validation::{json_body, parse_id, query_params};
use crate::features::FeatureState;

/// Creates the comments router
pub fn comments_routes() -> Router<FeatureState> {
    Router::new().route(
        "/:comment_id",
        patch(update_comment_votes).delete(delete_comment),
    )
}

/// Comment on an article
///
/// # Request Body
///
/// `{"username": "lurker", "body": "First!"}`
///
/// # Response
///
/// - `201 Created` - `{"comment": {...}}`
/// - `400 Bad Request` - Missing field or unknown username
/// - `404 Not Found` - `{"msg": "Article not found"}`
#[tracing::instrument(skip(pool, payload), fields(article_id = %article_id))]
pub async fn create_comment(
    State(pool): State<PgPool>,
    Path(article_id): Path<String>,
    payload: Result<Json<CreateCommentCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let article_id = parse_id(&article_id)?;
    let mut command = json_body(payload)?;
    command.article_id = article_id;

    let comment = super::commands::create::handle(pool, command).await?;

    tracing::info!(comment_id = comment.comment_id, "Comment created via API");

    Ok((StatusCode::CREATED, Json(json!({ "comment": comment }))).into_response())
}

/// Adjust a comment's votes
#[tracing::instrument(skip(pool, payload), fields(comment_id = %comment_id))]
async fn update_comment_votes(
    State(pool): State<PgPool>,
    Path(comment_id): Path<String>,
    payload: Result<Json<UpdateCommentVotesCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let comment_id = parse_id(&comment_id)?;
    let mut command = json_body(payload)?;
    command.comment_id = comment_id;

    let comment = super::commands::update_votes::handle(pool, command).await?;

    Ok((StatusCode::OK, Json(json!({ "comment": comment }))).into_response())
}

/// Delete a comment
#[tracing::instrument(skip(pool), fields(comment_id = %comment_id))]
async fn delete_comment(
    State(pool): State<PgPool>,
    Path(comment_id): Path<String>,
) -> Result<Response, AppError> {
    let command = DeleteCommentCommand {
        comment_id: parse_id(&comment_id)?,
    };

    super::commands::delete::handle(pool, command).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// List an article's comments
///
/// # Endpoint
///
/// `GET /api/articles/:article_id/comments?limit=5&p=1`
///
/// # Response
///
/// - `200 OK` - `{"comments": [...], "total_count": 11}`
/// - `400 Bad Request` - Non-integer id, invalid `limit` or `p`
/// - `404 Not Found` - Unknown article, or a page past the end
#[tracing::instrument(skip(pool, params), fields(article_id = %article_id))]
pub async fn list_comments(
    State(pool): State<PgPool>,
    Path(article_id): Path<String>,
    params: Result<Query<ListCommentsQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let article_id = parse_id(&article_id)?;
    let mut query = query_params(params)?;
    query.article_id = article_id;

    let response = super::queries::list::handle(pool, query).await?;

    Ok((StatusCode::OK, Json(response)).into_response())
}
