//! Article API routes
//!
//! # Route Structure
//!
//! - `GET /api/articles` - List articles (`topic`, `sort_by`, `order`, `limit`, `p`)
//! - `POST /api/articles` - Create an article
//! - `GET /api/articles/:article_id` - Get one article with its comment count
//! - `PATCH /api/articles/:article_id` - Adjust votes by `inc_votes`
//! - `DELETE /api/articles/:article_id` - Delete an article and its comments
//! - `GET /api/articles/:article_id/comments` - List an article's comments
//! - `POST /api/articles/:article_id/comments` - Comment on an article
//!
//! The comment routes live here because of their path; their handlers belong
//! to the comments slice.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;

use super::{
    commands::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleVotesCommand},
    queries::{GetArticleQuery, ListArticlesQuery},
};
use crate::config::ContentConfig;
use crate::error::AppError;
use crate::features::comments::routes::{create_comment, list_comments};
use crate::features::shared::validation::{json_body, parse_id, query_params};
use crate::features::FeatureState;

/// Creates the articles router with all routes configured
pub fn articles_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(list_articles).post(create_article))
        .route(
            "/:article_id",
            get(get_article)
                .patch(update_article_votes)
                .delete(delete_article),
        )
        .route(
            "/:article_id/comments",
            get(list_comments).post(create_comment),
        )
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Create a new article
///
/// # Request Body
///
/// ```json
/// {
///   "author": "butter_bridge",
///   "title": "Living in the shadow of a great man",
///   "body": "I find this existence challenging",
///   "topic": "mitch",
///   "article_img_url": "https://example.com/optional.jpg"
/// }
/// ```
///
/// # Response
///
/// - `201 Created` - `{"article": {...}}`
/// - `400 Bad Request` - Missing field, unknown author or unknown topic
#[tracing::instrument(skip(pool, content, payload))]
async fn create_article(
    State(pool): State<PgPool>,
    State(content): State<Arc<ContentConfig>>,
    payload: Result<Json<CreateArticleCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let command = json_body(payload)?.with_default_image(&content.default_article_img_url);

    let article = super::commands::create::handle(pool, command).await?;

    tracing::info!(article_id = article.article_id, "Article created via API");

    Ok((StatusCode::CREATED, Json(json!({ "article": article }))).into_response())
}

/// Adjust an article's votes
///
/// # Request Body
///
/// `{"inc_votes": -3}`
#[tracing::instrument(skip(pool, payload), fields(article_id = %article_id))]
async fn update_article_votes(
    State(pool): State<PgPool>,
    Path(article_id): Path<String>,
    payload: Result<Json<UpdateArticleVotesCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let article_id = parse_id(&article_id)?;
    let mut command = json_body(payload)?;
    command.article_id = article_id;

    let article = super::commands::update_votes::handle(pool, command).await?;

    Ok((StatusCode::OK, Json(json!({ "article": article }))).into_response())
}

/// Delete an article
///
/// # Response
///
/// - `204 No Content`
/// - `404 Not Found` - `{"msg": "Article not found"}`
#[tracing::instrument(skip(pool), fields(article_id = %article_id))]
async fn delete_article(
    State(pool): State<PgPool>,
    Path(article_id): Path<String>,
) -> Result<Response, AppError> {
    let command = DeleteArticleCommand {
        article_id: parse_id(&article_id)?,
    };

    super::commands::delete::handle(pool, command).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// Get a single article by id
#[tracing::instrument(skip(pool), fields(article_id = %article_id))]
async fn get_article(
    State(pool): State<PgPool>,
    Path(article_id): Path<String>,
) -> Result<Response, AppError> {
    let query = GetArticleQuery {
        article_id: parse_id(&article_id)?,
    };

    let article = super::queries::get::handle(pool, query).await?;

    Ok((StatusCode::OK, Json(json!({ "article": article }))).into_response())
}

/// List articles
///
/// # Endpoint
///
/// `GET /api/articles?topic=mitch&sort_by=votes&order=ASC&limit=5&p=1`
///
/// # Response
///
/// - `200 OK` - `{"articles": [...], "total_count": 12}`
/// - `400 Bad Request` - Invalid `sort_by`, `order`, `limit` or `p`
/// - `404 Not Found` - Unknown topic, or a page past the end
#[tracing::instrument(skip(pool, params))]
async fn list_articles(
    State(pool): State<PgPool>,
    params: Result<Query<ListArticlesQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let query = query_params(params)?;

    let response = super::queries::list::handle(pool, query).await?;

    tracing::debug!(
        count = response.articles.len(),
        total = response.total_count,
        "Articles listed via API"
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}
