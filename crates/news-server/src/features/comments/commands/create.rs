//! Create comment command
//!
//! The insert runs concurrently with a check that the article exists. If the
//! article is missing the caller gets a 404 even though the insert's foreign
//! key would also have failed.

use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::features::shared::validation::{require_text, ValidationError};
use crate::features::shared::{with_existence, Lookup};
use crate::models::Comment;

/// Command to add a comment to an article
///
/// # Examples
///
/// ```rust,ignore
/// use news_server::features::comments::CreateCommentCommand;
///
/// let command = CreateCommentCommand {
///     article_id: 1,
///     username: Some("lurker".to_string()),
///     body: Some("First!".to_string()),
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentCommand {
    /// Taken from the path, never from the body
    #[serde(skip)]
    pub article_id: i32,
    pub username: Option<String>,
    pub body: Option<String>,
}

impl Request<AppResult<Comment>> for CreateCommentCommand {}

impl crate::cqrs::middleware::Command for CreateCommentCommand {}

impl CreateCommentCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(self.username.as_deref(), "username")?;
        require_text(self.body.as_deref(), "body")?;
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(article_id = command.article_id, username = ?command.username)
)]
pub async fn handle(pool: PgPool, command: CreateCommentCommand) -> AppResult<Comment> {
    command.validate()?;

    let insert = async {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (body, author, article_id)
            VALUES ($1, $2, $3)
            RETURNING comment_id, body, article_id, author, votes, created_at
            "#,
        )
        .bind(&command.body)
        .bind(&command.username)
        .bind(command.article_id)
        .fetch_one(&pool)
        .await?;
        Ok::<_, AppError>(comment)
    };

    let comment = with_existence(&pool, Lookup::Article(command.article_id), insert).await?;

    tracing::info!(comment_id = comment.comment_id, "Comment created");

    Ok(comment)
}
