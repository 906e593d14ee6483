use mediator::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::features::shared::validation::{vote_delta, ValidationError};
use crate::models::Comment;

/// Adjust a comment's vote counter by a signed delta
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCommentVotesCommand {
    #[serde(skip)]
    pub comment_id: i32,
    pub inc_votes: Option<Value>,
}

impl Request<AppResult<Comment>> for UpdateCommentVotesCommand {}

impl crate::cqrs::middleware::Command for UpdateCommentVotesCommand {}

impl UpdateCommentVotesCommand {
    pub fn validate(&self) -> Result<i32, ValidationError> {
        vote_delta(self.inc_votes.as_ref())
    }
}

#[tracing::instrument(skip(pool, command), fields(comment_id = command.comment_id))]
pub async fn handle(pool: PgPool, command: UpdateCommentVotesCommand) -> AppResult<Comment> {
    let delta = command.validate()?;

    sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET votes = votes + $2
        WHERE comment_id = $1
        RETURNING comment_id, body, article_id, author, votes, created_at
        "#,
    )
    .bind(command.comment_id)
    .bind(delta)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| AppError::not_found("Comment not found"))
}
