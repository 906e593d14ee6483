use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCommentCommand {
    pub comment_id: i32,
}

impl Request<AppResult<()>> for DeleteCommentCommand {}

impl crate::cqrs::middleware::Command for DeleteCommentCommand {}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, command: DeleteCommentCommand) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
        .bind(command.comment_id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Comment not found"));
    }

    tracing::info!(comment_id = command.comment_id, "Comment deleted");
    Ok(())
}
