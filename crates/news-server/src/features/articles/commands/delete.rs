use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Delete an article; its comments go with it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteArticleCommand {
    pub article_id: i32,
}

impl Request<AppResult<()>> for DeleteArticleCommand {}

impl crate::cqrs::middleware::Command for DeleteArticleCommand {}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, command: DeleteArticleCommand) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
        .bind(command.article_id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Article not found"));
    }

    tracing::info!(article_id = command.article_id, "Article deleted");
    Ok(())
}
