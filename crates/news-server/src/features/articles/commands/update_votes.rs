use mediator::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::features::shared::validation::{vote_delta, ValidationError};
use crate::models::Article;

/// Adjust an article's vote counter by a signed delta
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArticleVotesCommand {
    /// Taken from the path, never from the body
    #[serde(skip)]
    pub article_id: i32,
    pub inc_votes: Option<Value>,
}

impl Request<AppResult<Article>> for UpdateArticleVotesCommand {}

impl crate::cqrs::middleware::Command for UpdateArticleVotesCommand {}

impl UpdateArticleVotesCommand {
    pub fn validate(&self) -> Result<i32, ValidationError> {
        vote_delta(self.inc_votes.as_ref())
    }
}

#[tracing::instrument(skip(pool, command), fields(article_id = command.article_id))]
pub async fn handle(pool: PgPool, command: UpdateArticleVotesCommand) -> AppResult<Article> {
    let delta = command.validate()?;

    let article = sqlx::query_as::<_, Article>(
        r#"
        UPDATE articles
        SET votes = votes + $2
        WHERE article_id = $1
        RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url
        "#,
    )
    .bind(command.article_id)
    .bind(delta)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| AppError::not_found("Article not found"))?;

    tracing::debug!(votes = article.votes, delta, "Article votes updated");

    Ok(article)
}
