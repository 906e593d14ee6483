//! Create article command
//!
//! Inserts a new article and returns the stored row. The author and topic
//! must already exist; the foreign keys reject anything else and the
//! classifier turns that into a 400.

use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::config::DEFAULT_ARTICLE_IMG_URL;
use crate::error::AppResult;
use crate::features::shared::validation::{require_text, ValidationError};
use crate::models::Article;

/// Command to create a new article
///
/// # Examples
///
/// ```rust,ignore
/// use news_server::features::articles::CreateArticleCommand;
///
/// let command = CreateArticleCommand {
///     author: Some("butter_bridge".to_string()),
///     title: Some("Living in the shadow of a great man".to_string()),
///     body: Some("I find this existence challenging".to_string()),
///     topic: Some("mitch".to_string()),
///     article_img_url: None,
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateArticleCommand {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_img_url: Option<String>,
}

impl Request<AppResult<Article>> for CreateArticleCommand {}

impl crate::cqrs::middleware::Command for CreateArticleCommand {}

impl CreateArticleCommand {
    /// Validates the command parameters
    ///
    /// # Errors
    ///
    /// Author, title, body and topic must all be present and non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(self.author.as_deref(), "author")?;
        require_text(self.title.as_deref(), "title")?;
        require_text(self.body.as_deref(), "body")?;
        require_text(self.topic.as_deref(), "topic")?;
        Ok(())
    }

    /// Fill in the image URL when the caller left it out
    pub fn with_default_image(mut self, url: &str) -> Self {
        if self.article_img_url.as_deref().map_or(true, str::is_empty) {
            self.article_img_url = Some(url.to_string());
        }
        self
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(author = ?command.author, topic = ?command.topic)
)]
pub async fn handle(pool: PgPool, command: CreateArticleCommand) -> AppResult<Article> {
    command.validate()?;
    let command = command.with_default_image(DEFAULT_ARTICLE_IMG_URL);

    let article = sqlx::query_as::<_, Article>(
        r#"
        INSERT INTO articles (author, title, body, topic, article_img_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url
        "#,
    )
    .bind(command.author)
    .bind(command.title)
    .bind(command.body)
    .bind(command.topic)
    .bind(command.article_img_url)
    .fetch_one(&pool)
    .await?;

    tracing::info!(article_id = article.article_id, "Article created");

    Ok(article)
}
