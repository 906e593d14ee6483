use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::features::shared::validation::{require_text, ValidationError};
use crate::models::Topic;

/// Command to create a topic
///
/// The slug is the topic's key and must be non-empty; a duplicate slug is
/// rejected by the unique constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTopicCommand {
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Request<AppResult<Topic>> for CreateTopicCommand {}

impl crate::cqrs::middleware::Command for CreateTopicCommand {}

impl CreateTopicCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(self.slug.as_deref(), "slug")?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(slug = ?command.slug))]
pub async fn handle(pool: PgPool, command: CreateTopicCommand) -> AppResult<Topic> {
    command.validate()?;

    let topic = sqlx::query_as::<_, Topic>(
        "INSERT INTO topics (slug, description) VALUES ($1, $2) RETURNING slug, description",
    )
    .bind(command.slug)
    .bind(command.description)
    .fetch_one(&pool)
    .await?;

    tracing::info!(slug = %topic.slug, "Topic created");

    Ok(topic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn command(slug: Option<&str>, description: Option<&str>) -> CreateTopicCommand {
        CreateTopicCommand {
            slug: slug.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_requires_slug() {
        assert!(command(Some("dogs"), None).validate().is_ok());
        assert_eq!(
            command(None, Some("Not cats")).validate(),
            Err(ValidationError::MissingField("slug"))
        );
        assert_eq!(
            command(Some(""), Some("Not cats")).validate(),
            Err(ValidationError::EmptyField("slug"))
        );
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_and_duplicate(pool: PgPool) {
        let topic = handle(pool.clone(), command(Some("dogs"), Some("Not cats")))
            .await
            .unwrap();
        assert_eq!(
            topic,
            Topic {
                slug: "dogs".to_string(),
                description: Some("Not cats".to_string()),
            }
        );

        let err = handle(pool, command(Some("dogs"), None)).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.classify().0, axum::http::StatusCode::BAD_REQUEST);
    }
}
