use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::ArticleDetail;

/// Fetch one article with its comment count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetArticleQuery {
    pub article_id: i32,
}

impl Request<AppResult<ArticleDetail>> for GetArticleQuery {}

impl crate::cqrs::middleware::Query for GetArticleQuery {}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetArticleQuery) -> AppResult<ArticleDetail> {
    sqlx::query_as::<_, ArticleDetail>(
        r#"
        SELECT articles.article_id, articles.title, articles.topic, articles.author,
               articles.body, articles.created_at, articles.votes, articles.article_img_url,
               COUNT(comments.article_id) AS comment_count
        FROM articles
        LEFT JOIN comments ON articles.article_id = comments.article_id
        WHERE articles.article_id = $1
        GROUP BY articles.article_id
        "#,
    )
    .bind(query.article_id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| AppError::not_found("Article not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{TestArticle, TestComment, TestTopic, TestUser};

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_get_counts_comments(pool: PgPool) -> sqlx::Result<()> {
        let topic = TestTopic::new("paper").insert(&pool).await?;
        let user = TestUser::new("lurker").insert(&pool).await?;
        let quiet = TestArticle::new(&topic, &user).insert(&pool).await?;
        let busy = TestArticle::new(&topic, &user)
            .with_title("Busy")
            .insert(&pool)
            .await?;
        for _ in 0..3 {
            TestComment::new(&busy, &user).insert(&pool).await?;
        }

        let detail = handle(pool.clone(), GetArticleQuery { article_id: busy.article_id })
            .await
            .unwrap();
        assert_eq!(detail.article.title, "Busy");
        assert_eq!(detail.article.body, "Test body");
        assert_eq!(detail.comment_count, 3);

        let detail = handle(pool, GetArticleQuery { article_id: quiet.article_id })
            .await
            .unwrap();
        assert_eq!(detail.comment_count, 0);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_get_missing(pool: PgPool) {
        let err = handle(pool, GetArticleQuery { article_id: 1000 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Article not found"));
    }
}
