//! Test helpers and fixtures for database tests
//!
//! Provides utilities to reduce boilerplate in test setup.
//!
//! # Examples
//!
//! ```rust,ignore
//! use news_server::features::shared::test_helpers::*;
//!
//! #[sqlx::test(migrations = "../../migrations")]
//! async fn test_something(pool: PgPool) -> sqlx::Result<()> {
//!     let topic = TestTopic::new("cats").insert(&pool).await?;
//!     let user = TestUser::new("rogersop").insert(&pool).await?;
//!     let article = TestArticle::new(&topic, &user)
//!         .with_votes(10)
//!         .insert(&pool)
//!         .await?;
//!
//!     // ... test logic ...
//!     Ok(())
//! }
//! ```

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Builder for creating test topics
#[derive(Debug, Clone)]
pub struct TestTopic {
    pub slug: String,
    pub description: Option<String>,
}

impl TestTopic {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            description: Some(format!("All about {slug}")),
        }
    }

    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    pub async fn insert(self, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(&self.slug)
            .bind(&self.description)
            .execute(pool)
            .await?;

        Ok(self)
    }
}

/// Builder for creating test users
#[derive(Debug, Clone)]
pub struct TestUser {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl TestUser {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            name: format!("{username} (test)"),
            avatar_url: None,
        }
    }

    pub fn with_avatar(mut self, avatar_url: &str) -> Self {
        self.avatar_url = Some(avatar_url.to_string());
        self
    }

    pub async fn insert(self, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(&self.username)
            .bind(&self.name)
            .bind(&self.avatar_url)
            .execute(pool)
            .await?;

        Ok(self)
    }
}

/// Builder for creating test articles
///
/// `article_id` is filled in by [`TestArticle::insert`].
#[derive(Debug, Clone)]
pub struct TestArticle {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: Option<DateTime<Utc>>,
}

impl TestArticle {
    pub fn new(topic: &TestTopic, author: &TestUser) -> Self {
        Self {
            article_id: 0,
            title: "Test article".to_string(),
            topic: topic.slug.clone(),
            author: author.username.clone(),
            body: "Test body".to_string(),
            votes: 0,
            created_at: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub async fn insert(mut self, pool: &PgPool) -> sqlx::Result<Self> {
        self.article_id = sqlx::query_scalar(
            r#"
            INSERT INTO articles (title, topic, author, body, votes, created_at)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
            RETURNING article_id
            "#,
        )
        .bind(&self.title)
        .bind(&self.topic)
        .bind(&self.author)
        .bind(&self.body)
        .bind(self.votes)
        .bind(self.created_at)
        .fetch_one(pool)
        .await?;

        Ok(self)
    }
}

/// Builder for creating test comments
///
/// `comment_id` is filled in by [`TestComment::insert`].
#[derive(Debug, Clone)]
pub struct TestComment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: Option<DateTime<Utc>>,
}

impl TestComment {
    pub fn new(article: &TestArticle, author: &TestUser) -> Self {
        Self {
            comment_id: 0,
            article_id: article.article_id,
            author: author.username.clone(),
            body: "Test comment".to_string(),
            votes: 0,
            created_at: None,
        }
    }

    pub fn with_votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub async fn insert(mut self, pool: &PgPool) -> sqlx::Result<Self> {
        self.comment_id = sqlx::query_scalar(
            r#"
            INSERT INTO comments (body, article_id, author, votes, created_at)
            VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
            RETURNING comment_id
            "#,
        )
        .bind(&self.body)
        .bind(self.article_id)
        .bind(&self.author)
        .bind(self.votes)
        .bind(self.created_at)
        .fetch_one(pool)
        .await?;

        Ok(self)
    }
}
