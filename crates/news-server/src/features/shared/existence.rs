//! Referenced-entity existence checks
//!
//! A dependent operation (listing an article's comments, posting a comment,
//! filtering articles by topic, reading a user profile) runs alongside a
//! lookup of the entity it hangs off. Both futures are driven to completion;
//! a failed lookup wins over whatever the operation produced.

use std::future::Future;

use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// An entity that must exist for a request to make sense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Article(i32),
    Topic(&'a str),
    User(&'a str),
}

impl Lookup<'_> {
    /// Probe statement; table and column come from this closed set only
    const fn sql(&self) -> &'static str {
        match self {
            Lookup::Article(_) => "SELECT 1 FROM articles WHERE article_id = $1",
            Lookup::Topic(_) => "SELECT 1 FROM topics WHERE slug = $1",
            Lookup::User(_) => "SELECT 1 FROM users WHERE username = $1",
        }
    }

    /// Message reported when the entity is missing
    pub const fn missing_message(&self) -> &'static str {
        match self {
            Lookup::Article(_) => "Article not found",
            Lookup::Topic(_) => "Topic not found",
            Lookup::User(_) => "User not found",
        }
    }
}

/// Fail with [`AppError::NotFound`] unless the entity exists
#[tracing::instrument(skip(pool))]
pub async fn ensure_exists(pool: &PgPool, lookup: Lookup<'_>) -> AppResult<()> {
    let probe = sqlx::query_scalar::<_, i32>(lookup.sql());
    let probe = match lookup {
        Lookup::Article(id) => probe.bind(id),
        Lookup::Topic(key) | Lookup::User(key) => probe.bind(key.to_string()),
    };

    match probe.fetch_optional(pool).await? {
        Some(_) => Ok(()),
        None => {
            tracing::debug!("Referenced entity does not exist");
            Err(AppError::not_found(lookup.missing_message()))
        },
    }
}

/// Run `op` concurrently with an existence check for `lookup`
///
/// Both futures settle before anything is returned. If the entity is missing
/// that error is reported even when `op` failed too.
pub async fn with_existence<T, F>(pool: &PgPool, lookup: Lookup<'_>, op: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    let (check, result) = futures::future::join(ensure_exists(pool, lookup), op).await;
    check?;
    result
}
