use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::features::shared::{with_existence, Lookup};
use crate::models::User;

/// Fetch a user profile by username
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserQuery {
    pub username: String,
}

impl Request<AppResult<User>> for GetUserQuery {}

impl crate::cqrs::middleware::Query for GetUserQuery {}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetUserQuery) -> AppResult<User> {
    let select = async {
        let user = sqlx::query_as::<_, User>(
            "SELECT username, name, avatar_url FROM users WHERE username = $1",
        )
        .bind(&query.username)
        .fetch_optional(&pool)
        .await?;
        Ok::<_, AppError>(user)
    };

    with_existence(&pool, Lookup::User(&query.username), select)
        .await?
        .ok_or_else(|| AppError::not_found(Lookup::User(&query.username).missing_message()))
}
