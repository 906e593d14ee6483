use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::User;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUsersQuery {}

impl Request<AppResult<Vec<User>>> for ListUsersQuery {}

impl crate::cqrs::middleware::Query for ListUsersQuery {}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, _query: ListUsersQuery) -> AppResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT username, name, avatar_url FROM users ORDER BY username",
    )
    .fetch_all(&pool)
    .await?;

    Ok(users)
}
