use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::Topic;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTopicsQuery {}

impl Request<AppResult<Vec<Topic>>> for ListTopicsQuery {}

impl crate::cqrs::middleware::Query for ListTopicsQuery {}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, _query: ListTopicsQuery) -> AppResult<Vec<Topic>> {
    let topics = sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics ORDER BY slug")
        .fetch_all(&pool)
        .await?;

    Ok(topics)
}
