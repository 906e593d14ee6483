use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::features::shared::listing::{CommentListing, CountedComment};
use crate::features::shared::pagination::{Page, PageParams, PAGE_NOT_FOUND_MSG};
use crate::features::shared::validation::ValidationError;
use crate::features::shared::{with_existence, Lookup};
use crate::models::Comment;

/// List an article's comments, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCommentsQuery {
    /// Taken from the path, never from the query string
    #[serde(skip)]
    pub article_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommentsResponse {
    pub comments: Vec<Comment>,
    pub total_count: i64,
}

impl Request<AppResult<ListCommentsResponse>> for ListCommentsQuery {}

impl crate::cqrs::middleware::Query for ListCommentsQuery {}

impl ListCommentsQuery {
    pub fn validate(&self) -> Result<CommentListing, ValidationError> {
        Ok(CommentListing {
            article_id: self.article_id,
            window: PageParams::new(self.limit.as_deref(), self.p.as_deref()).resolve()?,
        })
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: ListCommentsQuery) -> AppResult<ListCommentsResponse> {
    let listing = query.validate()?;

    let page = with_existence(
        &pool,
        Lookup::Article(listing.article_id),
        fetch(&pool, listing),
    )
    .await?;

    if page.is_past_end(listing.window) {
        return Err(AppError::not_found(PAGE_NOT_FOUND_MSG));
    }

    Ok(ListCommentsResponse {
        comments: page.rows,
        total_count: page.total_count,
    })
}

async fn fetch(pool: &PgPool, listing: CommentListing) -> AppResult<Page<Comment>> {
    let mut builder = listing.build();
    let rows = builder
        .build_query_as::<CountedComment>()
        .fetch_all(pool)
        .await?;

    Ok(Page::from_counted(rows, CountedComment::split))
}
