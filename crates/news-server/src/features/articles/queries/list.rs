//! List articles query
//!
//! Filtering, sorting and paging all come from the query string as raw
//! strings. They are validated into an [`ArticleListing`] before anything
//! touches the database.

use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::features::shared::listing::{
    ArticleListing, ArticleSortColumn, CountedArticle, SortOrder,
};
use crate::features::shared::pagination::{Page, PageParams, PAGE_NOT_FOUND_MSG};
use crate::features::shared::validation::{non_empty, ValidationError};
use crate::features::shared::{with_existence, Lookup};
use crate::models::ArticleSummary;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListArticlesQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListArticlesResponse {
    pub articles: Vec<ArticleSummary>,
    pub total_count: i64,
}

impl Request<AppResult<ListArticlesResponse>> for ListArticlesQuery {}

impl crate::cqrs::middleware::Query for ListArticlesQuery {}

impl ListArticlesQuery {
    /// Validate every input; empty values count as absent
    pub fn validate(&self) -> Result<ArticleListing, ValidationError> {
        let sort_by = non_empty(self.sort_by.as_deref())
            .map(str::parse::<ArticleSortColumn>)
            .transpose()?
            .unwrap_or_default();
        let order = non_empty(self.order.as_deref())
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();
        let window = PageParams::new(self.limit.as_deref(), self.p.as_deref()).resolve()?;

        Ok(ArticleListing {
            topic: non_empty(self.topic.as_deref()).map(str::to_string),
            sort_by,
            order,
            window,
        })
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: ListArticlesQuery) -> AppResult<ListArticlesResponse> {
    let listing = query.validate()?;

    let page = match listing.topic.as_deref() {
        Some(topic) => with_existence(&pool, Lookup::Topic(topic), fetch(&pool, &listing)).await?,
        None => fetch(&pool, &listing).await?,
    };

    if page.is_past_end(listing.window) {
        return Err(AppError::not_found(PAGE_NOT_FOUND_MSG));
    }

    tracing::debug!(
        count = page.rows.len(),
        total = page.total_count,
        "Articles listed"
    );

    Ok(ListArticlesResponse {
        articles: page.rows,
        total_count: page.total_count,
    })
}

async fn fetch(pool: &PgPool, listing: &ArticleListing) -> AppResult<Page<ArticleSummary>> {
    let mut builder = listing.build();
    let rows = builder
        .build_query_as::<CountedArticle>()
        .fetch_all(pool)
        .await?;

    Ok(Page::from_counted(rows, CountedArticle::split))
}
