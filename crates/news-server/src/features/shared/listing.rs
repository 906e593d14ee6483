//! Dynamic listing queries
//!
//! Turns validated filter, sort and page inputs into a single parameterized
//! aggregate statement. Filter values, LIMIT and OFFSET are always bound
//! parameters. The ORDER BY target and direction are rendered only from the
//! closed enums below, each mapped to a static SQL fragment.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Postgres, QueryBuilder};

use super::pagination::PageWindow;
use super::validation::ValidationError;
use crate::models::{ArticleSummary, Comment};

const ARTICLE_COLUMNS: &str = "articles.author, articles.title, articles.article_id, \
     articles.topic, articles.created_at, articles.votes, articles.article_img_url";

/// Columns an article listing may be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleSortColumn {
    Author,
    Title,
    ArticleId,
    Topic,
    Votes,
    #[default]
    CreatedAt,
    ArticleImgUrl,
    CommentCount,
}

impl ArticleSortColumn {
    pub const ALL: [ArticleSortColumn; 8] = [
        ArticleSortColumn::Author,
        ArticleSortColumn::Title,
        ArticleSortColumn::ArticleId,
        ArticleSortColumn::Topic,
        ArticleSortColumn::Votes,
        ArticleSortColumn::CreatedAt,
        ArticleSortColumn::ArticleImgUrl,
        ArticleSortColumn::CommentCount,
    ];

    /// Query-string spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            ArticleSortColumn::Author => "author",
            ArticleSortColumn::Title => "title",
            ArticleSortColumn::ArticleId => "article_id",
            ArticleSortColumn::Topic => "topic",
            ArticleSortColumn::Votes => "votes",
            ArticleSortColumn::CreatedAt => "created_at",
            ArticleSortColumn::ArticleImgUrl => "article_img_url",
            ArticleSortColumn::CommentCount => "comment_count",
        }
    }

    /// ORDER BY target
    pub const fn sql(self) -> &'static str {
        match self {
            ArticleSortColumn::Author => "articles.author",
            ArticleSortColumn::Title => "articles.title",
            ArticleSortColumn::ArticleId => "articles.article_id",
            ArticleSortColumn::Topic => "articles.topic",
            ArticleSortColumn::Votes => "articles.votes",
            ArticleSortColumn::CreatedAt => "articles.created_at",
            ArticleSortColumn::ArticleImgUrl => "articles.article_img_url",
            ArticleSortColumn::CommentCount => "comment_count",
        }
    }
}

impl FromStr for ArticleSortColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidSortBy(s.to_string()))
    }
}

/// Sort direction; the query string must say `ASC` or `DESC` exactly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub const fn sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            other => Err(ValidationError::InvalidOrder(other.to_string())),
        }
    }
}

/// Validated article listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListing {
    pub topic: Option<String>,
    pub sort_by: ArticleSortColumn,
    pub order: SortOrder,
    pub window: PageWindow,
}

impl ArticleListing {
    /// Build the aggregate statement
    ///
    /// Articles are full-outer-joined to comments and grouped so that each row
    /// carries `comment_count`; `total_count` is a window count over the
    /// filtered, grouped set and does not depend on LIMIT or OFFSET.
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new("SELECT ");
        qb.push(ARTICLE_COLUMNS);
        qb.push(
            ", COUNT(comments.article_id) AS comment_count, COUNT(*) OVER () AS total_count \
             FROM articles \
             FULL OUTER JOIN comments ON articles.article_id = comments.article_id",
        );

        if let Some(topic) = &self.topic {
            qb.push(" WHERE articles.topic = ");
            qb.push_bind(topic.clone());
        }

        qb.push(" GROUP BY ");
        qb.push(ARTICLE_COLUMNS);

        qb.push(" ORDER BY ");
        qb.push(self.sort_by.sql());
        qb.push(" ");
        qb.push(self.order.sql());

        push_window(&mut qb, self.window);
        qb
    }
}

/// Validated comment listing for one article, newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentListing {
    pub article_id: i32,
    pub window: PageWindow,
}

impl CommentListing {
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(
            "SELECT comment_id, body, article_id, author, votes, created_at, \
             COUNT(*) OVER () AS total_count \
             FROM comments WHERE article_id = ",
        );
        qb.push_bind(self.article_id);
        qb.push(" ORDER BY created_at DESC");

        push_window(&mut qb, self.window);
        qb
    }
}

fn push_window(qb: &mut QueryBuilder<'static, Postgres>, window: PageWindow) {
    qb.push(" LIMIT ");
    qb.push_bind(window.limit);
    qb.push(" OFFSET ");
    qb.push_bind(window.offset);
}

/// Article listing row with the repeated window total still attached
#[derive(Debug, FromRow)]
pub struct CountedArticle {
    #[sqlx(flatten)]
    pub article: ArticleSummary,
    pub total_count: i64,
}

impl CountedArticle {
    pub fn split(self) -> (ArticleSummary, i64) {
        (self.article, self.total_count)
    }
}

/// Comment listing row with the repeated window total still attached
#[derive(Debug, FromRow)]
pub struct CountedComment {
    #[sqlx(flatten)]
    pub comment: Comment,
    pub total_count: i64,
}

impl CountedComment {
    pub fn split(self) -> (Comment, i64) {
        (self.comment, self.total_count)
    }
}
