//! Shared pagination utilities
//!
//! Listings take `limit` and `p` straight from the query string. Both arrive
//! as raw strings so that malformed values become a 400 through
//! [`ValidationError`] rather than a framework rejection.
//!
//! # Examples
//!
//! ```rust,ignore
//! use news_server::features::shared::pagination::PageParams;
//!
//! let params = PageParams::new(Some("5"), Some("2"));
//! let window = params.resolve()?;
//! assert_eq!((window.limit, window.offset), (5, 10));
//! ```

use serde::{Deserialize, Serialize};

use super::validation::{non_empty, ValidationError};

/// Rows returned when `limit` is absent or empty
pub const DEFAULT_LIMIT: i64 = 10;

/// Message for a page index beyond the end of a non-empty collection
pub const PAGE_NOT_FOUND_MSG: &str = "Page not found";

/// Raw `limit` and `p` query-string values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
}

/// Validated LIMIT/OFFSET pair, bound as statement parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageParams {
    pub fn new(limit: Option<&str>, p: Option<&str>) -> Self {
        Self {
            limit: limit.map(str::to_string),
            p: p.map(str::to_string),
        }
    }

    /// Validate and resolve into a LIMIT/OFFSET window
    ///
    /// `limit` must be a positive integer and defaults to [`DEFAULT_LIMIT`].
    /// `p` must be a non-negative integer. The offset is `p * limit` only when
    /// both were supplied; a page index alone still starts at row zero.
    pub fn resolve(&self) -> Result<PageWindow, ValidationError> {
        let explicit_limit = non_empty(self.limit.as_deref())
            .map(|raw| match raw.parse::<i64>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ValidationError::InvalidLimit(raw.to_string())),
            })
            .transpose()?;

        let page = non_empty(self.p.as_deref())
            .map(|raw| match raw.parse::<i64>() {
                Ok(n) if n >= 0 => Ok(n),
                _ => Err(ValidationError::InvalidPage(raw.to_string())),
            })
            .transpose()?;

        let limit = explicit_limit.unwrap_or(DEFAULT_LIMIT);
        let offset = match (explicit_limit, page) {
            (Some(limit), Some(page)) => limit
                .checked_mul(page)
                .ok_or(ValidationError::OffsetOverflow { limit, page })?,
            _ => 0,
        };

        Ok(PageWindow { limit, offset })
    }
}

/// One page of a listing plus the size of the whole filtered collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_count: i64,
}

impl<T> Page<T> {
    /// Split `total_count` off each fetched row
    ///
    /// The window function repeats the same total on every row, so the first
    /// row's value is taken. An empty page has a total of zero.
    pub fn from_counted<R>(rows: Vec<R>, split: impl Fn(R) -> (T, i64)) -> Self {
        let mut total_count = 0;
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let (row, total) = split(row);
                if i == 0 {
                    total_count = total;
                }
                row
            })
            .collect();

        Self { rows, total_count }
    }

    /// True when a non-zero offset produced no rows
    ///
    /// An empty first page is a valid answer; an empty later page is not.
    pub fn is_past_end(&self, window: PageWindow) -> bool {
        self.rows.is_empty() && window.offset > 0
    }
}
