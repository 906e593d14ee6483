//! Input validation utilities
//!
//! Query-string and body validation shared by the feature slices. Every
//! failure is a [`ValidationError`], which the classifier renders as
//! `400 {"msg": "Bad request"}`; the variant detail only reaches the logs.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    Json,
};
use serde_json::Value;
use thiserror::Error;

/// Reasons a request is rejected before any statement is executed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unsupported sort_by column '{0}'")]
    InvalidSortBy(String),

    #[error("order must be ASC or DESC, got '{0}'")]
    InvalidOrder(String),

    #[error("limit must be a positive integer, got '{0}'")]
    InvalidLimit(String),

    #[error("p must be a non-negative integer, got '{0}'")]
    InvalidPage(String),

    #[error("page offset overflows for limit {limit} and p {page}")]
    OffsetOverflow { limit: i64, page: i64 },

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("field '{0}' must be a 32-bit integer")]
    NotAnInteger(&'static str),

    #[error("'{0}' is not a valid id")]
    InvalidId(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("malformed query string: {0}")]
    MalformedQuery(String),
}

/// Treat absent and empty query-string values the same way
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse a path segment as a primary key
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(parse_id("7"), Ok(7));
/// assert!(parse_id("banana").is_err());
/// ```
pub fn parse_id(raw: &str) -> Result<i32, ValidationError> {
    raw.parse::<i32>()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// Require a string body field to be present and non-empty
pub fn require_text<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField(field)),
        Some(v) if v.is_empty() => Err(ValidationError::EmptyField(field)),
        Some(v) => Ok(v),
    }
}

/// Unwrap a JSON body, turning any extractor rejection into a validation error
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))
}

/// Unwrap query-string parameters the same way as [`json_body`]
pub fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, ValidationError> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| ValidationError::MalformedQuery(rejection.body_text()))
}

/// Extract a signed vote delta from a JSON value
///
/// Only JSON integers that fit in `i32` are accepted; strings, floats and
/// `null` are rejected.
pub fn vote_delta(value: Option<&Value>) -> Result<i32, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField("inc_votes"))?;
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(ValidationError::NotAnInteger("inc_votes"))
}
