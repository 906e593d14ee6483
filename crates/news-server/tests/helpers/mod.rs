//! Test helpers for NC News API integration tests
//!
//! Every test gets its own database from `#[sqlx::test]`, loaded with the
//! `seed` fixture:
//!
//! - 3 topics: `mitch`, `cats`, `paper` (no articles)
//! - 4 users, `lurker` has written nothing
//! - 13 articles, 12 on `mitch`; article 1 has 100 votes and 11 comments
//! - 18 comments across articles 1, 3, 5, 6 and 9

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use news_server::{api, config::ContentConfig};
use serde_json::Value;
use sqlx::PgPool;
use std::path::PathBuf;
use tower::ServiceExt;

/// Router under test, without transport middleware
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(pool: PgPool) -> Self {
        Self::with_content(pool, test_content())
    }

    pub fn with_content(pool: PgPool, content: ContentConfig) -> Self {
        Self {
            router: api::app(pool, content),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body.to_string())).await
    }

    /// Send a raw, possibly malformed, JSON body
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json)
            },
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}

/// Content defaults pointing at the crate's endpoint document
pub fn test_content() -> ContentConfig {
    ContentConfig {
        endpoints_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("endpoints.json"),
        ..ContentConfig::default()
    }
}

/// Assert the `{"msg": ...}` error shape
pub fn assert_msg(body: &Value, expected: &str) {
    assert_eq!(body["msg"], expected, "unexpected error body: {body}");
}

/// Pull an integer column out of every element of a JSON array
pub fn column(rows: &Value, key: &str) -> Vec<i64> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|row| row[key].as_i64().unwrap())
        .collect()
}

pub fn is_sorted_desc(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] >= w[1])
}

pub fn is_sorted_asc(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
