//! Endpoint documentation query
//!
//! Reads the JSON document describing the API from disk on every request so
//! that edits show up without a restart.

use std::path::PathBuf;

use mediator::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEndpointsQuery {
    pub path: PathBuf,
}

impl Request<AppResult<Value>> for GetEndpointsQuery {}

impl crate::cqrs::middleware::Query for GetEndpointsQuery {}

#[tracing::instrument]
pub async fn handle(query: GetEndpointsQuery) -> AppResult<Value> {
    let raw = tokio::fs::read_to_string(&query.path).await.map_err(|e| {
        AppError::internal(format!(
            "failed to read endpoints document {}: {e}",
            query.path.display()
        ))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::internal(format!(
            "endpoints document {} is not valid JSON: {e}",
            query.path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_document_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"GET /api/topics": {{"description": "serves an array of all topics"}}}}"#
        )
        .unwrap();

        let endpoints = handle(GetEndpointsQuery {
            path: file.path().to_path_buf(),
        })
        .await
        .unwrap();

        assert_eq!(
            endpoints,
            json!({ "GET /api/topics": { "description": "serves an array of all topics" } })
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_internal() {
        let dir = tempfile::tempdir().unwrap();
        let err = handle(GetEndpointsQuery {
            path: dir.path().join("absent.json"),
        })
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_internal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = handle(GetEndpointsQuery {
            path: file.path().to_path_buf(),
        })
        .await
        .unwrap_err();

        assert_eq!(
            err.classify().0,
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
