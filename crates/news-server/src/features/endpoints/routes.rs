//! `GET /api` serves the endpoint documentation

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::queries::GetEndpointsQuery;
use crate::config::ContentConfig;
use crate::error::AppError;
use crate::features::FeatureState;

pub fn endpoints_routes() -> Router<FeatureState> {
    Router::new().route("/", get(get_endpoints))
}

#[tracing::instrument(skip(content))]
async fn get_endpoints(State(content): State<Arc<ContentConfig>>) -> Result<Response, AppError> {
    let query = GetEndpointsQuery {
        path: content.endpoints_path.clone(),
    };

    let endpoints = super::queries::get::handle(query).await?;

    Ok((StatusCode::OK, Json(json!({ "endpoints": endpoints }))).into_response())
}
