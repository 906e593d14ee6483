pub mod response;

use axum::{
    extract::State,
    http::StatusCode,
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;
use tower_http::compression::CompressionLayer;

use crate::config::{Config, ContentConfig};
use crate::db;
use crate::features::{self, FeatureState};
use crate::middleware;
use response::ErrorResponse;

pub const PATH_NOT_FOUND_MSG: &str = "Path not found";

/// The application routes without transport middleware
///
/// `/api` carries the feature routes and `/health` reports database
/// connectivity. Unknown paths and unsupported methods on known paths both
/// answer `404 {"msg": "Path not found"}`.
pub fn app(pool: PgPool, content: ContentConfig) -> Router {
    let api = features::router(FeatureState::new(pool.clone(), content));

    Router::new()
        .route("/health", get(health_check))
        .with_state(pool)
        .nest("/api", api)
        .fallback(path_not_found)
        .layer(map_response(method_not_allowed_as_not_found))
}

/// Create the application router with all routes and middleware
pub fn create_router(pool: PgPool, config: &Config) -> Router {
    app(pool, config.content.clone())
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

async fn health_check(State(pool): State<PgPool>) -> Result<Response, StatusCode> {
    match db::health_check(&pool).await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected"
            })),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        },
    }
}

async fn path_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(PATH_NOT_FOUND_MSG))).into_response()
}

async fn method_not_allowed_as_not_found(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return path_not_found().await;
    }
    response
}
