//! NC News Server Library
#![recursion_limit = "256"]
//!
//! HTTP server for a news discussion site: topics, articles, users, and
//! threaded-by-article comments with voting.
//!
//! # Overview
//!
//! - **API Endpoints**: JSON REST API mounted under `/api`
//! - **Database Management**: PostgreSQL integration with SQLx
//! - **Configuration**: Environment-based configuration management
//! - **Middleware**: CORS, compression, and request logging
//!
//! # Architecture
//!
//! The server follows a **CQRS (Command Query Responsibility Segregation)** layout:
//!
//! - **Commands** (Write Operations): create articles, topics and comments,
//!   adjust votes, delete articles and comments. Executed via POST, PATCH
//!   and DELETE.
//! - **Queries** (Read Operations): list and fetch articles, comments,
//!   topics, users, and the endpoint description. Executed via GET.
//!
//! Every failure is reported as `{"msg": "..."}` with a 400, 404 or 500
//! status; see [`error::AppError`].
//!
//! # Example
//!
//! ```no_run
//! use news_server::{api, config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     let app = api::create_router(pool, &config);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:9090").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod cqrs;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;

// Re-export commonly used types
pub use error::{AppError, AppResult};
