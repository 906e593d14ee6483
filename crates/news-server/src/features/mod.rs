//! Feature modules implementing the NC News API
//!
//! Each feature is a vertical slice with its own commands, queries, and
//! routes, following the CQRS (Command Query Responsibility Segregation)
//! pattern.
//!
//! # Features
//!
//! - **articles**: Article listing, retrieval, creation, voting, and deletion
//! - **comments**: Comments on articles, comment voting and deletion
//! - **endpoints**: The API description served at `/api`
//! - **topics**: Topic listing and creation
//! - **users**: User listing and profiles
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - HTTP route definitions
//!
//! Commands and queries implement the mediator pattern using the `mediator` crate.

pub mod articles;
pub mod comments;
pub mod endpoints;
pub mod shared;
pub mod topics;
pub mod users;

use std::sync::Arc;

use axum::{extract::FromRef, Router};

use crate::config::ContentConfig;

/// Shared state for all feature routes
///
/// Handlers extract the piece they need (`State<PgPool>` or
/// `State<Arc<ContentConfig>>`) through [`FromRef`].
#[derive(Clone, FromRef)]
pub struct FeatureState {
    /// PostgreSQL connection pool for database operations
    pub db: sqlx::PgPool,
    /// Article defaults and the endpoint document location
    pub content: Arc<ContentConfig>,
}

impl FeatureState {
    pub fn new(db: sqlx::PgPool, content: ContentConfig) -> Self {
        Self {
            db,
            content: Arc::new(content),
        }
    }
}

/// Creates the `/api` router with all feature routes mounted
///
/// - `/` - Endpoint description
/// - `/articles` - Articles and their comments
/// - `/comments` - Comment voting and deletion
/// - `/topics` - Topics
/// - `/users` - Users
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .merge(endpoints::endpoints_routes())
        .nest("/articles", articles::articles_routes())
        .nest("/comments", comments::comments_routes())
        .nest("/topics", topics::topics_routes())
        .nest("/users", users::users_routes())
        .with_state(state)
}
