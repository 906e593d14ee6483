pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleVotesCommand};
pub use queries::{GetArticleQuery, ListArticlesQuery, ListArticlesResponse};

pub use routes::articles_routes;
