pub mod get;
pub mod list;

pub use get::GetArticleQuery;
pub use list::{ListArticlesQuery, ListArticlesResponse};
