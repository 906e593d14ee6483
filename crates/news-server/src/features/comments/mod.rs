pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{CreateCommentCommand, DeleteCommentCommand, UpdateCommentVotesCommand};
pub use queries::{ListCommentsQuery, ListCommentsResponse};

pub use routes::comments_routes;
