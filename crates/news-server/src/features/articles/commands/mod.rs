pub mod create;
pub mod delete;
pub mod update_votes;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use update_votes::UpdateArticleVotesCommand;
