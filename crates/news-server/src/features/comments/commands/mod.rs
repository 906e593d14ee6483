pub mod create;
pub mod delete;
pub mod update_votes;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use update_votes::UpdateCommentVotesCommand;
