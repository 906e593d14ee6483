pub mod create;

pub use create::CreateTopicCommand;
