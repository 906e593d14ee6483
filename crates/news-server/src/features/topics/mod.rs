pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::CreateTopicCommand;
pub use queries::ListTopicsQuery;

pub use routes::topics_routes;
