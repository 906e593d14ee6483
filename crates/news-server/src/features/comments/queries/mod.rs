pub mod list;

pub use list::{ListCommentsQuery, ListCommentsResponse};
