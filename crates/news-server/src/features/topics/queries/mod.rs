pub mod list;

pub use list::ListTopicsQuery;
