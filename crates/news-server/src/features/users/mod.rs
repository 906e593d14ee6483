pub mod queries;
pub mod routes;

pub use queries::{GetUserQuery, ListUsersQuery};

pub use routes::users_routes;
