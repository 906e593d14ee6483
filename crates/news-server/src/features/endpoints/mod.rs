pub mod queries;
pub mod routes;

pub use queries::GetEndpointsQuery;

pub use routes::endpoints_routes;
