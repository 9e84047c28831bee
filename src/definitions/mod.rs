pub mod bodies;
pub mod headers;
pub mod query_params;
pub mod responses;
pub mod shared;
