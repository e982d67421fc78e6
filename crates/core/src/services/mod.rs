pub mod query_service;
pub mod rate_service;
