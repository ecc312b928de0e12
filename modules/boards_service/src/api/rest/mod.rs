//! REST API layer

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;

pub use error::ErrorDetail;
pub use routes::{register_routes, ApiDoc};
