//! Middleware components.

pub mod auth;
pub mod request_id;

pub use auth::{require_bearer_token, BearerToken};
pub use request_id::{request_id_middleware, REQUEST_ID_HEADER};
