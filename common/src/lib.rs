//! Shared building blocks for the Aurora Vision proxy.

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod response;
