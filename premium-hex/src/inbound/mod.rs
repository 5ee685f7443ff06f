//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod error;
mod handlers;
mod server;

pub use error::{ApiError, respond};
pub use server::HttpServer;
