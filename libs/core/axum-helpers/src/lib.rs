//! # Axum Helpers
//!
//! Shared plumbing for the HTTP surface:
//!
//! - **[`errors`]**: the JSON error body shape and the 404 fallback
//! - **[`http`]**: CORS layer
//! - **[`health`]**: liveness endpoint
//! - **[`server`]**: server bootstrap with graceful shutdown

pub mod errors;
pub mod health;
pub mod http;
pub mod server;

pub use errors::{not_found, ErrorResponse};
pub use health::{health_router, HealthResponse};
pub use http::create_cors_layer;
pub use server::{create_app, shutdown_signal};
