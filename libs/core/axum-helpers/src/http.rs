use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer for the API.
///
/// Allows any origin. Fine for local development; restrict the origin list
/// before exposing this service publicly.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ])
}
