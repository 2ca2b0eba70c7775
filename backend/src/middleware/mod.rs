//! HTTP middleware shared across all routes.

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// CORS policy for the API: any origin, the standard verbs, and the
/// content-type/authorization headers.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
