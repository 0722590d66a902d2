//! CORS middleware configuration
//!
//! Configures Cross-Origin Resource Sharing (CORS) to allow requests from
//! browser front-ends during development.

use tower_http::cors::CorsLayer;

/// Create CORS layer for development (allows any origin)
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
