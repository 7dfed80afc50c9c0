//! CORS layer construction.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Build a CORS layer from a comma-separated origin list, or `*` for any.
///
/// Returns `None` when no usable origin is given.
pub fn build_cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.trim();
    if allowed_origins.is_empty() {
        return None;
    }

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        // JSON bodies trigger preflights.
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
