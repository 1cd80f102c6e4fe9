//! CORS layer construction shared by both services.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

/// Split a comma-separated origin list into header values, skipping blanks and
/// entries that are not valid header values.
pub fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

/// Build the CORS layer from an optional allow-list.
///
/// `None`, a blank string or a list with no usable entry yields the permissive
/// layer; otherwise only the listed origins are allowed.
pub fn build_cors(allowed_origins: Option<&str>) -> CorsLayer {
    let origins = allowed_origins.map(parse_origins).unwrap_or_default();
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }
    info!(count = origins.len(), "restricting CORS to configured origins");
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
